use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Sum of all clamped deltas since the clock started, in seconds.
    ///
    /// Drives animation; long stalls advance it by at most `dt_max`.
    pub elapsed: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a new clock with default clamps.
    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching `elapsed` or the frame counter.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(raw)
    }

    /// Advances by an explicit raw delta. Shared by `tick` and tests.
    fn advance(&mut self, raw: Duration) -> FrameTime {
        let dt = raw.clamp(self.dt_min, self.dt_max);
        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed as f32,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn tiny_delta_clamped_to_min() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::ZERO);
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MIN.as_secs_f32());
    }

    #[test]
    fn stall_clamped_to_max() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_secs(10));
        assert_eq!(ft.dt, 0.25);
        assert_eq!(ft.elapsed, 0.25);
    }

    #[test]
    fn in_range_delta_passes_through() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn custom_clamps_respected() {
        let mut clock =
            FrameClock::with_clamps(Duration::from_millis(10), Duration::from_millis(20));
        assert!((clock.advance(Duration::from_millis(1)).dt - 0.010).abs() < 1e-6);
        assert!((clock.advance(Duration::from_millis(50)).dt - 0.020).abs() < 1e-6);
    }

    // ── counters ──────────────────────────────────────────────────────────

    #[test]
    fn frame_index_starts_at_zero_and_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn elapsed_accumulates_clamped_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(100));
        clock.advance(Duration::from_millis(100));
        let ft = clock.advance(Duration::from_millis(50));
        assert!((ft.elapsed - 0.25).abs() < 1e-6);
    }

    #[test]
    fn reset_keeps_elapsed_and_index() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(100));
        clock.reset();
        let ft = clock.advance(Duration::from_millis(100));
        assert_eq!(ft.frame_index, 1);
        assert!((ft.elapsed - 0.2).abs() < 1e-6);
    }

    #[test]
    fn tick_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed > a.elapsed);
        assert!(b.dt > 0.0);
    }
}
