use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use lumen_engine::core::{App, AppControl, FrameCtx, InitCtx};
use lumen_engine::device::GpuInit;
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::render::{QuadRenderer, Shader};
use lumen_engine::window::{Runtime, RuntimeConfig};
use lumen_math::{vec4, Mat4, Quat, Vec3, Vec4};

/// Radians per second of quad spin.
const SPIN_RATE: f32 = 0.5;

const CLEAR_COLOR: Vec4 = vec4(0.2, 0.5, 0.8, 1.0);

struct Game {
    shader_path: PathBuf,
    renderer: Option<QuadRenderer>,
    rotation: Quat,
}

impl Game {
    fn new(shader_path: PathBuf) -> Self {
        Self {
            shader_path,
            renderer: None,
            rotation: Quat::IDENTITY,
        }
    }
}

impl App for Game {
    fn on_init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()> {
        let shader = Shader::load(ctx.gpu.device(), &self.shader_path)?;
        self.renderer = Some(QuadRenderer::new(shader));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        self.rotation
            .set_from_axis_angle(Vec3::Z, ctx.time.elapsed * SPIN_RATE);
        let rotation = self.rotation;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            let transform = quad_transform(rotation, rctx.aspect_ratio());
            renderer.render(rctx, target, &transform);
        })
    }
}

/// Model rotation followed by an x squash so the quad stays square on screen.
fn quad_transform(rotation: Quat, aspect_ratio: f32) -> Mat4 {
    let aspect = Mat4::from_scale(Vec3::new(1.0 / aspect_ratio, 1.0, 1.0));
    aspect * rotation.to_mat4()
}

/// First CLI argument, else the shader shipped with this crate.
fn resolve_shader_path(mut args: impl Iterator<Item = String>) -> PathBuf {
    args.next().map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/shaders/basic.wgsl")
    })
}

fn run() -> Result<()> {
    let shader_path = resolve_shader_path(std::env::args().skip(1));
    log::info!("using shader {}", shader_path.display());

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        Game::new(shader_path),
    )
    .context("game terminated with an error")
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lumen_math::vec3;

    // ── shader path ───────────────────────────────────────────────────────

    #[test]
    fn shader_path_from_first_argument() {
        let path = resolve_shader_path(["custom.wgsl".to_string()].into_iter());
        assert_eq!(path, PathBuf::from("custom.wgsl"));
    }

    #[test]
    fn bundled_shader_is_default_and_loadable() {
        let path = resolve_shader_path(std::iter::empty());
        assert!(path.ends_with("data/shaders/basic.wgsl"));
        let src = std::fs::read_to_string(&path).unwrap();
        assert!(src.contains("fn vs_main("));
        assert!(src.contains("fn fs_main("));
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn square_viewport_keeps_rotation() {
        let q = Quat::from_axis_angle(Vec3::Z, 0.3);
        assert_abs_diff_eq!(quad_transform(q, 1.0), q.to_mat4(), epsilon = 1e-6);
    }

    #[test]
    fn wide_viewport_squashes_x() {
        let m = quad_transform(Quat::IDENTITY, 2.0);
        assert_abs_diff_eq!(
            m.transform_point(vec3(0.5, 0.5, 0.0)),
            vec3(0.25, 0.5, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let q = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
        let p = quad_transform(q, 1.0).transform_point(Vec3::X);
        assert_abs_diff_eq!(p, Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn clear_color_is_sky_blue() {
        assert_eq!(CLEAR_COLOR.as_array(), &[0.2, 0.5, 0.8, 1.0]);
    }
}
