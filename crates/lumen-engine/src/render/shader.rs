use std::fmt;
use std::path::{Path, PathBuf};

/// Vertex stage entry point every shader file must define.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment stage entry point every shader file must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Error returned by [`Shader::load`].
#[derive(Debug)]
pub enum ShaderError {
    /// The file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source lacks a required stage entry point.
    MissingEntryPoint { path: PathBuf, entry: &'static str },
    /// The driver rejected the source. `stage_log` holds one diagnostic per line.
    Compile { path: PathBuf, stage_log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Read { path, source } => {
                write!(f, "failed to read shader {}: {source}", path.display())
            }
            ShaderError::MissingEntryPoint { path, entry } => {
                write!(f, "shader {} has no `{entry}` entry point", path.display())
            }
            ShaderError::Compile { path, stage_log } => {
                write!(f, "shader {} failed to compile:\n{stage_log}", path.display())
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A compiled WGSL module holding both pipeline stages.
#[derive(Debug)]
pub struct Shader {
    module: wgpu::ShaderModule,
}

impl Shader {
    /// Reads `path`, compiles it on `device`, and reports compiler errors.
    ///
    /// Blocks on the compilation info query; call during initialization only.
    pub fn load(device: &wgpu::Device, path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = read_shader_source(path)?;

        // Catch validation errors here instead of the device's panicking default handler.
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        let info = pollster::block_on(module.get_compilation_info());
        let scope_error = pollster::block_on(scope.pop());

        for msg in &info.messages {
            if msg.message_type == wgpu::CompilationMessageType::Warning {
                log::warn!("{}: {}", path.display(), msg.message);
            }
        }

        let mut errors: Vec<Diagnostic> = info
            .messages
            .iter()
            .filter(|m| m.message_type == wgpu::CompilationMessageType::Error)
            .map(Diagnostic::from)
            .collect();

        if let (true, Some(err)) = (errors.is_empty(), scope_error) {
            errors.push(Diagnostic {
                line: None,
                column: None,
                message: err.to_string(),
            });
        }

        if let Some(stage_log) = format_stage_log(&errors) {
            return Err(ShaderError::Compile {
                path: path.to_path_buf(),
                stage_log,
            });
        }

        log::info!("loaded shader {}", path.display());
        Ok(Self { module })
    }

    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}

/// Reads shader source and checks that both stage entry points are declared.
pub(crate) fn read_shader_source(path: &Path) -> Result<String, ShaderError> {
    let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    for entry in [VERTEX_ENTRY, FRAGMENT_ENTRY] {
        if !declares_entry_point(&source, entry) {
            return Err(ShaderError::MissingEntryPoint {
                path: path.to_path_buf(),
                entry,
            });
        }
    }

    Ok(source)
}

fn declares_entry_point(source: &str, entry: &str) -> bool {
    source
        .lines()
        .map(|line| line.split("//").next().unwrap_or_default())
        .any(|line| {
            line.match_indices("fn ").any(|(at, kw)| {
                line[at + kw.len()..]
                    .trim_start()
                    .strip_prefix(entry)
                    .is_some_and(|tail| tail.trim_start().starts_with('('))
            })
        })
}

/// One compiler message with an optional 1-based source position.
#[derive(Debug, Clone, PartialEq)]
struct Diagnostic {
    line: Option<u32>,
    column: Option<u32>,
    message: String,
}

impl From<&wgpu::CompilationMessage> for Diagnostic {
    fn from(msg: &wgpu::CompilationMessage) -> Self {
        Self {
            line: msg.location.as_ref().map(|l| l.line_number),
            column: msg.location.as_ref().map(|l| l.line_position),
            message: msg.message.clone(),
        }
    }
}

/// Joins diagnostics into a stage log, `None` when there are none.
fn format_stage_log(diagnostics: &[Diagnostic]) -> Option<String> {
    if diagnostics.is_empty() {
        return None;
    }

    let lines: Vec<String> = diagnostics
        .iter()
        .map(|d| match (d.line, d.column) {
            (Some(line), Some(col)) => format!("{line}:{col}: {}", d.message),
            (Some(line), None) => format!("{line}: {}", d.message),
            _ => d.message.clone(),
        })
        .collect();

    Some(lines.join("\n"))
}
