//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out by `core::FrameCtx::render`.
//!
//! Convention:
//! - geometry is in model space, transformed to clip space by a `Mat4` uniform
//! - matrices are uploaded column-major to match WGSL `mat4x4<f32>`

mod ctx;
mod mesh;
mod quad;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshVertex, QuadMesh};
pub use quad::QuadRenderer;
pub use shader::{Shader, ShaderError, FRAGMENT_ENTRY, VERTEX_ENTRY};
