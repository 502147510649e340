use bytemuck::{Pod, Zeroable};
use lumen_math::Mat4;
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};

use super::mesh::{MeshVertex, QuadMesh};
use super::shader::{Shader, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Draws [`QuadMesh`] with a user shader and a per-frame transform.
///
/// The shader reads the transform from `@group(0) @binding(0)` as a
/// `mat4x4<f32>` and takes [`MeshVertex`] attributes at locations 0..=2.
pub struct QuadRenderer {
    shader: Shader,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl QuadRenderer {
    pub fn new(shader: Shader) -> Self {
        Self {
            shader,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            transform_ubo: None,
            vbo: None,
            ibo: None,
        }
    }

    /// Draws the quad into `target` after what is already there.
    ///
    /// GPU resources are created on first use and the pipeline is rebuilt when
    /// the surface format changes.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, transform: &Mat4) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        self.write_transform_uniform(ctx, transform);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), QuadMesh::INDEX_FORMAT);
        rpass.draw_indexed(0..QuadMesh::index_count(), 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("lumen quad bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(TransformUniform::SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("lumen quad pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let module = self.shader.module();
        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lumen quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("quad pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.transform_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.transform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let transform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen quad transform ubo"),
            size: TransformUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen quad bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        self.transform_ubo = Some(transform_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumen quad vbo"),
            contents: bytemuck::cast_slice(&QuadMesh::VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumen quad ibo"),
            contents: bytemuck::cast_slice(&QuadMesh::INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_transform_uniform(&mut self, ctx: &RenderCtx<'_>, transform: &Mat4) {
        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        let u = TransformUniform::from_mat4(transform);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

/// GPU copy of a [`Mat4`], laid out column-major as WGSL expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct TransformUniform {
    cols: [[f32; 4]; 4],
}

impl TransformUniform {
    const SIZE: u64 = std::mem::size_of::<TransformUniform>() as u64;

    fn from_mat4(m: &Mat4) -> Self {
        Self {
            cols: m.to_cols_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{vec3, Vec3};

    #[test]
    fn uniform_is_one_mat4x4() {
        assert_eq!(TransformUniform::SIZE, 64);
    }

    #[test]
    fn uniform_stores_columns() {
        let m = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
        let u = TransformUniform::from_mat4(&m);
        // Translation sits in the last column, which WGSL reads as `transform[3]`.
        assert_eq!(u.cols[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.cols[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn uniform_bytes_follow_column_order() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0)) * Mat4::from_translation(Vec3::X);
        let u = TransformUniform::from_mat4(&m);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[12..16], &[2.0, 0.0, 0.0, 1.0]);
        assert_eq!(floats[5], 3.0);
    }
}
