// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::vertex::Vertex;
use koch_snowflake::geometry::Point2;
use koch_snowflake::path::DrawTarget;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenDimensionsUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

/// Strokes closed polygon paths in screen space. Paths are collected per
/// frame through the `DrawTarget` capability and drawn as line strips,
/// one strip per stroked path.
pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    max_vertices: usize,

    frame_vertices: Vec<Vertex>,
    // (first vertex, count) per stroked path this frame
    frame_strips: Vec<(u32, u32)>,
    stroke_color: [f32; 4],

    screen_uniform_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        initial_screen_width: f32,
        initial_screen_height: f32,
        max_vertices: usize,
        stroke_color: [f32; 4],
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_uniform_data = ScreenDimensionsUniform {
            width: initial_screen_width,
            height: initial_screen_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        let screen_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Dimensions Uniform Buffer"),
            contents: bytemuck::bytes_of(&screen_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("screen_dimensions_bind_group_layout"),
            });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_uniform_buffer.as_entire_binding(),
            }],
            label: Some("screen_dimensions_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Renderer Pipeline Layout"),
                bind_group_layouts: &[&screen_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Renderer Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Path Vertex Buffer"),
            size: (max_vertices * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            max_vertices,
            frame_vertices: Vec::with_capacity(max_vertices),
            frame_strips: Vec::new(),
            stroke_color,
            screen_uniform_buffer,
            screen_bind_group,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_vertices.clear();
        self.frame_strips.clear();
    }

    pub fn render_frame(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        screen_width: f32,
        screen_height: f32,
        clear_color: wgpu::Color,
    ) {
        let screen_uniform_data = ScreenDimensionsUniform {
            width: screen_width,
            height: screen_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        queue.write_buffer(
            &self.screen_uniform_buffer,
            0,
            bytemuck::bytes_of(&screen_uniform_data),
        );

        if self.frame_vertices.len() > self.max_vertices {
            log::warn!(
                "frame has {} path vertices but the buffer holds {}; dropping the excess",
                self.frame_vertices.len(),
                self.max_vertices
            );
            self.frame_vertices.truncate(self.max_vertices);
            let limit = self.max_vertices as u32;
            self.frame_strips.retain_mut(|(first, count)| {
                if *first >= limit {
                    return false;
                }
                *count = (*count).min(limit - *first);
                *count >= 2
            });
        }

        if !self.frame_vertices.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.frame_vertices),
            );
        }

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Path Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !self.frame_vertices.is_empty() {
                let buffer_slice_size =
                    (self.frame_vertices.len() * std::mem::size_of::<Vertex>()) as u64;

                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..buffer_slice_size));
                for &(first, count) in &self.frame_strips {
                    render_pass.draw(first..first + count, 0..1);
                }
            }
        }
    }
}

impl DrawTarget for Renderer {
    fn stroke_closed_path(&mut self, points: &[Point2]) {
        if points.len() < 2 {
            return;
        }

        let first = self.frame_vertices.len() as u32;
        for point in points {
            self.frame_vertices
                .push(Vertex::new([point.x, point.y], self.stroke_color));
        }
        // Close the path: the strip returns to the first vertex.
        self.frame_vertices
            .push(Vertex::new([points[0].x, points[0].y], self.stroke_color));
        self.frame_strips.push((first, points.len() as u32 + 1));
    }
}
