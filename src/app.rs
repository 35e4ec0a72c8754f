// src/app.rs

use winit::{event::WindowEvent, window::Window};

use crate::rendering_lib::renderer::Renderer;
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::ui::build_ui;
use koch_snowflake::geometry::Point2;
use koch_snowflake::path::draw_polygon;
use koch_snowflake::snowflake::{SnowflakeGenerator, DEFAULT_MIN_LENGTH};

/// Circumradius of the seed triangle in pixels. Sized for the initial
/// 1024x768 window; the loop is re-centred on resize but not re-scaled.
const CIRCUMRADIUS: f32 = 300.0;

const STROKE_COLOR: [f32; 4] = [0.9, 0.95, 1.0, 1.0];

pub struct SnowflakeApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    vertices: Vec<Point2>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl SnowflakeApp {
    pub async fn new(window: std::sync::Arc<Window>) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone()).unwrap();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap();
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .unwrap();

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // The geometry is static; generate it once. The thresholds are
        // compile-time constants, so the only generate() error (a
        // non-positive threshold) cannot occur here.
        let vertices = SnowflakeGenerator::generate(CIRCUMRADIUS, DEFAULT_MIN_LENGTH).unwrap();
        log::info!("snowflake perimeter has {} vertices", vertices.len());

        let renderer = Renderer::new(
            &device,
            config.format,
            WGSL_SHADER_SOURCE,
            size.width as f32,
            size.height as f32,
            vertices.len() + 1, // one extra vertex closes the strip
            STROKE_COLOR,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        Self {
            surface,
            device,
            queue,
            config,
            size,
            renderer,
            vertices,
            egui_ctx,
            egui_state,
            egui_renderer,
        }
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Command Encoder"),
            });

        // Loop coordinates are centred on the seed triangle's circumcentre;
        // shift the origin to the middle of the window.
        let origin = Point2::new(self.size.width as f32 / 2.0, self.size.height as f32 / 2.0);
        self.renderer.begin_frame();
        draw_polygon(&mut self.renderer, &self.vertices, origin);
        self.renderer.render_frame(
            &self.queue,
            &mut encoder,
            &view,
            self.size.width as f32,
            self.size.height as f32,
            wgpu::Color {
                r: 0.05,
                g: 0.05,
                b: 0.1,
                a: 1.0,
            },
        );

        let raw_input = self.egui_state.take_egui_input(window);
        let vertex_count = self.vertices.len();
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            build_ui(ctx, vertex_count, DEFAULT_MIN_LENGTH);
        });
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);
        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.egui_renderer
                .render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(tex_id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}
