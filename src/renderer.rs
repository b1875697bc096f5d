use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::math::hex_to_linear;
use crate::mesh;
use crate::scene::{Geometry, Material, Scene};
use crate::scenes::SceneList;
use crate::selector::SceneKind;
use crate::state::AppState;
use crate::types::{FrameUniform, InstanceData, Vertex, SHADING_PHONG, SHADING_UNLIT};
use crate::ui::{FrameStats, Overlay};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const PHONG_SHININESS: f32 = 30.0;

/// Per-draw instance data for every node of `scene`, in node order
pub fn build_instances(scene: &Scene) -> Vec<InstanceData> {
    scene
        .nodes()
        .map(|(id, node)| {
            let [r, g, b] = hex_to_linear(node.material.color());
            let (shading, double_sided) = match node.material {
                Material::Phong { double_sided, .. } => {
                    (SHADING_PHONG, if double_sided { 1.0 } else { 0.0 })
                }
                Material::Basic { .. } | Material::Points { .. } => (SHADING_UNLIT, 0.0),
            };
            InstanceData {
                model: scene.world_matrix(id).to_cols_array_2d(),
                color: [r, g, b, 1.0],
                shading,
                double_sided,
                shininess: PHONG_SHININESS,
                _pad: 0.0,
            }
        })
        .collect()
}

/// Camera matrices plus the scene's lights
pub fn frame_uniform(camera: &Camera, scene: &Scene) -> FrameUniform {
    let [ar, ag, ab] = scene.ambient().map(hex_to_linear).unwrap_or([0.0; 3]);
    let (light_direction, light_color) = match scene.directional() {
        Some((color, intensity, position)) => {
            let [r, g, b] = hex_to_linear(color);
            let dir = position.normalize_or_zero();
            ([dir.x, dir.y, dir.z, intensity], [r, g, b, 1.0])
        }
        None => ([0.0; 4], [0.0; 4]),
    };

    FrameUniform {
        view_proj: camera.view_projection().to_cols_array_2d(),
        camera_position: camera.position.extend(1.0).to_array(),
        ambient: [ar, ag, ab, 1.0],
        light_direction,
        light_color,
    }
}

/// Surface configuration from the adapter's capabilities, preferring an sRGB format
pub fn surface_config(
    formats: &[wgpu::TextureFormat],
    alpha_modes: &[wgpu::CompositeAlphaMode],
    width: u32,
    height: u32,
) -> Result<wgpu::SurfaceConfiguration> {
    let format = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .context("Surface reports no supported formats")?;
    let alpha_mode = alpha_modes
        .first()
        .copied()
        .context("Surface reports no alpha modes")?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, geometry: &Geometry) -> Self {
        let (vertices, indices): (Vec<Vertex>, Option<Vec<u32>>) = match geometry {
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => {
                let m = mesh::sphere(*radius, *width_segments, *height_segments);
                (m.vertices, Some(m.indices))
            }
            Geometry::Cuboid {
                width,
                height,
                depth,
            } => {
                let m = mesh::cuboid(*width, *height, *depth);
                (m.vertices, Some(m.indices))
            }
            Geometry::Plane { width, height } => {
                let m = mesh::plane(*width, *height);
                (m.vertices, Some(m.indices))
            }
            Geometry::Points { positions } => (mesh::point_cloud(positions), None),
        };

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let (index_buffer, count) = match indices {
            Some(indices) => {
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(&indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                (Some(buffer), indices.len() as u32)
            }
            None => (None, vertices.len() as u32),
        };

        Self {
            vertex_buffer,
            index_buffer,
            count,
        }
    }
}

/// GPU copy of one scene: a mesh per node and one instance slot per node
struct GpuScene {
    meshes: Vec<GpuMesh>,
    instance_buffer: wgpu::Buffer,
}

impl GpuScene {
    fn upload(device: &wgpu::Device, scene: &Scene) -> Self {
        let meshes = scene
            .nodes()
            .map(|(_, node)| GpuMesh::upload(device, &node.name, &node.geometry))
            .collect();

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(scene.kind().name()),
            contents: bytemuck::cast_slice(&build_instances(scene)),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            meshes,
            instance_buffer,
        }
    }
}

/// Rasterizes the active scene and draws the egui overlay on top
pub struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    mesh_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    scenes: Vec<GpuScene>,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scenes: &SceneList) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);

        let surface_caps = surface.get_capabilities(&adapter);
        let config = surface_config(
            &surface_caps.formats,
            &surface_caps.alpha_modes,
            size.width,
            size.height,
        )?;
        surface.configure(&device, &config);

        let depth_view = Self::create_depth_view(&device, config.width, config.height);

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (mesh_pipeline, points_pipeline, frame_bind_group) =
            Self::create_pipelines(&device, &frame_buffer, config.format);

        let gpu_scenes = scenes
            .iter()
            .map(|scene| GpuScene::upload(&device, scene))
            .collect();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "Renderer initialized: {}x{}, {:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth_view,
            mesh_pipeline,
            points_pipeline,
            frame_buffer,
            frame_bind_group,
            scenes: gpu_scenes,
            egui_renderer,
            egui_state,
            egui_ctx,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find appropriate adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Scene Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("Failed to create device")
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipelines(
        device: &wgpu::Device,
        frame_buffer: &wgpu::Buffer,
        surface_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::RenderPipeline, wgpu::BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("frame_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let create = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout(), InstanceData::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Single-sided faces are discarded in the fragment stage
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let mesh_pipeline = create("Mesh Pipeline", wgpu::PrimitiveTopology::TriangleList);
        let points_pipeline = create("Points Pipeline", wgpu::PrimitiveTopology::PointList);

        (mesh_pipeline, points_pipeline, bind_group)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Resizes the surface and depth target; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, width, height);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    /// Returns true when egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    pub fn render(
        &mut self,
        window: &Window,
        state: &AppState,
        overlay: &mut Overlay,
        stats: &FrameStats,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let kind: SceneKind = state.active();
        let scene = state.active_scene();
        let gpu_scene = &self.scenes[kind.index()];

        self.queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&frame_uniform(state.camera(), scene)),
        );
        self.queue.write_buffer(
            &gpu_scene.instance_buffer,
            0,
            bytemuck::cast_slice(&build_instances(scene)),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_vertex_buffer(1, gpu_scene.instance_buffer.slice(..));

            for (slot, mesh) in gpu_scene.meshes.iter().enumerate() {
                let instance = slot as u32..slot as u32 + 1;
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                match &mesh.index_buffer {
                    Some(index_buffer) => {
                        render_pass.set_pipeline(&self.mesh_pipeline);
                        render_pass
                            .set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        render_pass.draw_indexed(0..mesh.count, 0, instance);
                    }
                    None => {
                        render_pass.set_pipeline(&self.points_pipeline);
                        render_pass.draw(0..mesh.count, instance);
                    }
                }
            }
        }

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            overlay.show(ctx, state, stats);
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

        let egui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();
        Ok(())
    }
}
