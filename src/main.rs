use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use space_scenes::animation::STATION_YAW_STEP;
use space_scenes::cli::Cli;
use space_scenes::clock::{Clock, FpsCounter, TimeSource, WallClock};
use space_scenes::frame::{run_loop, CancellationToken, FrameIterator};
use space_scenes::renderer::Renderer;
use space_scenes::scenes::SceneList;
use space_scenes::selector::SceneKind;
use space_scenes::state::AppState;
use space_scenes::ui::{FrameStats, Overlay};

const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";
const HEADLESS_FRAME: Duration = Duration::from_millis(16);

struct App {
    state: AppState,
    overlay: Overlay,
    width: u32,
    height: u32,
    clock: Clock,
    fps: FpsCounter,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
}

impl App {
    fn new(cli: &Cli, state: AppState) -> Self {
        let overlay = Overlay::new(!cli.no_ui, &state);
        Self {
            state,
            overlay,
            width: cli.width,
            height: cli.height,
            clock: Clock::new(),
            fps: FpsCounter::new(),
            window: None,
            renderer: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.update(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        self.state.tick(WallClock.now_seconds());

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let stats = FrameStats {
            fps: self.fps.fps(),
            frame_time_ms: self.fps.frame_time_ms(),
            resolution: renderer.size(),
        };

        match renderer.render(window, &self.state, &mut self.overlay, &stats) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = renderer.size();
                log::warn!("Surface lost, reconfiguring at {}x{}", width, height);
                renderer.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }

        for action in self.overlay.take_actions() {
            self.state.apply(action);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Space Scenes")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(Renderer::new(window.clone(), self.state.scenes())) {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("Failed to initialize renderer: {:#}", e);
                        event_loop.exit();
                        return;
                    }
                };

            let size = window.inner_size();
            self.state.resize(size.width, size.height);
            self.clock.reset();

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if self.state.resize(size.width, size.height) {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size.width, size.height);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_headless(state: &mut AppState, ticks: u64) {
    let token = CancellationToken::new();
    if ticks == 0 {
        token.cancel();
    }
    let ran = run_loop(state, &WallClock, FrameIterator::new(), &token, |_, _, frame| {
        if frame.number + 1 >= ticks {
            token.cancel();
        } else {
            std::thread::sleep(HEADLESS_FRAME);
        }
    });

    let scenes = state.scenes();
    match state.active() {
        SceneKind::SolarSystem => {
            let solar = scenes.get(SceneKind::SolarSystem);
            for id in scenes.planets() {
                let node = solar.node(*id);
                log::info!("{} at {:?}", node.name, node.transform.position);
            }
        }
        SceneKind::Galaxy => {
            let stars = scenes.get(SceneKind::Galaxy).point_count();
            log::info!("Galaxy: {} stars (static)", stars);
        }
        SceneKind::SpaceStation => {
            let yaw = scenes
                .get(SceneKind::SpaceStation)
                .node(scenes.station())
                .transform
                .rotation
                .y;
            log::info!("Station yaw {:.4} rad ({:.4} rad/tick)", yaw, STATION_YAW_STEP);
        }
    }
    log::info!("Headless run finished after {} ticks", ran);
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let scenes = SceneList::build(&mut rng);

    if cli.describe {
        let json = serde_json::to_string_pretty(&scenes.summaries())
            .context("Failed to serialize scene summaries")?;
        println!("{}", json);
        return Ok(());
    }

    let mut state = AppState::new(scenes, cli.scene, cli.width, cli.height);
    state.set_camera_distance(cli.camera_distance());

    if cli.headless {
        run_headless(&mut state, cli.ticks);
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(&cli, state);

    println!("Space Scenes - {} (Escape to quit)", cli.scene);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    Ok(())
}
