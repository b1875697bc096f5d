use crate::animation;
use crate::camera::Camera;
use crate::error::SceneError;
use crate::scene::Scene;
use crate::scenes::SceneList;
use crate::selector::{SceneKind, Selector};

/// Changes requested by the settings panel, applied after the UI pass
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCameraDistance(f32),
    SwitchScene(String),
}

/// Everything the update and render code share from tick to tick
#[derive(Debug, Clone)]
pub struct AppState {
    scenes: SceneList,
    selector: Selector,
    camera: Camera,
    viewport: (u32, u32),
    ticks: u64,
}

impl AppState {
    pub fn new(scenes: SceneList, initial: SceneKind, width: u32, height: u32) -> Self {
        Self {
            scenes,
            selector: Selector::new(initial),
            camera: Camera::for_viewport(width, height),
            viewport: (width, height),
            ticks: 0,
        }
    }

    pub fn scenes(&self) -> &SceneList {
        &self.scenes
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn active(&self) -> SceneKind {
        self.selector.current()
    }

    pub fn active_scene(&self) -> &Scene {
        self.scenes.get(self.selector.current())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One animation step for the active scene at wall-clock `time_seconds`
    pub fn tick(&mut self, time_seconds: f64) -> SceneKind {
        let active = self.selector.current();
        animation::step(&mut self.scenes, active, time_seconds);
        self.ticks += 1;
        active
    }

    /// Switches by display name; unknown names leave the selection as is
    pub fn switch_scene(&mut self, name: &str) -> Result<SceneKind, SceneError> {
        let previous = self.selector.current();
        let kind = self.selector.switch_scene(name)?;
        if kind != previous {
            log::info!("Switched scene: {} -> {}", previous, kind);
        }
        Ok(kind)
    }

    /// Scene-choice callback: unknown names are logged and dropped
    pub fn on_scene_selected(&mut self, name: &str) {
        if let Err(e) = self.switch_scene(name) {
            log::warn!("Ignoring scene selection: {}", e);
        }
    }

    pub fn set_camera_distance(&mut self, z: f32) {
        self.camera.set_distance(z);
    }

    /// Viewport change: aspect = width / height, projection refreshed.
    ///
    /// Returns false and changes nothing for a zero-sized viewport (minimized
    /// window), where no aspect ratio exists.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.viewport = (width, height);
        self.camera.set_viewport(width as f32, height as f32);
        true
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetCameraDistance(z) => self.set_camera_distance(z),
            Action::SwitchScene(name) => self.on_scene_selected(&name),
        }
    }
}
