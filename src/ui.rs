use crate::camera::{MAX_DISTANCE, MIN_DISTANCE};
use crate::selector::SceneKind;
use crate::state::{Action, AppState};

/// Per-frame numbers shown in the info window
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub resolution: (u32, u32),
}

/// Settings panel and info window.
///
/// Widgets edit local copies; the resulting changes are queued as `Action`s
/// and applied to `AppState` once the UI pass is over.
#[derive(Debug)]
pub struct Overlay {
    visible: bool,
    camera_z: f32,
    scene: SceneKind,
    actions: Vec<Action>,
}

impl Overlay {
    pub fn new(visible: bool, state: &AppState) -> Self {
        Self {
            visible,
            camera_z: state.camera().distance(),
            scene: state.active(),
            actions: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &AppState, stats: &FrameStats) {
        if !self.visible {
            return;
        }

        self.camera_z = state.camera().distance();
        self.scene = state.active();

        self.settings_window(ctx);
        Self::info_window(ctx, state, stats);
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Settings")
            .title_bar(true)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Camera")
                    .default_open(true)
                    .show(ui, |ui| {
                        let mut z = self.camera_z;
                        let range = MIN_DISTANCE..=MAX_DISTANCE;
                        let response = ui.add(egui::Slider::new(&mut z, range).text("z"));
                        if response.changed() {
                            self.camera_z = z;
                            self.actions.push(Action::SetCameraDistance(z));
                        }
                    });

                egui::CollapsingHeader::new("Scene")
                    .default_open(true)
                    .show(ui, |ui| {
                        let mut selected = self.scene;
                        egui::ComboBox::from_label("Scene")
                            .selected_text(selected.name())
                            .show_ui(ui, |ui| {
                                for kind in SceneKind::ALL {
                                    ui.selectable_value(&mut selected, kind, kind.name());
                                }
                            });
                        if selected != self.scene {
                            self.scene = selected;
                            let name = selected.name().to_string();
                            self.actions.push(Action::SwitchScene(name));
                        }
                    });
            });
    }

    fn info_window(ctx: &egui::Context, state: &AppState, stats: &FrameStats) {
        let summary = state.active_scene().summary();

        egui::Window::new("Info")
            .title_bar(true)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", stats.fps))
                        .size(28.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.label(
                    egui::RichText::new(format!("{:.2} ms", stats.frame_time_ms))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );

                ui.add_space(5.0);
                ui.separator();

                ui.label(
                    egui::RichText::new(summary.name)
                        .size(16.0)
                        .color(egui::Color32::from_rgb(200, 150, 100)),
                );
                ui.monospace(format!("Nodes: {}", summary.nodes));
                if summary.points > 0 {
                    ui.monospace(format!("Points: {}", summary.points));
                }
                ui.monospace(format!("Lights: {}", summary.lights));

                ui.add_space(5.0);
                ui.separator();

                ui.monospace(format!(
                    "Resolution: {}x{}",
                    stats.resolution.0, stats.resolution.1
                ));
                ui.monospace(format!("Camera z: {:.1}", state.camera().distance()));
            });
    }
}
