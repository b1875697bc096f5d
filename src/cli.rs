// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::camera::{DEFAULT_DISTANCE, MAX_DISTANCE, MIN_DISTANCE};
use crate::selector::SceneKind;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

#[derive(Parser, Debug, Clone)]
#[command(name = "space-scenes")]
#[command(about = "Solar system, galaxy and space station scenes", long_about = None)]
pub struct Cli {
    /// Hide the settings and stats panels
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Scene shown at startup: "Solar System", "Galaxy" or "Space Station"
    #[arg(long, default_value = "Solar System", value_parser = parse_scene)]
    pub scene: SceneKind,

    /// Initial camera distance along Z, clamped to [20, 100]
    #[arg(long = "camera-z", default_value_t = DEFAULT_DISTANCE)]
    pub camera_z: f32,

    /// Seed for the galaxy star field (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = INITIAL_WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = INITIAL_WINDOW_HEIGHT)]
    pub height: u32,

    /// Run the animation loop without a window
    #[arg(long)]
    pub headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Print the built scenes as JSON and exit
    #[arg(long)]
    pub describe: bool,
}

impl Cli {
    pub fn camera_distance(&self) -> f32 {
        self.camera_z.clamp(MIN_DISTANCE, MAX_DISTANCE)
    }
}

fn parse_scene(s: &str) -> Result<SceneKind, String> {
    s.parse::<SceneKind>().map_err(|e| e.to_string())
}
