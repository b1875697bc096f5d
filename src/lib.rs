pub mod animation;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod error;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod selector;
pub mod state;
pub mod types;
pub mod ui;

pub use error::SceneError;
pub use scenes::SceneList;
pub use selector::{SceneKind, Selector};
pub use state::{Action, AppState};
