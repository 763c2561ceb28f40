pub mod app;
pub mod canvas;
pub mod cli;
pub mod color;
pub mod error;
pub mod export;
pub mod figure;
pub mod renderer;
pub mod scene;
pub mod surface;

pub use canvas::Canvas;
pub use color::{Color, Palette};
pub use error::SceneError;
pub use figure::Figure;
pub use scene::Scene;
