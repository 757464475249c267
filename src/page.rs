mod app;
pub use app::*;
mod resources;
pub use resources::*;
