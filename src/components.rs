pub mod resource_dialog;
mod spinner;
pub use spinner::*;
