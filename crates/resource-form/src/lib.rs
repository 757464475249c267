//! Form state and validation for the shared resource add/edit dialog.
//!
//! Nothing in this crate touches the DOM. The console binds a [`DialogState`]
//! to its rendered form and asks it which rows to show, which errors to print,
//! and what to send when the user submits.

mod cache;
pub use cache::*;
mod error;
pub use error::*;
mod kind;
pub use kind::*;
mod record;
pub use record::*;
mod rules;
pub use rules::*;
mod state;
pub use state::*;
mod submission;
pub use submission::*;
