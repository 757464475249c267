pub mod bootstrap;
pub mod components;
pub mod config;
pub mod logging;
pub mod page;
pub mod utility;
