#[cfg(not(target_family = "wasm"))]
pub mod console;
pub mod wasm;
