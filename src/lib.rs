mod utils;

pub mod animator;
pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod random;
pub mod renderer;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use animator::{Animator, AnimatorState};
pub use background::ParticleBackground;
pub use color::Color;
pub use config::FieldConfig;
pub use error::MountError;
pub use field::{Connection, ParticleField};
pub use particle::Particle;
pub use random::{FixedSequence, RandSource, RandomSource};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging(log::Level::Info);
}

/// Like `initialize`, with the console log level given by name
/// ("error", "warn", "info", "debug", "trace"). Unknown names fall back to info.
#[wasm_bindgen]
pub fn initialize_with_level(level: &str) {
    utils::set_panic_hook();
    utils::init_logging(level.parse().unwrap_or(log::Level::Info));
}
