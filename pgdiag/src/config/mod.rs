//! Rendering configuration

pub mod defaults;
mod settings;

pub use settings::RenderOptions;
