//! Generator configuration
//!
//! - `generator_config`: Configuration structure
//! - `defaults`: Default configuration values

pub mod defaults;
pub mod generator_config;

pub use generator_config::GeneratorConfig;
