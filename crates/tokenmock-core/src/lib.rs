//! Tokenmock Core Library
//!
//! Synthetic token-market metrics for dashboards and demos. Generates token
//! records with bounded random fields and a short chart history each, and
//! renders them as JSON. Performs no I/O of its own.
//!
//! # Modules
//!
//! - [`token`] - Token record, chart point and narrative label types
//! - [`generator`] - Seedable random generation of records and chart history
//! - [`report`] - JSON rendering and banner framing
//! - [`config`] - Generator configuration and defaults
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod token;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use generator::{generate_chart_history, TokenGenerator};
pub use report::{render, render_report};
pub use token::{ChartPoint, NarrativeMomentum, TokenRecord};

/// Generate records as described by `config`
pub fn generate_tokens(config: &GeneratorConfig) -> Result<Vec<TokenRecord>> {
    let mut generator = TokenGenerator::from_config(config)?;
    Ok(generator.generate(config.token_count))
}
