//! # Notegraph Configuration Library
//!
//! Typed configuration for the notegraph workspace.
//!
//! ## Features
//!
//! - TOML loading with per-section defaults
//! - Validation of graph layout parameters
//! - Shared search enums (`ContentType`, `DateRange`) used by the core filters
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notegraph_config::NotegraphConfig;
//!
//! let config = NotegraphConfig::load_or_default("notegraph.toml")?;
//! println!("viewport: {}x{}", config.graph.width, config.graph.height);
//! # Ok::<(), notegraph_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
mod config;
mod error;

pub use components::{ContentType, DateRange, GraphConfig, LoggingConfig, SearchConfig};
pub use config::NotegraphConfig;
pub use error::{ConfigError, ConfigResult};
