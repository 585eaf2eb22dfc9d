//! Component-specific configuration sections

pub mod graph;
pub mod logging;
pub mod search;

pub use graph::GraphConfig;
pub use logging::LoggingConfig;
pub use search::{ContentType, DateRange, SearchConfig};
