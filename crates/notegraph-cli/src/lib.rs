//! Notegraph CLI library
//!
//! Loads a note snapshot from disk and runs the relationship engine over it:
//! search, backlinks, taxonomy, graph projection and annotation extraction.

pub mod cli;
pub mod commands;
pub mod formatting;
pub mod loader;
pub mod logging;
