use clap::{Args, Parser, Subcommand, ValueEnum};
use notegraph_core::{ContentType, DateRange};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

use crate::formatting::OutputFormat;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Field a search query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    All,
    Title,
    Content,
    Path,
}

impl From<SearchField> for ContentType {
    fn from(field: SearchField) -> Self {
        match field {
            SearchField::All => ContentType::All,
            SearchField::Title => ContentType::Title,
            SearchField::Content => ContentType::Content,
            SearchField::Path => ContentType::Path,
        }
    }
}

/// Recency window for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Since {
    All,
    #[value(name = "7days")]
    Days7,
    #[value(name = "30days")]
    Days30,
    #[value(name = "90days")]
    Days90,
}

impl From<Since> for DateRange {
    fn from(since: Since) -> Self {
        match since {
            Since::All => DateRange::All,
            Since::Days7 => DateRange::Last7Days,
            Since::Days30 => DateRange::Last30Days,
            Since::Days90 => DateRange::Last90Days,
        }
    }
}

#[derive(Parser)]
#[command(name = "ng")]
#[command(about = "ng - explore links, tags and backlinks across a collection of notes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Note snapshot: a JSON array of notes or a directory of markdown files
    #[arg(short = 'n', long, global = true, env = "NOTEGRAPH_NOTES")]
    pub notes: Option<PathBuf>,

    /// Config file path (defaults to ~/.config/notegraph/config.toml)
    #[arg(short = 'C', long, global = true, env = "NOTEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Set output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search notes by text and filters
    Search(SearchArgs),

    /// Show notes linking to, mentioning, or sharing tags with a note
    Backlinks {
        /// Title (or id) of the target note
        note: String,
    },

    /// List every tag in the collection
    Tags {
        /// Include how many notes carry each tag
        #[arg(long)]
        counts: bool,
    },

    /// List every folder in the collection
    Folders,

    /// Project the collection into a graph with a circular layout
    Graph {
        /// Viewport width (overrides config)
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height (overrides config)
        #[arg(long)]
        height: Option<f64>,

        /// Add edges between notes that share tags
        #[arg(long)]
        tag_edges: bool,
    },

    /// Extract links and tags from a piece of text
    Links {
        /// Text to scan
        text: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive text to look for (omit to list everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict the query to one field
    #[arg(long = "in", value_enum)]
    pub field: Option<SearchField>,

    /// Only notes updated within this window
    #[arg(long, value_enum)]
    pub since: Option<Since>,

    /// Keep notes carrying any of these tags (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Keep notes whose path starts with any of these prefixes (repeatable)
    #[arg(long = "folder")]
    pub folders: Vec<String>,
}

impl SearchArgs {
    /// True if any structured filter was requested on the command line
    pub fn has_filters(&self) -> bool {
        self.field.is_some() || self.since.is_some() || !self.tags.is_empty() || !self.folders.is_empty()
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Dump,
}
