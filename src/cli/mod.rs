pub mod context;
pub mod markers;
pub mod navigate;
pub mod replay;
pub mod schema;
pub mod search;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campusnav")]
#[command(
    author,
    version,
    about = "Place search, map marker selection and walking navigation for a campus map"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (default: campusnav.yaml if present)
    #[arg(short, long, global = true, env = "CAMPUSNAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter places by free text and category
    Search(SearchArgs),

    /// Choose the markers to draw for a viewport
    Markers(MarkersArgs),

    /// Replay a recorded map screen event script
    Replay(ReplayArgs),

    /// Follow a GPS trace to a place
    Navigate(NavigateArgs),

    /// Print JSON Schema for config validation
    Schema,
}

/// Overrides for the cached catalog files
#[derive(Args, Clone, Debug, Default)]
pub struct CatalogArgs {
    /// Cached `GET /places` response
    #[arg(long)]
    pub places: Option<PathBuf>,

    /// Cached `GET /place-types` response
    #[arg(long)]
    pub place_types: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct SearchArgs {
    /// Free-text query (empty matches everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Only places of this place type id
    #[arg(long)]
    pub category: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser, Clone)]
pub struct MarkersArgs {
    /// Viewport center latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Viewport center longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Viewport latitude span (0 disables proximity ranking)
    #[arg(long, default_value_t = 0.0)]
    pub lat_delta: f64,

    /// Viewport longitude span (0 disables proximity ranking)
    #[arg(long, default_value_t = 0.0)]
    pub lng_delta: f64,

    /// Selected place id, always kept
    #[arg(long)]
    pub selected: Option<String>,

    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long)]
    pub category: Option<String>,

    /// Override max markers
    #[arg(long)]
    pub max: Option<usize>,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser, Clone)]
pub struct ReplayArgs {
    /// Event script (YAML or JSON)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Override debounce window
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    #[arg(long)]
    pub json: bool,

    /// Also write all frames as JSON to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser, Clone)]
pub struct NavigateArgs {
    /// Destination place id
    #[arg(long)]
    pub to: String,

    /// GPS trace (YAML or JSON)
    #[arg(long)]
    pub trace: PathBuf,

    /// Override poll interval
    #[arg(long)]
    pub interval_ms: Option<u64>,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}
