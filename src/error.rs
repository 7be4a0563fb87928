use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusnavError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown place '{0}'")]
    UnknownPlace(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read event script '{path}': {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse event script: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Destination '{0}' has no coordinates")]
    UnlocatedDestination(String),

    #[error("Failed to read position trace '{path}': {source}")]
    ReadTrace {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse position trace: {0}")]
    ParseTrace(#[from] serde_yaml::Error),

    #[error("Route request failed: {0}")]
    Route(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
