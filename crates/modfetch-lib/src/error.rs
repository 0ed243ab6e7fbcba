use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum ModFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", path.display())]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {}", path.display())]
    ManifestInvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create default file: {source}")]
    DefaultFileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors local to a single manifest entry. The batch continues past all of them.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("no download URL")]
    NoDownloadUrl,

    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("server responded with {0}")]
    HttpStatus(StatusCode),

    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
