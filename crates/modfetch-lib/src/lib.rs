pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manifest;
pub mod report;
pub mod selection;

pub use config::Settings;
pub use error::{EntryError, ModFetchError};
