#[allow(clippy::module_inception)]
mod download;
mod types;

pub use download::{
    build_http_client, download_all, fetch_entry, output_path_for, save_response,
};
pub use types::{DownloadSummary, HttpClientOptions, SavedFile};
