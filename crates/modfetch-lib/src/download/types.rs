use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Entries that received a 200 and were written completely
    pub saved: usize,
    /// Size of the selection, regardless of outcome
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFile {
    pub output_path: PathBuf,
    pub bytes_written: u64,
}

#[derive(Clone, Debug)]
pub struct HttpClientOptions {
    pub user_agent: String,
    pub request_timeout: Option<Duration>,
    /// Route requests through the proxy named by `HTTP_PROXY`/`HTTPS_PROXY`
    pub use_system_proxy: bool,
}
