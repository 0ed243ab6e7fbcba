use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_ROOT: &str = "returns";
pub const DEFAULT_MANIFEST_PATH: &str = "./modrinth.index.json";

pub fn default_user_agent() -> String {
    format!("modfetch/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory every downloaded file is placed under
    pub output_root: PathBuf,
    /// Manifest offered when the prompt is answered with an empty line
    pub default_manifest: PathBuf,
    pub user_agent: String,
    /// Whole-request timeout; the HTTP client default applies when unset
    pub request_timeout_secs: Option<u64>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY`
    pub use_system_proxy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            default_manifest: PathBuf::from(DEFAULT_MANIFEST_PATH),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
            use_system_proxy: true,
        }
    }
}
