use crate::download::HttpClientOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub manifest_path: PathBuf,
    pub output_root: PathBuf,
    pub http: HttpClientOptions,
}
