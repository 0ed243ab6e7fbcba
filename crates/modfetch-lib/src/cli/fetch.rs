use crate::cli::FetchParams;
use crate::download::{DownloadSummary, build_http_client, download_all};
use crate::error::ModFetchError;
use crate::manifest::load_manifest;
use crate::report::Reporter;
use crate::selection::select_targets;
use std::io::Write;

pub async fn run_fetch<W: Write>(
    params: FetchParams,
    reporter: &mut Reporter<W>,
) -> Result<DownloadSummary, ModFetchError> {
    let FetchParams {
        manifest_path,
        output_root,
        http,
    } = params;

    tracing::info!("Loading manifest from {}", manifest_path.display());
    let manifest = load_manifest(&manifest_path)?;

    let selection = select_targets(manifest.files);
    tracing::info!(
        "Downloading {} files into {}",
        selection.len(),
        output_root.display()
    );

    let client = build_http_client(&http)?;
    let summary = download_all(&client, selection, &output_root, reporter).await?;
    reporter.summary(&summary)?;

    tracing::info!(saved = summary.saved, total = summary.total, "Finished");
    Ok(summary)
}
