use super::types::{DownloadSummary, HttpClientOptions, SavedFile};
use crate::error::{EntryError, ModFetchError};
use crate::manifest::ManifestEntry;
use crate::report::Reporter;
use crate::selection::Selection;
use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};

pub fn build_http_client(options: &HttpClientOptions) -> Result<Client, ModFetchError> {
    let mut builder = Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }
    if !options.use_system_proxy {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

/// Downloads every selected entry one after another.
///
/// Per-entry failures are reported and skipped; only a failure to write to the
/// report stream ends the batch early.
pub async fn download_all<W: Write>(
    client: &Client,
    selection: Selection,
    output_root: &Path,
    reporter: &mut Reporter<W>,
) -> Result<DownloadSummary, ModFetchError> {
    let mut summary = DownloadSummary {
        saved: 0,
        total: selection.len(),
    };

    for (name, entry) in selection {
        let outcome = match fetch_entry(client, &name, &entry).await {
            Ok(response) => {
                reporter.saving(response.status(), &name)?;
                save_response(response, &output_path_for(output_root, &entry.path)).await
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(saved) => {
                info!(
                    name = %name,
                    output = %saved.output_path.display(),
                    bytes = saved.bytes_written,
                    "Saved"
                );
                summary.saved += 1;
            }
            Err(err) => {
                warn!(name = %name, path = %entry.path, "Download failed: {}", err);
                reporter.entry_failed(&name, &err)?;
            }
        }
    }

    Ok(summary)
}

/// Where `relative` lands under `output_root`.
///
/// Root and prefix components are dropped and `..` is resolved lexically
/// without climbing above `output_root`, so the result is always inside it.
pub fn output_path_for(output_root: &Path, relative: &str) -> PathBuf {
    let mut parts: Vec<&OsStr> = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::ParentDir => {
                parts.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut output_path = output_root.to_path_buf();
    output_path.extend(parts);
    output_path
}

/// Requests the first URL of `entry` and returns the response only when the
/// server answered 200.
pub async fn fetch_entry(
    client: &Client,
    name: &str,
    entry: &ManifestEntry,
) -> Result<Response, EntryError> {
    let url = entry.primary_url().ok_or(EntryError::NoDownloadUrl)?;
    debug!(
        name = %name,
        url = %url,
        expected_size = ?entry.file_size,
        "Downloading"
    );

    let response = client.get(url).send().await.map_err(EntryError::Fetch)?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(EntryError::HttpStatus(status));
    }

    Ok(response)
}

/// Streams the body of `response` into `output_path`, creating missing parent
/// directories first.
///
/// The response and the output file are both dropped before this returns, on
/// every path. Whatever arrived before a body error stays on disk.
pub async fn save_response(
    response: Response,
    output_path: &Path,
) -> Result<SavedFile, EntryError> {
    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| EntryError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let file = tokio::fs::File::create(output_path)
        .await
        .map_err(|source| EntryError::FileCreate {
            path: output_path.to_path_buf(),
            source,
        })?;
    let mut writer = BufWriter::new(file);

    let write_error = |source: std::io::Error| EntryError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let mut body = response.bytes_stream();
    let mut bytes_written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                if let Err(flush_err) = writer.flush().await {
                    debug!(
                        output = %output_path.display(),
                        "Failed to flush partial file: {}",
                        flush_err
                    );
                }
                return Err(write_error(std::io::Error::other(err)));
            }
        };
        writer.write_all(&chunk).await.map_err(write_error)?;
        bytes_written += chunk.len() as u64;
    }
    writer.flush().await.map_err(write_error)?;

    Ok(SavedFile {
        output_path: output_path.to_path_buf(),
        bytes_written,
    })
}
