use crate::error::ModFetchError;
use crate::report::Reporter;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Creates an empty file at `path` if nothing exists there yet.
pub fn ensure_default_manifest(path: &Path) -> Result<(), ModFetchError> {
    if !matches!(path.try_exists(), Ok(false)) {
        return Ok(());
    }

    tracing::debug!(path = %path.display(), "Creating empty default manifest");
    std::fs::File::create(path)
        .map(drop)
        .map_err(|source| ModFetchError::DefaultFileCreate {
            path: path.to_path_buf(),
            source,
        })
}

/// Asks for a manifest path and reads a single line of `input`. A blank
/// answer (or end of input) selects `default`.
pub fn prompt_manifest_path<R: BufRead, W: Write>(
    default: &Path,
    input: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<PathBuf, ModFetchError> {
    reporter.prompt(default)?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(PathBuf::from(answer))
    }
}
