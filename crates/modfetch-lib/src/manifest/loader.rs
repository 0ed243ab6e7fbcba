use super::Manifest;
use crate::error::ModFetchError;
use std::io::BufReader;
use std::path::Path;

pub fn load_manifest(path: &Path) -> Result<Manifest, ModFetchError> {
    let file = std::fs::File::open(path).map_err(|source| ModFetchError::ManifestNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: Manifest = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        ModFetchError::ManifestInvalidFormat {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        path = %path.display(),
        pack = manifest.name.as_deref().unwrap_or("<unnamed>"),
        version = manifest.version_id.as_deref().unwrap_or("<unknown>"),
        game = manifest.game.as_deref().unwrap_or("<unknown>"),
        entries = manifest.files.len(),
        "Loaded manifest"
    );

    Ok(manifest)
}
