use crate::manifest::ManifestEntry;
use std::collections::BTreeMap;
use std::path::{MAIN_SEPARATOR, is_separator};

/// Entries that will actually be downloaded, keyed by base file name.
pub type Selection = BTreeMap<String, ManifestEntry>;

/// Last element of a manifest path, taken lexically. Trailing separators are
/// ignored, an empty path is `.` and a path of only separators is the root.
pub fn base_name(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR.to_string();
    }

    match trimmed.rfind(is_separator) {
        Some(index) => trimmed[index + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Builds the download set. Entries without any URL are left out, and an entry
/// sharing its base name with an earlier one replaces it.
pub fn select_targets(entries: impl IntoIterator<Item = ManifestEntry>) -> Selection {
    let mut selection = Selection::new();

    for entry in entries {
        if entry.downloads.is_empty() {
            tracing::debug!(path = %entry.path, "Skipping entry without download URLs");
            continue;
        }

        let key = base_name(&entry.path);
        if let Some(replaced) = selection.insert(key.clone(), entry) {
            tracing::warn!(
                name = %key,
                replaced = %replaced.path,
                "Duplicate file name in manifest, keeping the later entry"
            );
        }
    }

    selection
}
