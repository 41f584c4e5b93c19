//! Finding the files of a folder that a batch should convert.

use std::path::Path;
use tracing::warn;

use super::error::BatchError;

/// Lists `folder` once and keeps entry names ending in `source_extension`.
///
/// The match is an exact, case-sensitive suffix match on the entry name. Names
/// come back in directory listing order; they are not sorted. Entries whose
/// names are not valid UTF-8 are skipped.
pub async fn find_source_files(
    folder: &Path,
    source_extension: &str,
) -> Result<Vec<String>, BatchError> {
    let list_error = |source| BatchError::ListDirectory {
        path: folder.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(folder).await.map_err(list_error)?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(list_error)? {
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(source_extension) => names.push(name),
            Ok(_) => {}
            Err(raw) => warn!("Skipping entry with non UTF-8 name: {:?}", raw),
        }
    }

    Ok(names)
}

/// Replaces the trailing `source_extension` of `source_name` with `target_extension`.
///
/// Only meaningful for names that end in `source_extension`; other names get
/// the target extension appended.
pub fn target_file_name(source_name: &str, source_extension: &str, target_extension: &str) -> String {
    let stem = source_name
        .strip_suffix(source_extension)
        .unwrap_or(source_name);
    format!("{}{}", stem, target_extension)
}
