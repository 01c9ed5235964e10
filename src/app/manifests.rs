use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, File};

/// Target directory for manifests on the booted node.
pub const MANIFESTS_DIR: &str = "/etc/assisted/manifests";

const MANIFEST_MODE: u32 = 0o600;

/// Embed every regular file of `manifest_path` unmodified.
///
/// Subdirectories are skipped; nothing is templated.
pub fn ingest_manifests(manifest_path: &Path) -> Result<Vec<File>, AppError> {
    let read_error =
        |source: io::Error| AppError::ManifestRead { path: manifest_path.to_path_buf(), source };

    let mut entries = fs::read_dir(manifest_path)
        .map_err(read_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    for entry in entries {
        let local_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|source| AppError::ManifestRead { path: local_path.clone(), source })?;
        if file_type.is_dir() {
            debug!("Skipping manifest subdirectory {}", local_path.display());
            continue;
        }

        let contents = fs::read(&local_path)
            .map_err(|source| AppError::ManifestRead { path: local_path.clone(), source })?;
        let target = format!("{}/{}", MANIFESTS_DIR, entry.file_name().to_string_lossy());
        debug!("Embedding manifest {} at {}", local_path.display(), target);
        files.push(File::embedded(target, MANIFEST_MODE, true, &contents));
    }
    Ok(files)
}
