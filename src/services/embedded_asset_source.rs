use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;
use crate::ports::{AssetEntry, AssetSource};

static IGNITION_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/ignition");

/// Asset source backed by the template trees compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssetSource;

impl EmbeddedAssetSource {
    pub fn new() -> Self {
        Self
    }

    fn dir(path: &str) -> Option<&'static Dir<'static>> {
        let path = path.trim_matches('/');
        if path.is_empty() { Some(&IGNITION_DIR) } else { IGNITION_DIR.get_dir(path) }
    }
}

impl AssetSource for EmbeddedAssetSource {
    fn read_dir(&self, path: &str) -> Result<Vec<AssetEntry>, AppError> {
        let dir = Self::dir(path).ok_or_else(|| AppError::AssetNotFound(path.to_string()))?;

        let mut entries: Vec<AssetEntry> = dir
            .entries()
            .iter()
            .filter_map(|entry| {
                let name = entry.path().file_name()?.to_string_lossy().to_string();
                Some(AssetEntry { name, is_dir: matches!(entry, DirEntry::Dir(_)) })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, AppError> {
        IGNITION_DIR
            .get_file(path.trim_matches('/'))
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| AppError::AssetNotFound(path.to_string()))
    }
}
