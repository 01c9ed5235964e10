use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::{AssetEntry, AssetSource};

/// Asset tree held in memory, keyed by `/`-separated path.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.trim_matches('/').to_string(), content.into());
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn read_dir(&self, path: &str) -> Result<Vec<AssetEntry>, AppError> {
        let dir = path.trim_matches('/');
        let prefix = if dir.is_empty() { String::new() } else { format!("{}/", dir) };

        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        for key in self.files.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((name, _)) => children.insert(name.to_string(), true),
                None => children.insert(rest.to_string(), false),
            };
        }

        if children.is_empty() {
            return Err(AppError::AssetNotFound(path.to_string()));
        }
        Ok(children.into_iter().map(|(name, is_dir)| AssetEntry { name, is_dir }).collect())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.files
            .get(path.trim_matches('/'))
            .cloned()
            .ok_or_else(|| AppError::AssetNotFound(path.to_string()))
    }
}
