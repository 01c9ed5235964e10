use crate::domain::AppError;

/// Directory entry of a bundled asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Port for reading the bundled template trees.
///
/// Paths are `/`-separated and relative to the asset root.
pub trait AssetSource {
    /// List a directory, sorted by entry name.
    fn read_dir(&self, path: &str) -> Result<Vec<AssetEntry>, AppError>;

    fn read_file(&self, path: &str) -> Result<Vec<u8>, AppError>;
}
