mod asset_source;
mod cluster_manifests;

pub use asset_source::{AssetEntry, AssetSource};
pub use cluster_manifests::ClusterManifests;
