mod fake_cluster_manifests;
mod memory_asset_source;

pub use fake_cluster_manifests::{FAKE_PRE_NETWORK_SCRIPT, FAKE_PULL_SECRET, FakeClusterManifests};
pub use memory_asset_source::MemoryAssetSource;
