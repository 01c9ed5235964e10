mod embedded_asset_source;
mod filesystem_cluster_manifests;
mod nmstate_command;

pub use embedded_asset_source::EmbeddedAssetSource;
pub use filesystem_cluster_manifests::{
    AGENT_CLUSTER_INSTALL_FILE, FilesystemClusterManifests, INFRA_ENV_FILE, NMSTATE_CONFIG_FILE,
    PULL_SECRET_FILE,
};
pub use nmstate_command::NmstateCommand;
