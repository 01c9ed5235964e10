use crate::domain::{
    AgentClusterInstall, AppError, HostStaticNetworkConfig, InfraEnv, StaticNetworkFile,
};

/// Port for reading cluster-level facts from the installation manifests.
///
/// Values returned here are trusted as already validated; the builder does
/// not re-check them.
pub trait ClusterManifests {
    /// Registry pull secret, or an empty string when none is supplied.
    fn pull_secret(&self) -> Result<String, AppError>;

    /// IP address of the bootstrap node that hosts the assisted service.
    fn node_zero_ip(&self) -> Result<String, AppError>;

    fn infra_env(&self) -> Result<InfraEnv, AppError>;

    fn agent_cluster_install(&self) -> Result<AgentClusterInstall, AppError>;

    /// Normalize the raw network-state manifests selected by `infra_env`.
    fn static_network_config(
        &self,
        infra_env: &InfraEnv,
    ) -> Result<Vec<HostStaticNetworkConfig>, AppError>;

    /// Render NetworkManager files for `configs`, relative to the network config dir.
    fn network_manager_files(
        &self,
        configs: &[HostStaticNetworkConfig],
    ) -> Result<Vec<StaticNetworkFile>, AppError>;

    /// Body of the script that installs the network files before NetworkManager starts.
    fn pre_network_config_script(&self) -> &str;
}
