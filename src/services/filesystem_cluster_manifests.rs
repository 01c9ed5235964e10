use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    AgentClusterInstall, AppError, HostStaticNetworkConfig, InfraEnv, MacInterfaceMapping,
    NmStateConfig, StaticNetworkFile,
};
use crate::ports::ClusterManifests;

use super::NmstateCommand;

pub const PULL_SECRET_FILE: &str = "pull-secret.yaml";
pub const AGENT_CLUSTER_INSTALL_FILE: &str = "agent-cluster-install.yaml";
pub const INFRA_ENV_FILE: &str = "infraenv.yaml";
pub const NMSTATE_CONFIG_FILE: &str = "nmstateconfig.yaml";

const DOCKER_CONFIG_JSON_KEY: &str = ".dockerconfigjson";

static PRE_NETWORK_CONFIG_SCRIPT: &str = include_str!("../assets/scripts/pre-network-manager-config.sh");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Secret {
    #[serde(default)]
    string_data: BTreeMap<String, String>,
}

/// Cluster manifests read from YAML files in a local directory.
#[derive(Debug, Clone)]
pub struct FilesystemClusterManifests {
    dir: PathBuf,
    nmstate: NmstateCommand,
}

impl FilesystemClusterManifests {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), nmstate: NmstateCommand::default() }
    }

    pub fn with_nmstate(mut self, nmstate: NmstateCommand) -> Self {
        self.nmstate = nmstate;
        self
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_optional(&self, file: &str) -> Result<Option<String>, AppError> {
        let path = self.path(file);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::ManifestRead { path, source }),
        }
    }

    fn read_required(&self, file: &str) -> Result<String, AppError> {
        let path = self.path(file);
        fs::read_to_string(&path).map_err(|source| AppError::ManifestRead { path, source })
    }

    fn parse<T: DeserializeOwned>(&self, file: &str) -> Result<T, AppError> {
        let content = self.read_required(file)?;
        serde_yaml::from_str(&content).map_err(|err| AppError::manifest_parse(file, err))
    }

    fn nmstate_configs(&self) -> Result<Vec<NmStateConfig>, AppError> {
        let Some(content) = self.read_optional(NMSTATE_CONFIG_FILE)? else {
            return Ok(Vec::new());
        };
        parse_documents(&content, NMSTATE_CONFIG_FILE)
    }
}

fn parse_documents(content: &str, what: &str) -> Result<Vec<NmStateConfig>, AppError> {
    let mut configs = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = serde_yaml::Value::deserialize(document)
            .map_err(|err| AppError::manifest_parse(what, err))?;
        if value.is_null() {
            continue;
        }
        let config: NmStateConfig =
            serde_yaml::from_value(value).map_err(|err| AppError::manifest_parse(what, err))?;
        configs.push(config);
    }
    Ok(configs)
}

fn static_network_error(err: AppError) -> AppError {
    AppError::StaticNetwork(err.to_string())
}

fn to_host_config(
    config: &NmStateConfig,
    infra_env: &InfraEnv,
) -> Result<HostStaticNetworkConfig, AppError> {
    let selector = &infra_env.spec.nm_state_config_label_selector;
    if !selector.matches(&config.metadata.labels) {
        return Err(AppError::StaticNetwork(format!(
            "NMStateConfig '{}' labels do not match the InfraEnv nmStateConfigLabelSelector",
            config.metadata.name
        )));
    }
    if config.spec.config.is_null() {
        return Err(AppError::StaticNetwork(format!(
            "NMStateConfig '{}' has an empty spec.config",
            config.metadata.name
        )));
    }
    if config.spec.interfaces.is_empty() {
        return Err(AppError::StaticNetwork(format!(
            "NMStateConfig '{}' does not map any interface to a MAC address",
            config.metadata.name
        )));
    }

    let network_yaml = serde_yaml::to_string(&config.spec.config)
        .map_err(|err| AppError::StaticNetwork(err.to_string()))?;
    let mac_interface_map = config
        .spec
        .interfaces
        .iter()
        .map(|iface| MacInterfaceMapping {
            logical_nic_name: iface.name.clone(),
            mac_address: iface.mac_address.clone(),
        })
        .collect();

    Ok(HostStaticNetworkConfig { mac_interface_map, network_yaml })
}

impl ClusterManifests for FilesystemClusterManifests {
    fn pull_secret(&self) -> Result<String, AppError> {
        let Some(content) = self.read_optional(PULL_SECRET_FILE)? else {
            debug!("No {} found, continuing without pull secret", PULL_SECRET_FILE);
            return Ok(String::new());
        };
        let secret: Secret = serde_yaml::from_str(&content)
            .map_err(|err| AppError::manifest_parse(PULL_SECRET_FILE, err))?;
        Ok(secret.string_data.get(DOCKER_CONFIG_JSON_KEY).cloned().unwrap_or_default())
    }

    fn node_zero_ip(&self) -> Result<String, AppError> {
        let configs = self.nmstate_configs().map_err(static_network_error)?;
        configs
            .first()
            .and_then(NmStateConfig::first_ipv4_address)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::manifest_parse(
                    NMSTATE_CONFIG_FILE,
                    "no IPv4 address found for node zero in spec.config.interfaces[0]",
                )
            })
    }

    fn infra_env(&self) -> Result<InfraEnv, AppError> {
        self.parse(INFRA_ENV_FILE)
    }

    fn agent_cluster_install(&self) -> Result<AgentClusterInstall, AppError> {
        self.parse(AGENT_CLUSTER_INSTALL_FILE)
    }

    fn static_network_config(
        &self,
        infra_env: &InfraEnv,
    ) -> Result<Vec<HostStaticNetworkConfig>, AppError> {
        let configs = self.nmstate_configs().map_err(static_network_error)?;
        configs.iter().map(|config| to_host_config(config, infra_env)).collect()
    }

    fn network_manager_files(
        &self,
        configs: &[HostStaticNetworkConfig],
    ) -> Result<Vec<StaticNetworkFile>, AppError> {
        let mut files = Vec::new();
        for (index, host) in configs.iter().enumerate() {
            let host_dir = format!("host{}", index);
            for (name, contents) in self.nmstate.generate(&host.network_yaml)? {
                files.push(StaticNetworkFile {
                    file_path: format!("{}/{}", host_dir, name),
                    file_contents: contents,
                });
            }
            files.push(StaticNetworkFile {
                file_path: format!("{}/mac_interface.ini", host_dir),
                file_contents: host.mac_interface_ini(),
            });
        }
        Ok(files)
    }

    fn pre_network_config_script(&self) -> &str {
        PRE_NETWORK_CONFIG_SCRIPT
    }
}
