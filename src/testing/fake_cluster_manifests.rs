use std::io;
use std::path::PathBuf;

use crate::domain::cluster::{AgentClusterInstallSpec, ProvisionRequirements};
use crate::domain::{
    AgentClusterInstall, AppError, HostStaticNetworkConfig, InfraEnv, MacInterfaceMapping,
    StaticNetworkFile,
};
use crate::ports::ClusterManifests;

pub const FAKE_PULL_SECRET: &str = r#"{"auths":{"quay.io":{"auth":"Zm9vOmJhcg=="}}}"#;
pub const FAKE_PRE_NETWORK_SCRIPT: &str = "#!/bin/bash\necho pre-network\n";

/// In-memory cluster manifests with a three-master, two-worker cluster.
pub struct FakeClusterManifests {
    pull_secret: String,
    node_zero_ip: String,
    agent_cluster_install: Option<AgentClusterInstall>,
    static_network_config: Vec<HostStaticNetworkConfig>,
    static_network_error: Option<String>,
    network_files_error: Option<String>,
}

impl Default for FakeClusterManifests {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeClusterManifests {
    pub fn new() -> Self {
        Self {
            pull_secret: FAKE_PULL_SECRET.to_string(),
            node_zero_ip: "192.168.111.80".to_string(),
            agent_cluster_install: Some(AgentClusterInstall {
                spec: AgentClusterInstallSpec {
                    api_vip: "192.168.111.5".to_string(),
                    provision_requirements: ProvisionRequirements {
                        control_plane_agents: 3,
                        worker_agents: 2,
                    },
                },
            }),
            static_network_config: Vec::new(),
            static_network_error: None,
            network_files_error: None,
        }
    }

    pub fn with_pull_secret(mut self, pull_secret: &str) -> Self {
        self.pull_secret = pull_secret.to_string();
        self
    }

    pub fn with_node_zero_ip(mut self, ip: &str) -> Self {
        self.node_zero_ip = ip.to_string();
        self
    }

    pub fn without_agent_cluster_install(mut self) -> Self {
        self.agent_cluster_install = None;
        self
    }

    /// Add `count` hosts, each with a single `eth0` interface.
    pub fn with_static_network_hosts(mut self, count: usize) -> Self {
        self.static_network_config = (0..count)
            .map(|index| HostStaticNetworkConfig {
                mac_interface_map: vec![MacInterfaceMapping {
                    logical_nic_name: "eth0".to_string(),
                    mac_address: format!("52:54:01:aa:aa:{:02x}", index),
                }],
                network_yaml: format!("interfaces:\n- name: eth0\n  description: host{}\n", index),
            })
            .collect();
        self
    }

    pub fn with_static_network_error(mut self, message: &str) -> Self {
        self.static_network_error = Some(message.to_string());
        self
    }

    pub fn with_network_files_error(mut self, message: &str) -> Self {
        self.network_files_error = Some(message.to_string());
        self
    }
}

impl ClusterManifests for FakeClusterManifests {
    fn pull_secret(&self) -> Result<String, AppError> {
        Ok(self.pull_secret.clone())
    }

    fn node_zero_ip(&self) -> Result<String, AppError> {
        Ok(self.node_zero_ip.clone())
    }

    fn infra_env(&self) -> Result<InfraEnv, AppError> {
        Ok(InfraEnv::default())
    }

    fn agent_cluster_install(&self) -> Result<AgentClusterInstall, AppError> {
        self.agent_cluster_install.clone().ok_or_else(|| AppError::ManifestRead {
            path: PathBuf::from("agent-cluster-install.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        })
    }

    fn static_network_config(
        &self,
        _infra_env: &InfraEnv,
    ) -> Result<Vec<HostStaticNetworkConfig>, AppError> {
        match &self.static_network_error {
            Some(message) => Err(AppError::manifest_parse("nmstateconfig.yaml", message)),
            None => Ok(self.static_network_config.clone()),
        }
    }

    fn network_manager_files(
        &self,
        configs: &[HostStaticNetworkConfig],
    ) -> Result<Vec<StaticNetworkFile>, AppError> {
        if let Some(message) = &self.network_files_error {
            return Err(AppError::Nmstate {
                command: "nmstatectl gc".to_string(),
                details: message.clone(),
            });
        }

        let mut files = Vec::new();
        for (index, host) in configs.iter().enumerate() {
            files.push(StaticNetworkFile {
                file_path: format!("host{}/eth0.nmconnection", index),
                file_contents: "[connection]\nid=eth0\ntype=ethernet\n".to_string(),
            });
            files.push(StaticNetworkFile {
                file_path: format!("host{}/mac_interface.ini", index),
                file_contents: host.mac_interface_ini(),
            });
        }
        Ok(files)
    }

    fn pre_network_config_script(&self) -> &str {
        FAKE_PRE_NETWORK_SCRIPT
    }
}
