//! Cluster-level descriptors read from the installation manifests.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Agent cluster install descriptor (`agent-cluster-install.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgentClusterInstall {
    #[serde(default)]
    pub spec: AgentClusterInstallSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentClusterInstallSpec {
    #[serde(rename = "apiVIP", default)]
    pub api_vip: String,
    #[serde(default)]
    pub provision_requirements: ProvisionRequirements,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequirements {
    #[serde(default)]
    pub control_plane_agents: u32,
    #[serde(default)]
    pub worker_agents: u32,
}

/// Infrastructure environment descriptor (`infraenv.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InfraEnv {
    #[serde(default)]
    pub spec: InfraEnvSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfraEnvSpec {
    #[serde(default)]
    pub nm_state_config_label_selector: LabelSelector,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(default)]
    pub match_labels: BTreeMap<String, String>,
}

impl LabelSelector {
    /// Every selector label must be present with the same value.
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.match_labels.iter().all(|(key, value)| labels.get(key) == Some(value))
    }
}
