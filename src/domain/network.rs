//! Static network configuration records.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Logical NIC name bound to a hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacInterfaceMapping {
    pub logical_nic_name: String,
    pub mac_address: String,
}

/// Per-host static network settings in nmstate form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStaticNetworkConfig {
    pub mac_interface_map: Vec<MacInterfaceMapping>,
    /// nmstate YAML describing the host's interfaces.
    pub network_yaml: String,
}

impl HostStaticNetworkConfig {
    /// `mac_interface.ini` body consumed by the pre-network script.
    pub fn mac_interface_ini(&self) -> String {
        let mut ini = String::from("[mac-address]\n");
        for mapping in &self.mac_interface_map {
            ini.push_str(&format!("{}={}\n", mapping.mac_address, mapping.logical_nic_name));
        }
        ini
    }
}

/// A rendered network file, relative to the network config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticNetworkFile {
    pub file_path: String,
    pub file_contents: String,
}

/// One document of `nmstateconfig.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NmStateConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: NmStateConfigSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NmStateConfigSpec {
    #[serde(default)]
    pub config: serde_yaml::Value,
    #[serde(default)]
    pub interfaces: Vec<NmStateInterface>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NmStateInterface {
    pub name: String,
    pub mac_address: String,
}

impl NmStateConfig {
    /// First IPv4 address of the first interface in the nmstate config.
    pub fn first_ipv4_address(&self) -> Option<&str> {
        self.spec
            .config
            .get("interfaces")?
            .get(0)?
            .get("ipv4")?
            .get("address")?
            .get(0)?
            .get("ip")?
            .as_str()
    }
}
