//! Ignition v3.2 config types.
//!
//! Only the subset of the schema the builder emits is modelled. Optional
//! fields are omitted from the serialized document when unset.

use serde::{Deserialize, Serialize};

use super::data_url;

/// Schema version marker written into every generated document.
pub const IGNITION_VERSION: &str = "3.2.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub ignition: Ignition,
    #[serde(default)]
    pub passwd: Passwd,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub systemd: Systemd,
}

impl Config {
    /// Empty document carrying only the version marker.
    pub fn new() -> Self {
        Self {
            ignition: Ignition { version: IGNITION_VERSION.to_string() },
            passwd: Passwd::default(),
            storage: Storage::default(),
            systemd: Systemd::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ignition {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passwd {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<PasswdUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswdUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_authorized_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(default)]
    pub contents: Resource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

impl File {
    /// File whose contents are embedded inline as a data URL.
    pub fn embedded(path: impl Into<String>, mode: u32, overwrite: bool, data: &[u8]) -> Self {
        Self {
            path: path.into(),
            overwrite: Some(overwrite),
            contents: Resource { source: Some(data_url::encode(data)) },
            mode: Some(mode),
        }
    }

    /// Decode the inline contents, if this file carries a data URL.
    pub fn embedded_contents(&self) -> Option<Vec<u8>> {
        self.contents.source.as_deref().and_then(data_url::decode)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Systemd {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl Unit {
    pub fn enabled(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { name: name.into(), enabled: Some(true), contents: Some(contents.into()) }
    }
}
