//! agent-ignition: build the first-boot Ignition config for an agent-based installation node.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::ConfigBuilder;
use services::{EmbeddedAssetSource, FilesystemClusterManifests};

pub use app::BuilderSettings;
pub use domain::{AppError, Config};

/// Build the Ignition config from the manifests under `settings.manifest_path`.
///
/// The same directory supplies the cluster descriptors and the manifests
/// embedded into the config. Returns the serialized JSON document.
pub fn generate_ignition(settings: BuilderSettings) -> Result<Vec<u8>, AppError> {
    let manifests = FilesystemClusterManifests::new(settings.manifest_path.clone());
    let builder = ConfigBuilder::new(settings, manifests, EmbeddedAssetSource::new())?;
    builder.ignition()
}

/// Same as [`generate_ignition`], reading settings from the environment.
pub fn generate_ignition_from_env() -> Result<Vec<u8>, AppError> {
    generate_ignition(BuilderSettings::from_env())
}
