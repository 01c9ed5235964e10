use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::ignition::PasswdUser;
use crate::domain::{AppError, Config, File, HostStaticNetworkConfig, TemplateParams};
use crate::ports::{AssetSource, ClusterManifests};

use super::BuilderSettings;
use super::manifests::ingest_manifests;
use super::static_files::render_static_files;
use super::units::render_units;

/// Port the assisted service listens on at node zero.
pub const SERVICE_PORT: u16 = 8090;
pub const CORE_USER: &str = "core";
pub const PULL_SECRET_PATH: &str = "/root/.docker/config.json";
pub const NM_CONNECTIONS_DIR: &str = "/etc/assisted/network";
pub const PRE_NETWORK_SCRIPT_PATH: &str = "/usr/local/bin/pre-network-manager-config.sh";

const PULL_SECRET_MODE: u32 = 0o420;
const NM_CONNECTION_MODE: u32 = 0o600;
const PRE_NETWORK_SCRIPT_MODE: u32 = 0o755;

/// Builds the Ignition config for a node joining the installation.
///
/// All cluster parameters are resolved once in [`ConfigBuilder::new`] and never
/// change afterwards.
pub struct ConfigBuilder<M: ClusterManifests, A: AssetSource> {
    manifests: M,
    assets: A,
    pull_secret: String,
    service_base_url: Url,
    pull_secret_token: String,
    api_vip: String,
    control_plane_agents: u32,
    worker_agents: u32,
    static_network_config: Vec<HostStaticNetworkConfig>,
    manifest_path: PathBuf,
    ssh_public_key_path: Option<PathBuf>,
}

impl<M: ClusterManifests, A: AssetSource> ConfigBuilder<M, A> {
    /// Resolve cluster parameters from `manifests`.
    ///
    /// A static network config that cannot be normalized is returned as
    /// [`AppError::StaticNetwork`].
    pub fn new(settings: BuilderSettings, manifests: M, assets: A) -> Result<Self, AppError> {
        let pull_secret = manifests.pull_secret()?;
        let node_zero_ip = manifests.node_zero_ip()?;
        let service_base_url = service_base_url(&node_zero_ip)?;
        let cluster_install = manifests.agent_cluster_install()?;
        let infra_env = manifests.infra_env()?;
        let static_network_config =
            manifests.static_network_config(&infra_env).map_err(into_static_network)?;

        info!(
            "Node zero at {}, {} static network config(s)",
            service_base_url,
            static_network_config.len()
        );

        let ssh_public_key_path = settings.ssh_public_key_path();
        let spec = cluster_install.spec;
        Ok(Self {
            manifests,
            assets,
            pull_secret,
            service_base_url,
            pull_secret_token: settings.pull_secret_token,
            api_vip: spec.api_vip,
            control_plane_agents: spec.provision_requirements.control_plane_agents,
            worker_agents: spec.provision_requirements.worker_agents,
            static_network_config,
            manifest_path: settings.manifest_path,
            ssh_public_key_path,
        })
    }

    pub fn service_base_url(&self) -> &Url {
        &self.service_base_url
    }

    pub fn static_network_config(&self) -> &[HostStaticNetworkConfig] {
        &self.static_network_config
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams::new(
            &self.service_base_url,
            &self.pull_secret_token,
            &self.api_vip,
            self.control_plane_agents,
            self.worker_agents,
        )
    }

    /// Build and serialize the Ignition config.
    pub fn ignition(&self) -> Result<Vec<u8>, AppError> {
        let config = self.build_config()?;
        Ok(serde_json::to_vec(&config)?)
    }

    /// Assemble the Ignition config without serializing it.
    pub fn build_config(&self) -> Result<Config, AppError> {
        let params = self.template_params();
        let mut config = Config::new();
        config.passwd.users.push(PasswdUser {
            name: CORE_USER.to_string(),
            ssh_authorized_keys: self.ssh_authorized_keys(),
        });

        let mut files = render_static_files(&self.assets, &params)?;
        info!("Rendered {} bundled file(s)", files.len());

        if !self.pull_secret.is_empty() {
            files.push(File::embedded(
                PULL_SECRET_PATH,
                PULL_SECRET_MODE,
                true,
                self.pull_secret.as_bytes(),
            ));
        }

        if !self.static_network_config.is_empty() {
            files.extend(self.static_network_files()?);
        }

        let manifests = ingest_manifests(&self.manifest_path)?;
        info!("Embedded {} manifest(s) from {}", manifests.len(), self.manifest_path.display());
        files.extend(manifests);

        config.storage.files = files;
        config.systemd.units =
            render_units(&self.assets, &params, !self.static_network_config.is_empty())?;

        Ok(config)
    }

    fn ssh_authorized_keys(&self) -> Vec<String> {
        let Some(path) = &self.ssh_public_key_path else {
            return Vec::new();
        };
        match fs::read_to_string(path) {
            Ok(key) => vec![key],
            Err(err) => {
                warn!("No SSH key added for {}: {}: {}", CORE_USER, path.display(), err);
                Vec::new()
            }
        }
    }

    fn static_network_files(&self) -> Result<Vec<File>, AppError> {
        let generated = self
            .manifests
            .network_manager_files(&self.static_network_config)
            .map_err(into_static_network)?;

        let mut files: Vec<File> = generated
            .iter()
            .map(|file| {
                let path =
                    format!("{}/{}", NM_CONNECTIONS_DIR, file.file_path.trim_start_matches('/'));
                debug!("Embedding network file {}", path);
                File::embedded(path, NM_CONNECTION_MODE, true, file.file_contents.as_bytes())
            })
            .collect();

        files.push(File::embedded(
            PRE_NETWORK_SCRIPT_PATH,
            PRE_NETWORK_SCRIPT_MODE,
            true,
            self.manifests.pre_network_config_script().as_bytes(),
        ));
        Ok(files)
    }
}

/// `http://<ip>:8090/`, bracketing IPv6 addresses.
fn service_base_url(node_zero_ip: &str) -> Result<Url, AppError> {
    let host =
        if node_zero_ip.contains(':') { format!("[{}]", node_zero_ip) } else { node_zero_ip.to_string() };
    Url::parse(&format!("http://{}:{}/", host, SERVICE_PORT)).map_err(|err| {
        AppError::config_error(format!("Invalid node zero IP '{}': {}", node_zero_ip, err))
    })
}

fn into_static_network(err: AppError) -> AppError {
    match err {
        AppError::StaticNetwork(_) => err,
        other => AppError::StaticNetwork(other.to_string()),
    }
}
