mod config_builder;
pub mod manifests;
mod settings;
pub mod static_files;
pub mod units;

pub use config_builder::{
    CORE_USER, ConfigBuilder, NM_CONNECTIONS_DIR, PRE_NETWORK_SCRIPT_PATH, PULL_SECRET_PATH,
    SERVICE_PORT,
};
pub use settings::{BuilderSettings, DEFAULT_MANIFEST_PATH, MANIFEST_PATH_ENV, PULL_SECRET_TOKEN_ENV};
