use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the assisted-service auth token.
pub const PULL_SECRET_TOKEN_ENV: &str = "PULL_SECRET_TOKEN";
/// Environment variable pointing at the manifest directory.
pub const MANIFEST_PATH_ENV: &str = "MANIFEST_PATH";
pub const DEFAULT_MANIFEST_PATH: &str = "manifests/";

/// Process-level inputs to the config builder.
#[derive(Clone, PartialEq, Eq)]
pub struct BuilderSettings {
    pub pull_secret_token: String,
    pub manifest_path: PathBuf,
    /// Home directory searched for `.ssh/id_rsa.pub`; `None` disables key discovery.
    pub home_dir: Option<PathBuf>,
}

impl fmt::Debug for BuilderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderSettings")
            .field("pull_secret_token", &"[REDACTED]")
            .field("manifest_path", &self.manifest_path)
            .field("home_dir", &self.home_dir)
            .finish()
    }
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_PATH)
    }
}

impl BuilderSettings {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self { pull_secret_token: String::new(), manifest_path: manifest_path.into(), home_dir: None }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            pull_secret_token: env_or(PULL_SECRET_TOKEN_ENV, ""),
            manifest_path: PathBuf::from(env_or(MANIFEST_PATH_ENV, DEFAULT_MANIFEST_PATH)),
            home_dir: dirs::home_dir(),
        }
    }

    pub fn with_pull_secret_token(mut self, token: impl Into<String>) -> Self {
        self.pull_secret_token = token.into();
        self
    }

    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn ssh_public_key_path(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(".ssh").join("id_rsa.pub"))
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}
