use std::io::Write;
use std::process::Command;

use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::AppError;

const NMSTATECTL: &str = "nmstatectl";

/// Output of `nmstatectl gc`: `[file name, file contents]` pairs.
#[derive(Debug, Default, Deserialize)]
struct GeneratedConfig {
    #[serde(rename = "NetworkManager", default)]
    network_manager: Vec<(String, String)>,
}

/// Runs `nmstatectl gc` to turn nmstate YAML into NetworkManager keyfiles.
#[derive(Debug, Clone)]
pub struct NmstateCommand {
    program: String,
}

impl Default for NmstateCommand {
    fn default() -> Self {
        Self::new(NMSTATECTL)
    }
}

impl NmstateCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Generate keyfiles for one host's nmstate YAML.
    pub fn generate(&self, network_yaml: &str) -> Result<Vec<(String, String)>, AppError> {
        let command = format!("{} gc", self.program);

        let mut input = NamedTempFile::new()?;
        input.write_all(network_yaml.as_bytes())?;
        input.flush()?;

        debug!("Running {} on {}", command, input.path().display());
        let output = Command::new(&self.program)
            .arg("gc")
            .arg(input.path())
            .output()
            .map_err(|e| AppError::Nmstate { command: command.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Nmstate {
                command,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        let generated: GeneratedConfig = serde_yaml::from_slice(&output.stdout)
            .map_err(|e| AppError::Nmstate { command, details: e.to_string() })?;
        Ok(generated.network_manager)
    }
}
