use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use agent_ignition::{AppError, BuilderSettings};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "agent-ignition")]
#[command(version)]
#[command(
    about = "Generate the first-boot Ignition config for an agent-based installation",
    long_about = None
)]
struct Cli {
    /// Directory holding the cluster manifests to read and embed
    #[arg(long, env = "MANIFEST_PATH", default_value = "manifests/")]
    manifest_path: PathBuf,
    /// Token for the assisted service when authentication is enabled
    #[arg(long, env = "PULL_SECRET_TOKEN", default_value = "", hide_env_values = true)]
    pull_secret_token: String,
    /// Write the config to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<(), AppError> {
    match output {
        Some(path) => {
            fs::write(path, bytes)?;
            info!("Wrote Ignition config to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = agent_ignition::logging::init_logger(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let settings = BuilderSettings::new(cli.manifest_path)
        .with_pull_secret_token(cli.pull_secret_token)
        .with_home_dir(dirs::home_dir());

    let result = agent_ignition::generate_ignition(settings)
        .and_then(|bytes| write_output(cli.output.as_deref(), &bytes));

    if let Err(e) = result {
        if e.is_unrecoverable() {
            error!("Static network configuration is unusable, refusing to write a config");
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
