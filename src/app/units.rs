use tracing::debug;

use crate::domain::{AppError, TemplateParams, Unit, render_template};
use crate::ports::AssetSource;

pub const UNITS_ROOT: &str = "systemd/units";

/// Unit that installs static network files; only shipped with static networking.
pub const PRE_NETWORK_SERVICE: &str = "pre-network-manager-config.service";

/// Render every bundled systemd unit as an enabled unit.
pub fn render_units(
    assets: &impl AssetSource,
    params: &TemplateParams,
    static_network: bool,
) -> Result<Vec<Unit>, AppError> {
    let entries = assets.read_dir(UNITS_ROOT).map_err(|err| AppError::AssetRead {
        path: UNITS_ROOT.to_string(),
        reason: format!("failed to read systemd units: {}", err),
    })?;

    let mut units = Vec::with_capacity(entries.len());
    for entry in entries {
        if !static_network && entry.name == PRE_NETWORK_SERVICE {
            debug!("Skipping {} without static network config", entry.name);
            continue;
        }

        let path = format!("{}/{}", UNITS_ROOT, entry.name);
        let contents = assets.read_file(&path).map_err(|err| AppError::AssetRead {
            path: path.clone(),
            reason: format!("failed to read unit: {}", err),
        })?;
        let source = String::from_utf8(contents).map_err(|err| AppError::AssetRead {
            path: path.clone(),
            reason: format!("not valid UTF-8: {}", err),
        })?;
        let rendered = render_template(&entry.name, &source, params)?;

        units.push(Unit::enabled(entry.name, rendered));
    }
    Ok(units)
}
