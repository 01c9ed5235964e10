//! Rendering of the bundled file tree into Ignition file records.

use tracing::debug;

use crate::domain::{AppError, File, TemplateParams, render_template};
use crate::ports::AssetSource;

/// Asset directory whose layout mirrors the target root filesystem.
pub const FILES_ROOT: &str = "files";

/// Files directly inside these directories are installed executable.
const EXECUTABLE_DIRS: [&str; 2] = ["bin", "dispatcher.d"];

const EXECUTABLE_MODE: u32 = 0o555;
const DEFAULT_MODE: u32 = 0o600;

/// Render every file of the bundled tree, depth-first in name order.
pub fn render_static_files(
    assets: &impl AssetSource,
    params: &TemplateParams,
) -> Result<Vec<File>, AppError> {
    let mut files = Vec::new();
    collect_files(assets, params, "/", &mut files)?;
    Ok(files)
}

/// Mode for a file whose parent directory is `dir_path`.
pub fn file_mode(dir_path: &str) -> u32 {
    let dir_name = dir_path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if EXECUTABLE_DIRS.contains(&dir_name) { EXECUTABLE_MODE } else { DEFAULT_MODE }
}

fn collect_files(
    assets: &impl AssetSource,
    params: &TemplateParams,
    dir_path: &str,
    files: &mut Vec<File>,
) -> Result<(), AppError> {
    let entries = assets.read_dir(&asset_path(dir_path)).map_err(|err| AppError::AssetRead {
        path: dir_path.to_string(),
        reason: format!("failed to open file dir: {}", err),
    })?;

    for entry in entries {
        let full_path = join(dir_path, &entry.name);
        if entry.is_dir {
            collect_files(assets, params, &full_path, files)?;
            continue;
        }

        let contents = assets.read_file(&asset_path(&full_path)).map_err(|err| {
            AppError::AssetRead { path: full_path.clone(), reason: err.to_string() }
        })?;
        let source = String::from_utf8(contents).map_err(|err| AppError::AssetRead {
            path: full_path.clone(),
            reason: format!("not valid UTF-8: {}", err),
        })?;
        let rendered = render_template(&full_path, &source, params)?;

        let mode = file_mode(dir_path);
        debug!("Embedding {} (mode {:o})", full_path, mode);
        files.push(File::embedded(full_path, mode, true, rendered.as_bytes()));
    }
    Ok(())
}

fn asset_path(path: &str) -> String {
    format!("{}{}", FILES_ROOT, path)
}

fn join(dir_path: &str, name: &str) -> String {
    if dir_path.ends_with('/') {
        format!("{}{}", dir_path, name)
    } else {
        format!("{}/{}", dir_path, name)
    }
}
