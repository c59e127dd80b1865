use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use nodegen_schema::NodeConfig;

use crate::error::NodegenError;
use crate::typegen;

/// Output directory for the serialized configuration artifact.
pub const CONFIG_OUT_DIR: &str = "dist";
pub const CONFIG_OUT_FILE: &str = "node.config.json";

/// Output directory for generated type declarations. Regeneration discards
/// the whole directory, so nothing else may live in it.
pub const TYPES_OUT_DIR: &str = "src/generated";
pub const TYPES_OUT_FILE: &str = "inputTypes.ts";

/// Serialize the raw configuration value as pretty-printed JSON under
/// `dist/`, creating the directory as needed and overwriting any existing
/// file. Takes the raw value rather than the typed model so every key the
/// config module exported reaches the artifact, including per-input
/// attributes the projector does not consume.
pub fn write_config(config: &serde_json::Value, dir: &Path) -> Result<PathBuf, NodegenError> {
    let out_dir = dir.join(CONFIG_OUT_DIR);
    fs::create_dir_all(&out_dir).map_err(|e| NodegenError::Write {
        path: out_dir.clone(),
        source: e,
    })?;

    let path = out_dir.join(CONFIG_OUT_FILE);
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).map_err(|e| NodegenError::Write {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

/// Regenerate the type declaration file from a clean slate: any existing
/// generated directory is removed wholesale before writing, so stale
/// declarations never survive a schema change.
pub fn write_types(config: &NodeConfig, dir: &Path) -> Result<PathBuf, NodegenError> {
    let out_dir = dir.join(TYPES_OUT_DIR);
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir).map_err(|e| NodegenError::Write {
            path: out_dir.clone(),
            source: e,
        })?;
    }
    fs::create_dir_all(&out_dir).map_err(|e| NodegenError::Write {
        path: out_dir.clone(),
        source: e,
    })?;

    // Same shape as JavaScript's Date.toISOString().
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let content = typegen::render_module(config, &generated_at);

    let path = out_dir.join(TYPES_OUT_FILE);
    fs::write(&path, content).map_err(|e| NodegenError::Write {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
