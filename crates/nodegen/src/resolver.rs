use std::fs;
use std::path::{Path, PathBuf};

use nodegen_schema::NodeConfig;

use crate::compiler::ConfigCompiler;
use crate::error::NodegenError;

/// Conventional config source filename, expected in the working directory.
pub const CONFIG_FILE_NAME: &str = "node.config.ts";

/// A materialized configuration: the raw module value plus its typed view.
///
/// Config emission serializes `raw` verbatim, so per-input attributes the
/// typed model does not track (select option lists, defaults, ...) still
/// reach the artifact. The type projector consumes `config`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub raw: serde_json::Value,
    pub config: NodeConfig,
}

/// Locate the configuration source in `dir`.
///
/// Absence is a hard failure; there is no implicit defaulting.
pub fn find_config_file(dir: &Path) -> Result<PathBuf, NodegenError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Ok(path)
    } else {
        Err(NodegenError::ConfigNotFound(path))
    }
}

/// Resolve the node configuration in `dir` into an in-memory value.
///
/// Locates `node.config.ts`, compiles it to a JSON value through the given
/// compiler inside a scoped temporary workspace, and parses the result into
/// a [`ResolvedConfig`].
/// The workspace never outlives this call: `TempDir` removes it on drop,
/// so cleanup happens on the failure paths as well; the success path closes
/// it explicitly so removal errors surface.
pub fn resolve(dir: &Path, compiler: &dyn ConfigCompiler) -> Result<ResolvedConfig, NodegenError> {
    let entry = find_config_file(dir)?;

    let workspace = tempfile::Builder::new().prefix(".tmp").tempdir_in(dir)?;
    let out = workspace.path().join("node.config.json");

    compiler.compile(&entry, &out)?;

    let contents = fs::read_to_string(&out)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| NodegenError::Load(format!("invalid config value: {}", e)))?;
    let config: NodeConfig = serde_json::from_value(raw.clone())
        .map_err(|e| NodegenError::Load(format!("invalid config value: {}", e)))?;

    workspace.close()?;
    Ok(ResolvedConfig { raw, config })
}
