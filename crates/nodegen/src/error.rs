use std::fmt;
use std::path::PathBuf;

/// Error taxonomy for the generation pipeline.
///
/// Every variant is fatal: errors propagate to the CLI boundary, are
/// printed with context, and terminate the process with non-zero status.
#[derive(Debug)]
pub enum NodegenError {
    /// The configuration source does not exist at the conventional path.
    ConfigNotFound(PathBuf),
    /// The external transpilation service failed to produce a bundle.
    Transpile(String),
    /// The transpiled module could not be evaluated or its default export
    /// is not a valid configuration value.
    Load(String),
    /// An output directory or file could not be created or written.
    Write { path: PathBuf, source: std::io::Error },
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for NodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodegenError::ConfigNotFound(path) => {
                write!(f, "Config source not found: {}", path.display())
            }
            NodegenError::Transpile(msg) => write!(f, "Failed to transpile config: {}", msg),
            NodegenError::Load(msg) => write!(f, "Failed to load config module: {}", msg),
            NodegenError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            NodegenError::IoError(e) => write!(f, "I/O error: {}", e),
            NodegenError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for NodegenError {}

impl From<std::io::Error> for NodegenError {
    fn from(err: std::io::Error) -> Self {
        NodegenError::IoError(err)
    }
}

impl From<serde_json::Error> for NodegenError {
    fn from(err: serde_json::Error) -> Self {
        NodegenError::JsonError(err)
    }
}
