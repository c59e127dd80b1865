pub mod compiler;
pub mod error;
pub mod output;
pub mod resolver;
pub mod typegen;

pub use compiler::{ConfigCompiler, EsbuildCompiler};
pub use error::NodegenError;
pub use resolver::{find_config_file, resolve, ResolvedConfig, CONFIG_FILE_NAME};
