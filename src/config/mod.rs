mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, DEFAULT_LOG_LEVEL, LoggingConfig, OutputConfig};
pub use validation::validate_config_semantics;
