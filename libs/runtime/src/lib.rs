pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    default_logging_config, AppConfig, DatabaseConfig, LoggingConfig, Section, ServerConfig,
};
pub use logging::init_logging_from_config;
pub use paths::resolve_home_dir;
