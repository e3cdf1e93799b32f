//! Configuration module for kafka-compose
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the caller)
//! 2. Environment variables (KAFKA_COMPOSE_*)
//! 3. `--config <file>`, else `<config dir>/kafka-compose/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, user_config_path, with_env_overrides, with_env_overrides_from,
    ConfigWarning,
};
pub use types::{Config, DeployConfig, ImagesConfig, ManagerConfig};
