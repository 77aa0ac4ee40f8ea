//! Configuration module for circle-lab
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CIRCLE_LAB_*)
//! 3. Project config (./circle-lab.toml)
//! 4. User config (~/.config/circle-lab/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The hidden value's minimum and default are not configurable.

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, user_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, SkippedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ContainerConfig, OutputConfig, OutputFormat, Verbosity};
