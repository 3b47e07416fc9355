//! Project config file source: `guildcfg.toml` at the project root.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the per-project tool settings.
pub const PROJECT_CONFIG_FILE: &str = "guildcfg.toml";

/// Path to the project config file under `root`.
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_FILE)
}

/// Add the project config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_config_path(root);
    if path.exists() {
        Ok(builder.add_source(File::from(path.as_path()).required(false)))
    } else {
        debug!(config_path = %path.display(), "No project config file, using built-in settings");
        Ok(builder)
    }
}
