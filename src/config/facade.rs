//! Config loading entry point: defaults, then the project file or an explicit file.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::project_file;
use super::ToolConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

/// Loads [`ToolConfig`] for a project.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for the project at `root`.
    /// Precedence: `guildcfg.toml` at the root, then built-in defaults.
    pub fn load(root: &Path) -> Result<ToolConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = project_file::add_to_builder(builder, root)?;
        builder.build()?.try_deserialize()
    }

    /// Load settings from an explicit file, layered over the defaults.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the project config file for `root`.
    pub fn project_config_path(root: &Path) -> PathBuf {
        project_file::project_config_path(root)
    }
}
