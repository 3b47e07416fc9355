//! Project layout: where the user config, logo assets, and artifacts live.

use std::path::{Path, PathBuf};

/// Logo bundled with the site, served from the public root.
pub const DEFAULT_LOGO: &str = "bataillon-logo.png";

/// File name of the user-supplied configuration inside the data directory.
pub const USER_CONFIG_FILE: &str = "guild-config.json";

/// Stem given to a custom logo once copied into the public directory.
pub const CUSTOM_LOGO_STEM: &str = "custom-logo";

/// Route prefix under which the site serves the data directory.
pub const DATA_ROUTE: &str = "/data";

/// Paths used by the resolver, the runtime accessor, and the watcher.
///
/// All paths are absolute once built through [`ProjectLayout::new`] or
/// [`ProjectLayout::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub user_config: PathBuf,
    pub artifact: PathBuf,
}

impl ProjectLayout {
    /// Conventional layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join("data"),
            public_dir: root.join("public"),
            user_config: root.join("data").join(USER_CONFIG_FILE),
            artifact: root.join("src").join("config").join("guild.json"),
            root,
        }
    }

    /// Layout rooted at `root` with paths taken from tool settings.
    /// Relative entries are resolved against `root`.
    pub fn from_config(root: impl Into<PathBuf>, paths: &crate::config::PathsConfig) -> Self {
        let root = root.into();
        let at = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };
        Self {
            data_dir: at(&paths.data_dir),
            public_dir: at(&paths.public_dir),
            user_config: at(&paths.user_config),
            artifact: at(&paths.artifact),
            root,
        }
    }

    /// Where a custom logo with the given extension (including the dot) is copied.
    pub fn custom_logo_target(&self, extension: &str) -> PathBuf {
        self.public_dir.join(format!("{}{}", CUSTOM_LOGO_STEM, extension))
    }

    /// Name of the user config relative to the data directory, if it lives there.
    pub fn user_config_in_data_dir(&self) -> Option<PathBuf> {
        self.user_config
            .strip_prefix(&self.data_dir)
            .ok()
            .map(Path::to_path_buf)
    }
}
