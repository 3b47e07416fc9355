//! Classify file events in the data directory into watch categories.

use crate::guild::ProjectLayout;
use std::path::{Path, PathBuf};

/// Image extensions that may carry a guild logo.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "webp"];

/// Logo file names that always count as logo changes.
pub const RESERVED_LOGO_NAMES: [&str; 2] = ["guild-logo.png", "logo.png"];

/// Independent kinds of change, each with its own debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchCategory {
    /// CSV source data changed.
    Data,
    /// Guild configuration or a logo image changed.
    Config,
}

impl WatchCategory {
    pub const ALL: [WatchCategory; 2] = [WatchCategory::Data, WatchCategory::Config];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchCategory::Data => "csv",
            WatchCategory::Config => "config/logo",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            WatchCategory::Data => 0,
            WatchCategory::Config => 1,
        }
    }
}

/// Decides which category, if any, a changed path belongs to.
#[derive(Debug, Clone)]
pub struct EventClassifier {
    /// The user config path relative to the data directory.
    config_name: Option<PathBuf>,
}

impl EventClassifier {
    pub fn new(config_name: Option<PathBuf>) -> Self {
        Self { config_name }
    }

    pub fn for_layout(layout: &ProjectLayout) -> Self {
        Self::new(layout.user_config_in_data_dir())
    }

    /// Classify a path given relative to the watched data directory.
    pub fn classify(&self, relative: &Path) -> Option<WatchCategory> {
        let extension = lowercase_extension(relative);

        if extension.as_deref() == Some("csv") {
            return Some(WatchCategory::Data);
        }
        if self.config_name.as_deref() == Some(relative) || is_logo_file(relative) {
            return Some(WatchCategory::Config);
        }
        None
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Image file whose stem mentions "logo" or "guild", or a reserved logo name.
pub fn is_logo_file(path: &Path) -> bool {
    let is_image = lowercase_extension(path)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
    if !is_image {
        return false;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    stem.contains("logo")
        || stem.contains("guild")
        || RESERVED_LOGO_NAMES.contains(&file_name.as_ref())
}
