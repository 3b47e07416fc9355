//! Logo resolution: decide which logo file the site serves and copy a custom
//! logo into the public directory under a normalized name.

use super::layout::{ProjectLayout, CUSTOM_LOGO_STEM, DEFAULT_LOGO};
use crate::error::GuildError;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// What happened while resolving the logo.
#[derive(Debug)]
pub enum LogoOutcome {
    /// No custom logo configured.
    Default,
    /// Custom logo copied into the public directory.
    Custom {
        source: PathBuf,
        target: PathBuf,
        file_name: String,
    },
    /// A custom logo was configured but could not be used.
    Fallback { logo: String, error: GuildError },
}

impl LogoOutcome {
    /// File name the site should serve from its public root.
    pub fn logo_file(&self) -> &str {
        match self {
            LogoOutcome::Custom { file_name, .. } => file_name,
            LogoOutcome::Default | LogoOutcome::Fallback { .. } => DEFAULT_LOGO,
        }
    }
}

/// Normalized name for a custom logo: `custom-logo` plus the original extension.
pub fn custom_logo_name(logo: &str) -> String {
    format!("{}{}", CUSTOM_LOGO_STEM, extension_with_dot(Path::new(logo)))
}

fn extension_with_dot(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// A logo name must stay inside the data directory.
pub(crate) fn is_contained(logo: &str) -> bool {
    let path = Path::new(logo);
    path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Resolve the served logo, copying the user's logo when one was requested.
///
/// `requested` is the `logo` named in the user configuration, if any. Never
/// fails: any problem with the requested logo is logged and the default logo
/// is used instead.
pub fn resolve_logo(requested: Option<&str>, layout: &ProjectLayout) -> LogoOutcome {
    let logo = match requested.filter(|logo| !logo.is_empty()) {
        Some(logo) => logo,
        None => {
            info!("No custom logo specified, using default");
            return LogoOutcome::Default;
        }
    };

    match copy_custom_logo(logo, layout) {
        Ok((source, target)) => {
            let file_name = custom_logo_name(logo);
            info!(
                source = %source.display(),
                target = %target.display(),
                "Copied custom logo: {} -> {}",
                logo,
                file_name
            );
            LogoOutcome::Custom {
                source,
                target,
                file_name,
            }
        }
        Err(error) => {
            warn!(logo = %logo, error = %error, "Using default logo");
            LogoOutcome::Fallback {
                logo: logo.to_string(),
                error,
            }
        }
    }
}

fn copy_custom_logo(logo: &str, layout: &ProjectLayout) -> Result<(PathBuf, PathBuf), GuildError> {
    let unavailable = |reason: String| GuildError::AssetUnavailable {
        logo: logo.to_string(),
        reason,
    };

    if !is_contained(logo) {
        return Err(unavailable(
            "logo must be a relative path inside the data directory".to_string(),
        ));
    }

    let source = layout.data_dir.join(logo);
    if !source.is_file() {
        return Err(unavailable(format!(
            "not found in data directory {}",
            layout.data_dir.display()
        )));
    }

    let target = layout.custom_logo_target(&extension_with_dot(&source));
    std::fs::create_dir_all(&layout.public_dir).map_err(|e| {
        unavailable(format!(
            "cannot create {}: {}",
            layout.public_dir.display(),
            e
        ))
    })?;
    std::fs::copy(&source, &target)
        .map_err(|e| unavailable(format!("copy to {} failed: {}", target.display(), e)))?;

    Ok((source, target))
}
