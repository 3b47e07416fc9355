//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("paths.data_dir", "data")?
        .set_default("paths.public_dir", "public")?
        .set_default("paths.user_config", "data/guild-config.json")?
        .set_default("paths.artifact", "src/config/guild.json")?
        .set_default("watch.debounce_ms", 300_i64)
}
