//! Guild configuration domain: merging user overrides over defaults,
//! resolving the served logo, writing the artifact, and runtime access.

pub mod context;
pub mod layout;
pub mod logo;
pub mod merge;
pub mod model;
pub mod resolver;

pub use context::{ContextSource, GuildContext};
pub use layout::{ProjectLayout, DEFAULT_LOGO, USER_CONFIG_FILE};
pub use logo::LogoOutcome;
pub use merge::{merge_user_config, read_user_config};
pub use model::{GuildConfig, ResolvedConfig, Theme, UserConfig, UserTheme};
pub use resolver::{ConfigResolver, ConfigSource, Resolution};
