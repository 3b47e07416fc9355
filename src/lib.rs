//! guildcfg: Guild Configuration Resolver
//!
//! Merges an optional user-supplied guild configuration over built-in
//! defaults, resolves the logo to serve, writes the resolved artifact the
//! site runtime reads, and watches the data directory during development.

pub mod cli;
pub mod config;
pub mod error;
pub mod guild;
pub mod logging;
pub mod watch;
