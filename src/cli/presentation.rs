//! CLI presentation: text and json formatters per command family.

mod resolve;
mod show;

pub use resolve::{format_resolution_json, format_resolution_text};
pub use show::{format_context_json, format_context_text};
