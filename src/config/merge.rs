//! Merge rules for tool settings.

pub mod merge_policy;
