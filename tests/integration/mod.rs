//! Integration tests for the guild configuration resolver

mod logging_output;
mod resolve_artifact;
mod runtime_context;
mod test_utils;
