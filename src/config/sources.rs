//! Configuration sources layered over the merge policy defaults.

pub mod project_file;
