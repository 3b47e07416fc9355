//! Development watcher: re-runs data conversion and configuration
//! resolution when files in the data directory change.

pub mod classify;
pub mod daemon;
pub mod debounce;
pub mod runner;

pub use classify::{EventClassifier, WatchCategory};
pub use daemon::{WatchConfig, WatchDaemon};
pub use debounce::{DebounceState, Debouncer};
pub use runner::{run_command, CommandLauncher, Step, StepLauncher};
