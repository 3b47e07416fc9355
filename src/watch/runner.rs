//! Launching the external steps the watcher drives.

use super::classify::WatchCategory;
use crate::error::GuildError;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{error, info, warn};

/// An external step triggered by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// CSV-to-JSON data conversion.
    Convert,
    /// Guild configuration resolution.
    Resolve,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Convert => "convert",
            Step::Resolve => "resolve",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Step::Convert => "CSV conversion",
            Step::Resolve => "config processing",
        }
    }
}

impl WatchCategory {
    /// Step run when this category's debounce window expires.
    pub fn step(&self) -> Step {
        match self {
            WatchCategory::Data => Step::Convert,
            WatchCategory::Config => Step::Resolve,
        }
    }
}

/// Starts steps without waiting for them to finish.
pub trait StepLauncher {
    fn launch(&self, step: Step, reason: &str);
}

/// Launches steps as subprocesses on the current tokio runtime.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    convert: Vec<String>,
    resolve: Vec<String>,
    working_dir: PathBuf,
}

impl CommandLauncher {
    pub fn new(convert: Vec<String>, resolve: Vec<String>, working_dir: PathBuf) -> Self {
        Self {
            convert,
            resolve,
            working_dir,
        }
    }

    /// Program and arguments for `step`.
    pub fn command_for(&self, step: Step) -> &[String] {
        match step {
            Step::Convert => &self.convert,
            Step::Resolve => &self.resolve,
        }
    }
}

impl StepLauncher for CommandLauncher {
    /// Must be called from within a tokio runtime.
    fn launch(&self, step: Step, reason: &str) {
        info!(step = step.as_str(), reason, "Triggering {}", step.label());

        let argv = self.command_for(step).to_vec();
        let working_dir = self.working_dir.clone();
        tokio::spawn(async move {
            match run_command(&argv, &working_dir).await {
                Ok(output) => {
                    info!(step = step.as_str(), "{} complete", step.label());
                    log_captured(step, &output);
                }
                Err(e) => error!(step = step.as_str(), error = %e, "Error running {}", step.label()),
            }
        });
    }
}

fn log_captured(step: Step, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        info!(step = step.as_str(), "{}", stdout.trim_end());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!(step = step.as_str(), "{}", stderr.trim_end());
    }
}

/// Run `argv` in `working_dir`, capturing stdout and stderr.
///
/// Spawn failures and non-zero exits are [`GuildError::SubprocessFailure`].
pub async fn run_command(argv: &[String], working_dir: &Path) -> Result<Output, GuildError> {
    let command_line = argv.join(" ");
    let failure = |reason: String| GuildError::SubprocessFailure {
        command: command_line.clone(),
        reason,
    };

    let (program, args) = argv
        .split_first()
        .ok_or_else(|| failure("empty command".to_string()))?;

    let output = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| failure(e.to_string()))?;

    if output.status.success() {
        Ok(output)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(failure(format!("{}: {}", output.status, stderr.trim())))
    }
}
