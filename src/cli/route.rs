//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::config::{ConfigLoader, ToolConfig};
use crate::error::GuildError;
use crate::guild::{ConfigResolver, ContextSource, GuildContext, ProjectLayout};
use crate::watch::{CommandLauncher, WatchConfig, WatchDaemon};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, info_span, warn};

use crate::cli::command_name;
use crate::cli::parse::Commands;

/// Runtime context for CLI execution: project root, tool settings, and layout.
/// Built from the root path and optional config path using ConfigLoader only.
pub struct RunContext {
    root: PathBuf,
    config_path: Option<PathBuf>,
    config: ToolConfig,
    layout: ProjectLayout,
}

impl RunContext {
    /// Create run context from project root and optional config path. Uses ConfigLoader only.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GuildError> {
        let root = absolute(&root);
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&root)?,
        };
        let layout = ProjectLayout::from_config(&root, &config.paths);

        Ok(Self {
            root,
            config_path: config_path.map(|p| absolute(&p)),
            config,
            layout,
        })
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, GuildError> {
        let span = info_span!("command", name = command_name(command));
        let _enter = span.enter();

        match command {
            Commands::Resolve { format } => self.handle_resolve(format),
            Commands::Watch { debounce_ms } => self.handle_watch(*debounce_ms),
            Commands::Show {
                format,
                from_artifact,
            } => self.handle_show(format, *from_artifact),
        }
    }

    fn handle_resolve(&self, format: &str) -> Result<String, GuildError> {
        let resolution = ConfigResolver::new(self.layout.clone()).resolve()?;
        if format == "json" {
            super::format_resolution_json(&resolution)
        } else {
            Ok(super::format_resolution_text(&resolution))
        }
    }

    fn handle_show(&self, format: &str, from_artifact: bool) -> Result<String, GuildError> {
        let source = if from_artifact {
            ContextSource::Artifact
        } else {
            ContextSource::UserConfig
        };
        let context = GuildContext::with_source(self.layout.clone(), source);
        if format == "json" {
            super::format_context_json(&context)
        } else {
            Ok(super::format_context_text(&context))
        }
    }

    fn handle_watch(&self, debounce_ms: Option<u64>) -> Result<String, GuildError> {
        let mut settings = self.config.watch.clone();
        if let Some(ms) = debounce_ms {
            settings.debounce_ms = ms;
        }
        settings.validate().map_err(GuildError::Config)?;

        let resolve_command = if settings.resolve_command.is_empty() {
            self.own_resolve_command()?
        } else {
            settings.resolve_command.clone()
        };
        let launcher = CommandLauncher::new(
            settings.convert_command.clone(),
            resolve_command,
            self.root.clone(),
        );
        let daemon = WatchDaemon::new(
            WatchConfig {
                layout: self.layout.clone(),
                debounce: Duration::from_millis(settings.debounce_ms),
            },
            launcher,
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GuildError::Watch(format!("Failed to start event loop: {}", e)))?;
        runtime.block_on(daemon.watch(shutdown_signal()))?;

        info!("Watcher stopped");
        Ok("Watcher stopped".to_string())
    }

    /// This binary's own `resolve` subcommand, pinned to the same root and config.
    fn own_resolve_command(&self) -> Result<Vec<String>, GuildError> {
        let exe = std::env::current_exe()
            .map_err(|e| GuildError::Config(format!("Cannot locate own executable: {}", e)))?;

        let mut argv = vec![
            exe.to_string_lossy().into_owned(),
            "--root".to_string(),
            self.root.to_string_lossy().into_owned(),
        ];
        if let Some(config_path) = &self.config_path {
            argv.push("--config".to_string());
            argv.push(config_path.to_string_lossy().into_owned());
        }
        argv.push("resolve".to_string());
        Ok(argv)
    }
}

fn absolute(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; stop the watcher by killing the process");
        std::future::pending::<()>().await;
    }
}
