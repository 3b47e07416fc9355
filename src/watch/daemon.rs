//! Watch Mode Daemon
//!
//! Observes the data directory recursively and keeps generated artifacts
//! fresh: CSV changes re-run the conversion step, config and logo changes
//! re-run configuration resolution. Each category is debounced on its own.

use super::classify::EventClassifier;
use super::debounce::Debouncer;
use super::runner::{Step, StepLauncher};
use crate::error::GuildError;
use crate::guild::ProjectLayout;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Watch mode configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Project layout; the data directory is watched
    pub layout: ProjectLayout,
    /// Debounce window per category
    pub debounce: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            layout: ProjectLayout::new("."),
            debounce: Duration::from_millis(300),
        }
    }
}

/// Watch mode daemon
pub struct WatchDaemon<L> {
    config: WatchConfig,
    classifier: EventClassifier,
    /// Canonical form of the data directory, as notify reports paths
    watch_root: PathBuf,
    launcher: L,
}

impl<L: StepLauncher> WatchDaemon<L> {
    pub fn new(config: WatchConfig, launcher: L) -> Self {
        let classifier = EventClassifier::for_layout(&config.layout);
        let watch_root = dunce::canonicalize(&config.layout.data_dir)
            .unwrap_or_else(|_| config.layout.data_dir.clone());
        Self {
            config,
            classifier,
            watch_root,
            launcher,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Watch the data directory until `shutdown` completes.
    pub async fn watch<S>(&self, shutdown: S) -> Result<(), GuildError>
    where
        S: Future<Output = ()>,
    {
        let data_dir = &self.config.layout.data_dir;
        if !data_dir.is_dir() {
            return Err(GuildError::Watch(format!(
                "data directory {} does not exist",
                data_dir.display()
            )));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if tx.send(res).is_err() {
                debug!("Watch event dropped after shutdown");
            }
        })?;
        watcher.watch(data_dir, RecursiveMode::Recursive)?;
        info!(data_dir = %data_dir.display(), "Watching for changes");

        let result = self.run(rx, shutdown).await;
        drop(watcher);
        result
    }

    /// Event loop over an already-connected event source.
    ///
    /// Launches one conversion immediately, then debounces incoming events.
    /// Returns when `shutdown` completes or the event source closes.
    pub async fn run<S>(
        &self,
        mut events: mpsc::UnboundedReceiver<notify::Result<Event>>,
        shutdown: S,
    ) -> Result<(), GuildError>
    where
        S: Future<Output = ()>,
    {
        self.launcher.launch(Step::Convert, "startup");

        let mut debouncer = Debouncer::new(self.config.debounce);
        tokio::pin!(shutdown);

        loop {
            let deadline = debouncer.next_deadline();
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping watcher");
                    break;
                }
                received = events.recv() => match received {
                    Some(Ok(event)) => self.handle_event(event, &mut debouncer),
                    Some(Err(e)) => warn!(error = %e, "Watch error"),
                    None => {
                        error!("Watcher channel disconnected");
                        break;
                    }
                },
                _ = sleep_until_deadline(deadline) => {
                    for category in debouncer.take_due(Instant::now()) {
                        let reason = format!("{} file change", category.as_str());
                        self.launcher.launch(category.step(), &reason);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_event(&self, event: Event, debouncer: &mut Debouncer) {
        if !is_change(&event.kind) {
            return;
        }

        for path in &event.paths {
            let relative = self.relative_path(path);
            debug!(kind = ?event.kind, path = %relative.display(), "File event");

            if let Some(category) = self.classifier.classify(&relative) {
                let restarted = debouncer.record(category, Instant::now());
                info!(
                    category = category.as_str(),
                    path = %relative.display(),
                    restarted,
                    "Detected {} change",
                    category.as_str()
                );
            }
        }
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.watch_root)
            .or_else(|_| path.strip_prefix(&self.config.layout.data_dir))
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
