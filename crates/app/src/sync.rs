//! One-shot menu import.
//!
//! At startup a single background task checks whether the local menu table is
//! empty and, only then, fetches the remote menu and inserts it. There is no
//! retry and no refresh: a populated table is never touched again.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::db::MenuItemStore;
use crate::error::Result;
use crate::remote::MenuSource;

/// What the sync did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The table already had rows; the remote source was not contacted.
    AlreadyPopulated,
    /// The table was empty and this many items were imported.
    Imported(usize),
}

/// Import the remote menu if, and only if, the local table is empty.
///
/// # Errors
///
/// Returns an error if the emptiness check, the fetch or the insert fails.
#[instrument(skip_all)]
pub async fn sync_if_empty<S>(store: &MenuItemStore, source: &S) -> Result<SyncOutcome>
where
    S: MenuSource + ?Sized,
{
    if !store.is_empty().await? {
        info!("Menu already cached, skipping remote fetch");
        return Ok(SyncOutcome::AlreadyPopulated);
    }

    info!("Menu cache empty, fetching remote menu");
    let items = source.fetch_menu().await?;
    store.insert_all(&items).await?;

    info!(count = items.len(), "Menu imported");
    Ok(SyncOutcome::Imported(items.len()))
}

/// Guard ensuring the startup sync is spawned at most once per process.
#[derive(Clone, Default)]
pub struct SyncLauncher {
    started: Arc<AtomicBool>,
}

impl SyncLauncher {
    /// Create a launcher that has not fired yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`spawn`](Self::spawn) has already fired.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Spawn the background sync.
    ///
    /// Returns `None` if a sync was already spawned through this launcher.
    /// Failures are logged and also reported through the returned handle.
    pub fn spawn(
        &self,
        store: MenuItemStore,
        source: Arc<dyn MenuSource>,
    ) -> Option<JoinHandle<Result<SyncOutcome>>> {
        if self.started.swap(true, Ordering::AcqRel) {
            info!("Menu sync already launched, ignoring");
            return None;
        }

        info!("Spawning background menu sync task");
        Some(tokio::spawn(async move {
            let result = sync_if_empty(&store, source.as_ref()).await;
            if let Err(e) = &result {
                error!(error = %e, "Menu sync failed");
            }
            result
        }))
    }
}
