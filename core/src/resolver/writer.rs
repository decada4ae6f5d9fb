//! Debounced persistence of freshly fetched icons.

use crate::store::IconStore;
use crate::types::{IconName, IconRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub(crate) type WriteBatch = Vec<(IconName, IconRecord)>;

/// Spawns the writer task and returns its input channel.
///
/// Batches accumulate until no new batch arrives for one quiet period, then
/// everything accumulated is written in a single store transaction. When the
/// channel closes the task flushes whatever is still pending and exits.
pub(crate) fn spawn_flush_task(
    store: Arc<IconStore>,
    quiet: Duration,
) -> mpsc::UnboundedSender<WriteBatch> {
    let (tx, mut rx) = mpsc::unbounded_channel::<WriteBatch>();

    tokio::spawn(async move {
        while let Some(first) = rx.recv().await {
            let mut pending = first;
            loop {
                match tokio::time::timeout(quiet, rx.recv()).await {
                    Ok(Some(batch)) => pending.extend(batch),
                    Ok(None) | Err(_) => break,
                }
            }
            flush(&store, pending).await;
        }
    });

    tx
}

async fn flush(store: &Arc<IconStore>, entries: WriteBatch) {
    if entries.is_empty() {
        return;
    }

    let count = entries.len();
    let store = Arc::clone(store);
    match tokio::task::spawn_blocking(move || store.put_batch(&entries)).await {
        Ok(Ok(())) => debug!(count, "flushed icon records to the store"),
        Ok(Err(err)) => warn!(%err, "writing icon records to the store failed"),
        Err(err) => warn!(%err, "store write task panicked"),
    }
}
