//! Batched, timeout-guarded reads from the icon store.
//!
//! Concurrent lookups are coalesced: the push that makes the queue
//! non-empty schedules one drain, and every name queued before the drain
//! runs is answered by a single batched read. A timeout or store failure
//! fails the whole batch uniformly.

use async_trait::async_trait;
use crate::store::IconStore;
use crate::store::read_queue::error::StoreReadError;
use crate::types::{IconName, IconRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, oneshot};

pub mod error {
    use thiserror::Error;

    /// Failure of a batched store read, delivered to every waiter in the
    /// batch. Clonable so one failure can answer many waiters.
    #[derive(Debug, Clone, Error)]
    pub enum StoreReadError {
        #[error("store read timed out")]
        TimedOut,

        #[error("store read failed: {0}")]
        Failed(String),

        #[error("store read was dropped before completing")]
        Dropped,
    }
}

type ReadResult = Result<Option<IconRecord>, StoreReadError>;
type Waiter = (IconName, oneshot::Sender<ReadResult>);

/// Source of batched icon lookups.
///
/// The production reader wraps [`IconStore`]; tests substitute slow or
/// failing readers.
#[async_trait]
pub trait BatchRead: Send + Sync {
    /// Looks up every name, returning a vector parallel to `names`.
    async fn read_batch(&self, names: Vec<IconName>) -> Result<Vec<Option<IconRecord>>, String>;
}

/// [`BatchRead`] implementation running [`IconStore::get_batch`] on a
/// blocking thread.
pub struct StoreReader {
    store: Arc<IconStore>,
}

impl StoreReader {
    pub fn new(store: Arc<IconStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BatchRead for StoreReader {
    async fn read_batch(&self, names: Vec<IconName>) -> Result<Vec<Option<IconRecord>>, String> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.get_batch(&names))
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())
    }
}

/// Coalesces concurrent store lookups into batched reads.
#[derive(Clone)]
pub struct ReadQueue {
    inner: Arc<QueueInner>,
}

struct QueueInner {
    reader: Arc<dyn BatchRead>,
    timeout: Duration,
    pending: Mutex<Vec<Waiter>>,
}

impl ReadQueue {
    pub fn new(reader: Arc<dyn BatchRead>, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(QueueInner {
                reader,
                timeout,
                pending: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queues a lookup and waits for the batch it lands in.
    pub async fn read(&self, name: IconName) -> ReadResult {
        let (tx, rx) = oneshot::channel();

        let schedule_drain = {
            let mut pending = self.inner.pending.lock().await;
            pending.push((name, tx));
            pending.len() == 1
        };

        if schedule_drain {
            let inner = Arc::clone(&self.inner);
            tokio::spawn(drain(inner));
        }

        rx.await.unwrap_or(Err(StoreReadError::Dropped))
    }
}

async fn drain(inner: Arc<QueueInner>) {
    // Let sibling tasks enqueue before the batch is taken.
    tokio::task::yield_now().await;

    let waiters = std::mem::take(&mut *inner.pending.lock().await);
    if waiters.is_empty() {
        return;
    }

    let names: Vec<IconName> = waiters.iter().map(|(name, _)| name.clone()).collect();

    let outcome = match tokio::time::timeout(inner.timeout, inner.reader.read_batch(names)).await {
        Ok(Ok(records)) => Ok(records),
        Ok(Err(message)) => Err(StoreReadError::Failed(message)),
        Err(_) => Err(StoreReadError::TimedOut),
    };

    match outcome {
        Ok(records) => {
            for ((_, tx), record) in waiters.into_iter().zip(records) {
                let _ = tx.send(Ok(record));
            }
        }
        Err(err) => {
            for (_, tx) in waiters {
                let _ = tx.send(Err(err.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests;
