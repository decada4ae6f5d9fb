//! Icon resolution pipeline.
//!
//! A lookup walks memory cache → persistent store → network chunk, with
//! deprecation rewriting up front and a short-circuit for the bundled
//! platform logo. Store failures degrade to cache misses; only a failed
//! chunk download (or a failing custom icon set) surfaces as an error.

use crate::fetch::{ChunkFetcher, ChunkMap};
use crate::registry::{CustomIcon, IconSetRegistry};
use crate::resolver::error::IconError;
use crate::resolver::writer::WriteBatch;
use crate::store::IconStore;
use crate::store::read_queue::{ReadQueue, StoreReader};
use crate::types::{
    ChunkManifest, Config, IconName, IconRecord, deprecation_for, is_builtin_prefix, split_icon,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};

mod writer;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum IconError {
        #[error("Store error: {0}")]
        Store(#[from] crate::store::error::StoreError),

        #[error("HTTP client error: {0}")]
        Http(#[from] reqwest::Error),

        #[error("Fetch error: {0}")]
        Fetch(#[from] crate::fetch::error::FetchError),

        #[error("Task join error: {0}")]
        Join(#[from] tokio::task::JoinError),

        #[error("Icon set {prefix} failed: {message}")]
        IconSet { prefix: String, message: String },
    }
}

/// Name of the bundled platform logo, resolvable without store or network.
const LOGO_ICON_NAME: &str = "home-assistant";

/// Path data for the bundled logo.
const LOGO_ICON_PATH: &str = "M12,3L2,12H5V20H19V12H22L12,3M12,7.7C14.1,7.7 15.8,9.4 15.8,11.5C15.8,14.5 12,18 12,18C12,18 8.2,14.5 8.2,11.5C8.2,9.4 9.9,7.7 12,7.7M12,10A1.5,1.5 0 0,0 10.5,11.5A1.5,1.5 0 0,0 12,13A1.5,1.5 0 0,0 13.5,11.5A1.5,1.5 0 0,0 12,10Z";

/// Outcome of one icon lookup.
///
/// `path: None` with `legacy: false` means no icon data was found; callers
/// render nothing. `legacy: true` asks the caller to render the reference
/// through a non-path mechanism such as an icon font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// The icon reference as passed by the caller.
    pub icon: String,
    pub path: Option<String>,
    pub secondary_path: Option<String>,
    pub view_box: Option<String>,
    pub legacy: bool,
}

impl ResolvedIcon {
    fn unresolved(icon: &str) -> Self {
        Self {
            icon: icon.to_string(),
            path: None,
            secondary_path: None,
            view_box: None,
            legacy: false,
        }
    }

    fn legacy(icon: &str) -> Self {
        Self {
            legacy: true,
            ..Self::unresolved(icon)
        }
    }

    fn from_record(icon: &str, record: IconRecord) -> Self {
        Self {
            icon: icon.to_string(),
            path: Some(record.path),
            secondary_path: record.secondary_path,
            view_box: record.view_box,
            legacy: false,
        }
    }

    fn from_custom(icon: &str, custom: CustomIcon) -> Self {
        Self {
            icon: icon.to_string(),
            path: Some(custom.path),
            secondary_path: custom.secondary_path,
            view_box: custom.view_box,
            legacy: false,
        }
    }
}

/// Long-lived icon resolution service.
///
/// Owns every piece of shared state: the in-memory cache, the persistent
/// store with its batched read queue, the coalescing chunk fetcher feeding
/// the debounced store writer, and the custom icon-set registry. One
/// instance serves an application for its whole lifetime.
pub struct IconResolver {
    memory: RwLock<HashMap<String, IconRecord>>,
    read_queue: ReadQueue,
    fetcher: ChunkFetcher,
    icon_sets: IconSetRegistry,
    manifest: ChunkManifest,
}

impl IconResolver {
    /// Opens the resolver against the built-in chunk manifest.
    pub async fn open(config: &Config) -> Result<Self, IconError> {
        Self::open_with_manifest(config, ChunkManifest::builtin().clone()).await
    }

    /// Opens the resolver against a caller-supplied manifest.
    ///
    /// The store's version gate runs against `manifest.version`, so records
    /// cached by an older icon pack are cleared here.
    pub async fn open_with_manifest(
        config: &Config,
        manifest: ChunkManifest,
    ) -> Result<Self, IconError> {
        let store_config = config.clone();
        let version = manifest.version.clone();
        let store =
            tokio::task::spawn_blocking(move || IconStore::open(&store_config, &version)).await??;
        let store = Arc::new(store);

        let tunables = &config.tunables;
        let read_queue = ReadQueue::new(
            Arc::new(StoreReader::new(Arc::clone(&store))),
            tunables.store_read_timeout(),
        );

        // Persistence rides inside the shared download future, so a chunk
        // is queued for the store exactly once, no matter which lookup
        // drives its download to completion.
        let write_tx = writer::spawn_flush_task(store, tunables.flush_quiet_period());
        let fetcher = ChunkFetcher::new(config.endpoint.clone(), tunables.fetch_timeout())?
            .on_fetched(move |chunk| queue_store_write(&write_tx, chunk));

        Ok(Self {
            memory: RwLock::new(HashMap::new()),
            read_queue,
            fetcher,
            icon_sets: IconSetRegistry::new(),
            manifest,
        })
    }

    /// Registry of custom icon sets consulted for non-built-in prefixes.
    pub fn icon_sets(&self) -> &IconSetRegistry {
        &self.icon_sets
    }

    /// Manifest the resolver serves built-in prefixes from.
    pub fn manifest(&self) -> &ChunkManifest {
        &self.manifest
    }
}

/// Lookup operations.
impl IconResolver {
    /// Resolves an icon reference of the form `prefix:name`.
    pub async fn load_icon(&self, icon: &str) -> Result<ResolvedIcon, IconError> {
        self.load_icon_with(icon, |_| {}).await
    }

    /// Like [`IconResolver::load_icon`], additionally passing a deprecation
    /// warning to `on_warning`. Warnings are always logged; the callback
    /// fires at most once per call.
    pub async fn load_icon_with(
        &self,
        icon: &str,
        on_warning: impl FnOnce(&str),
    ) -> Result<ResolvedIcon, IconError> {
        let Some((prefix, name)) = split_icon(icon) else {
            return Ok(ResolvedIcon::unresolved(icon));
        };

        if !is_builtin_prefix(prefix) {
            return self.load_custom_icon(icon, prefix, name).await;
        }

        // Rewrite deprecated names before any cache is consulted, so a
        // renamed icon is cached under its replacement.
        let name = match deprecation_for(name) {
            Some(deprecated) => {
                let warning = deprecated.warning(prefix, name);
                warn!("{}", warning);
                on_warning(&warning);
                deprecated.replacement.unwrap_or(name)
            }
            None => name,
        };

        if name == LOGO_ICON_NAME {
            let record = IconRecord::from_path(LOGO_ICON_PATH);
            self.memory
                .write()
                .await
                .insert(name.to_string(), record.clone());
            return Ok(ResolvedIcon::from_record(icon, record));
        }

        if let Some(record) = self.memory.read().await.get(name) {
            return Ok(ResolvedIcon::from_record(icon, record.clone()));
        }

        match self.read_store(name).await {
            Some(record) => {
                self.memory
                    .write()
                    .await
                    .insert(name.to_string(), record.clone());
                Ok(ResolvedIcon::from_record(icon, record))
            }
            None => self.load_chunk_icon(icon, name).await,
        }
    }

    async fn load_custom_icon(
        &self,
        icon: &str,
        prefix: &str,
        name: &str,
    ) -> Result<ResolvedIcon, IconError> {
        let Some(set) = self.icon_sets.lookup(prefix).await else {
            debug!(icon, "no icon set registered for prefix, marking legacy");
            return Ok(ResolvedIcon::legacy(icon));
        };

        let custom = set
            .get_icon(name)
            .await
            .map_err(|message| IconError::IconSet {
                prefix: prefix.to_string(),
                message,
            })?;

        Ok(ResolvedIcon::from_custom(icon, custom))
    }

    /// Batched store lookup. Failures and timeouts degrade to a miss.
    async fn read_store(&self, name: &str) -> Option<IconRecord> {
        let key = IconName::try_from(name).ok()?;
        match self.read_queue.read(key).await {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, icon = name, "store read failed, treating as a miss");
                None
            }
        }
    }

    async fn load_chunk_icon(&self, icon: &str, name: &str) -> Result<ResolvedIcon, IconError> {
        let Some(file) = self.manifest.chunk_for(name) else {
            return Ok(ResolvedIcon::unresolved(icon));
        };

        let chunk = self.fetcher.fetch(file).await?;
        match chunk.get(name) {
            Some(path) => Ok(ResolvedIcon::from_record(
                icon,
                IconRecord::from_path(path.clone()),
            )),
            None => Ok(ResolvedIcon::unresolved(icon)),
        }
    }
}

/// Hands a freshly fetched chunk to the debounced store writer.
fn queue_store_write(write_tx: &mpsc::UnboundedSender<WriteBatch>, chunk: &ChunkMap) {
    let batch: WriteBatch = chunk
        .iter()
        .filter_map(|(name, path)| {
            let key = IconName::try_from(name.as_str()).ok()?;
            Some((key, IconRecord::from_path(path.clone())))
        })
        .collect();

    if write_tx.send(batch).is_err() {
        warn!("icon writer task is gone, dropping store write");
    }
}
