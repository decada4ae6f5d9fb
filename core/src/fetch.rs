//! Network retrieval of icon chunks with request coalescing.
//!
//! Each chunk file is downloaded at most once per fetcher lifetime.
//! Concurrent lookups join the in-flight request, later lookups reuse the
//! completed result, and a failed download replays its error instead of
//! retrying. An optional hook observes each decoded chunk from inside the
//! shared download, once per chunk.

use crate::fetch::error::FetchError;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

pub mod error {
    use thiserror::Error;

    /// Chunk download failure. Clonable so one failure can replay to every
    /// waiter on the shared in-flight future.
    #[derive(Debug, Clone, Error)]
    pub enum FetchError {
        #[error("requesting chunk {file} failed: {message}")]
        Request { file: String, message: String },

        #[error("chunk {file} returned HTTP status {status}")]
        Status { file: String, status: u16 },

        #[error("decoding chunk {file} failed: {message}")]
        Decode { file: String, message: String },
    }
}

/// Icon name → SVG path data, as served by one chunk file.
pub type ChunkMap = HashMap<String, String>;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<ChunkMap>, FetchError>>>;

type FetchedHook = Arc<dyn Fn(&ChunkMap) + Send + Sync>;

/// Downloads chunk files from the icon CDN, coalescing requests per file.
pub struct ChunkFetcher {
    client: reqwest::Client,
    endpoint: String,
    on_fetched: Option<FetchedHook>,
    in_flight: Mutex<HashMap<String, SharedFetch>>,
}

impl ChunkFetcher {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            on_fetched: None,
            in_flight: Mutex::new(HashMap::new()),
        })
    }

    /// Runs `hook` on each successfully decoded chunk. The hook sits inside
    /// the shared download future, so it fires exactly once per chunk
    /// regardless of which caller drives the download to completion.
    pub fn on_fetched(mut self, hook: impl Fn(&ChunkMap) + Send + Sync + 'static) -> Self {
        self.on_fetched = Some(Arc::new(hook));
        self
    }

    /// Returns the chunk stored in `file`, downloading it on first use.
    pub async fn fetch(&self, file: &str) -> Result<Arc<ChunkMap>, FetchError> {
        let shared = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(shared) = in_flight.get(file) {
                shared.clone()
            } else {
                let url = format!("{}/{}", self.endpoint, file);
                let task = download(self.client.clone(), url, file.to_string());
                let shared = match self.on_fetched.clone() {
                    Some(hook) => task
                        .inspect(move |result| {
                            if let Ok(chunk) = result {
                                hook(chunk);
                            }
                        })
                        .boxed()
                        .shared(),
                    None => task.boxed().shared(),
                };
                in_flight.insert(file.to_string(), shared.clone());
                shared
            }
        };

        shared.await
    }
}

async fn download(
    client: reqwest::Client,
    url: String,
    file: String,
) -> Result<Arc<ChunkMap>, FetchError> {
    debug!(%file, "downloading icon chunk");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| FetchError::Request {
            file: file.clone(),
            message: err.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            file,
            status: status.as_u16(),
        });
    }

    let chunk: ChunkMap = response.json().await.map_err(|err| FetchError::Decode {
        file: file.clone(),
        message: err.to_string(),
    })?;

    Ok(Arc::new(chunk))
}
