//! Detail fetching with memoization and request sequencing.
//!
//! Overlapping detail requests are never cancelled, so responses may arrive
//! out of submission order. Each network request carries a [`RequestToken`];
//! only the response matching the newest token may become the displayed
//! record. Superseded successes still land in the cache.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::cache::DetailCache;
use super::client::CatalogSource;
use super::error::CatalogResult;
use super::types::DetailRecord;

/// Monotonically increasing id of one detail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Immediate result of selecting a name.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Served from the cache; no network access.
    Cached(Arc<DetailRecord>),
    /// A request is in flight for the selection.
    Fetching(RequestToken),
}

/// A completed request, as applied to the fetcher's state.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The newest request succeeded; display this record.
    Ready(Arc<DetailRecord>),
    /// The newest request failed; keep whatever is displayed.
    Failed { name: String },
    /// A superseded request finished. Cached if it succeeded, never displayed.
    Stale { name: String },
}

/// Raw response sent back by a spawned request task.
#[derive(Debug)]
pub struct DetailResponse {
    pub token: RequestToken,
    pub name: String,
    pub result: CatalogResult<DetailRecord>,
}

/// Get-or-fetch front end for [`DetailCache`], driven from the UI task.
pub struct DetailFetcher {
    source: Arc<dyn CatalogSource>,
    cache: DetailCache,
    next_token: u64,
    /// Newest request that still governs the display.
    current: Option<RequestToken>,
    /// Outstanding requests by name.
    in_flight: HashMap<String, RequestToken>,
    response_tx: mpsc::UnboundedSender<DetailResponse>,
    response_rx: mpsc::UnboundedReceiver<DetailResponse>,
}

impl DetailFetcher {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            source,
            cache: DetailCache::new(),
            next_token: 0,
            current: None,
            in_flight: HashMap::new(),
            response_tx,
            response_rx,
        }
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// True while the current selection's request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }

    /// Select `name`: serve it from the cache, or make sure a request for it
    /// is in flight and make that request the current one.
    ///
    /// Must be called within a tokio runtime.
    pub fn select(&mut self, name: &str) -> Selection {
        if let Some(record) = self.cache.get(name) {
            if let Some(superseded) = self.current.take() {
                log::debug!("Cached selection {name} supersedes request {}", superseded.0);
            }
            return Selection::Cached(record);
        }

        if let Some(&token) = self.in_flight.get(name) {
            log::debug!("Reusing in-flight request {} for {name}", token.0);
            self.current = Some(token);
            return Selection::Fetching(token);
        }

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.current = Some(token);
        self.in_flight.insert(name.to_string(), token);
        log::info!("Fetching detail for {name} (request {})", token.0);

        let source = Arc::clone(&self.source);
        let tx = self.response_tx.clone();
        let name = name.to_string();
        tokio::spawn(async move {
            let result = source.fetch_detail(&name).await;
            // Receiver gone means the explorer was torn down.
            let _ = tx.send(DetailResponse {
                token,
                name,
                result,
            });
        });

        Selection::Fetching(token)
    }

    /// Apply one response to the cache and sequencing state.
    pub fn accept(&mut self, response: DetailResponse) -> FetchOutcome {
        let DetailResponse {
            token,
            name,
            result,
        } = response;

        if self.in_flight.get(&name) == Some(&token) {
            self.in_flight.remove(&name);
        }

        let is_current = self.current == Some(token);
        if is_current {
            self.current = None;
        }

        match result {
            Ok(record) => {
                let record = self.cache.store(name.as_str(), record);
                if is_current {
                    FetchOutcome::Ready(record)
                } else {
                    log::debug!("Discarding stale response {} for {name}", token.0);
                    FetchOutcome::Stale { name }
                }
            }
            Err(e) => {
                log::error!("Error fetching details for {name}: {e}");
                if is_current {
                    FetchOutcome::Failed { name }
                } else {
                    FetchOutcome::Stale { name }
                }
            }
        }
    }

    /// Drain every response that has arrived, without waiting.
    pub fn poll(&mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(response) = self.response_rx.try_recv() {
            outcomes.push(self.accept(response));
        }
        outcomes
    }

    /// Wait for the next response and apply it.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        let response = self.response_rx.recv().await?;
        Some(self.accept(response))
    }
}
