use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::catalog::{CatalogResult, CatalogSource, HttpCatalog};

use super::events::AppEvent;

/// Centralized handle to backend services.
///
/// Created once at startup and passed by reference to the views.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogSource>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Build the HTTP catalog from config.
    ///
    /// An invalid base URL is fatal; the explorer has nothing to show without it.
    pub fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> CatalogResult<Self> {
        let catalog = HttpCatalog::new(&config.api)?;
        log::info!("Catalog client targeting {}", catalog.list_url());
        Ok(Self::new(Arc::new(catalog), event_tx))
    }

    pub fn new(catalog: Arc<dyn CatalogSource>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { catalog, event_tx }
    }
}
