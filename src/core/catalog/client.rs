//! Catalog HTTP client.
//!
//! [`CatalogSource`] is the seam the fetcher and list loader depend on;
//! [`HttpCatalog`] is the reqwest implementation talking to the real service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;

use super::error::{CatalogError, CatalogResult};
use super::types::{DetailRecord, ListEntry, ListPage};

/// Read access to the creature catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the fixed list page, in service order.
    async fn list_entries(&self) -> CatalogResult<Vec<ListEntry>>;

    /// Fetch the full record for one entry name.
    async fn fetch_detail(&self, name: &str) -> CatalogResult<DetailRecord>;
}

/// reqwest-backed catalog source.
pub struct HttpCatalog {
    base: Url,
    collection: String,
    list_limit: u32,
    list_offset: u32,
    http_client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(config: &ApiConfig) -> CatalogResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(Self {
            base,
            collection: config.collection.clone(),
            list_limit: config.list_limit,
            list_offset: config.list_offset,
            http_client,
        })
    }

    /// `<base>/<collection>?limit=N[&offset=M]`
    pub fn list_url(&self) -> Url {
        let mut url = self.endpoint(&[self.collection.as_str()]);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &self.list_limit.to_string());
            if self.list_offset != 0 {
                query.append_pair("offset", &self.list_offset.to_string());
            }
        }
        url
    }

    /// `<base>/<collection>/<name>`
    pub fn detail_url(&self, name: &str) -> Url {
        self.endpoint(&[self.collection.as_str(), name])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Infallible: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CatalogResult<T> {
        log::debug!("GET {url}");
        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_entries(&self) -> CatalogResult<Vec<ListEntry>> {
        let page: ListPage = self.get_json(self.list_url()).await?;
        log::info!("Fetched {} catalog entries", page.results.len());
        Ok(page.results)
    }

    async fn fetch_detail(&self, name: &str) -> CatalogResult<DetailRecord> {
        let record: DetailRecord = self.get_json(self.detail_url(name)).await?;
        log::debug!("Fetched detail for {name} (#{})", record.id);
        Ok(record)
    }
}
