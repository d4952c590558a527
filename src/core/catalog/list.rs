use super::client::CatalogSource;
use super::types::ListEntry;

/// Run the one-shot list retrieval.
///
/// Failure is logged and yields an empty list; there is no retry.
pub async fn load_entries<S>(source: &S) -> Vec<ListEntry>
where
    S: CatalogSource + ?Sized,
{
    match source.list_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Error fetching catalog list: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::client::MockCatalogSource;
    use crate::core::catalog::error::CatalogError;
    use crate::core::catalog::test_support::entries;

    #[tokio::test]
    async fn test_load_preserves_service_order() {
        let mut source = MockCatalogSource::new();
        source
            .expect_list_entries()
            .times(1)
            .returning(|| Ok(entries(&["bulbasaur", "ivysaur", "venusaur"])));

        let loaded = load_entries(&source).await;
        let names: Vec<&str> = loaded.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[tokio::test]
    async fn test_load_failure_is_empty() {
        let mut source = MockCatalogSource::new();
        source.expect_list_entries().times(1).returning(|| {
            Err(CatalogError::Status {
                status: 500,
                url: "http://test/pokemon?limit=151".to_string(),
            })
        });

        assert!(load_entries(&source).await.is_empty());
    }
}
