//! Store-backed statistics.
//!
//! The pure arithmetic lives in `storefront_core::stats`; this module only
//! adds the parts that need the product store.

use std::sync::Arc;

use futures_util::future::try_join_all;

use storefront_core::stats::{share_percent, CategoryShare, StatsError};
use storefront_core::storage::ProductRepository;

use crate::error::Result;

/// Dashboard aggregations that query the product store.
#[derive(Clone)]
pub struct StatsAggregator {
    products: Arc<dyn ProductRepository>,
}

impl StatsAggregator {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Share of the catalog held by each category, in input order.
    ///
    /// `total` is the caller's product count and is not re-read, so shares
    /// need not sum to 100 when it is stale. A zero total is rejected before
    /// any count is issued. Per-category counts run concurrently; the first
    /// failure fails the whole call.
    pub async fn inventory_share(
        &self,
        categories: &[String],
        total: u64,
    ) -> Result<Vec<CategoryShare>> {
        if total == 0 {
            return Err(StatsError::EmptyInventory.into());
        }

        let counts = try_join_all(
            categories
                .iter()
                .map(|category| self.products.count_by_category(category)),
        )
        .await?;

        categories
            .iter()
            .zip(counts)
            .map(|(category, count)| {
                Ok(CategoryShare {
                    category: category.clone(),
                    share: share_percent(count, total)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::storage::InMemoryRepository;
    use storefront_core::catalog::Product;

    async fn catalog(categories: &[&str]) -> Arc<InMemoryRepository> {
        let repo = Arc::new(InMemoryRepository::new());
        for (i, category) in categories.iter().enumerate() {
            let product = Product::new(format!("p{i}"), 10, 1, *category, "desc");
            repo.create_product(&product).await.unwrap();
        }
        repo
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_inventory_share_rounds() {
        let repo = catalog(&["a", "a", "a", "b"]).await;
        let stats = StatsAggregator::new(repo);

        let shares = stats.inventory_share(&names(&["a", "b"]), 4).await.unwrap();

        assert_eq!(
            shares,
            vec![
                CategoryShare {
                    category: "a".to_string(),
                    share: 75
                },
                CategoryShare {
                    category: "b".to_string(),
                    share: 25
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_inventory_share_thirds_round_half_up() {
        let repo = catalog(&["a", "a", "b"]).await;
        let stats = StatsAggregator::new(repo);

        let shares = stats.inventory_share(&names(&["a", "b"]), 3).await.unwrap();

        assert_eq!(shares[0].share, 67);
        assert_eq!(shares[1].share, 33);
    }

    #[tokio::test]
    async fn test_inventory_share_empty_categories() {
        let stats = StatsAggregator::new(catalog(&["a"]).await);

        let shares = stats.inventory_share(&[], 1).await.unwrap();

        assert!(shares.is_empty());
    }

    #[tokio::test]
    async fn test_inventory_share_zero_total_is_rejected() {
        let stats = StatsAggregator::new(catalog(&[]).await);

        let err = stats
            .inventory_share(&names(&["a"]), 0)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Stats(StatsError::EmptyInventory)));
    }

    #[tokio::test]
    async fn test_inventory_share_uses_caller_total() {
        let repo = catalog(&["a", "b"]).await;
        let stats = StatsAggregator::new(repo);

        let shares = stats.inventory_share(&names(&["a", "b"]), 4).await.unwrap();

        let sum: i64 = shares.iter().map(|s| s.share).sum();
        assert_eq!(sum, 50);
    }
}
