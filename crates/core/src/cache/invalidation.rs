//! Pure key computation for tag-based invalidation.
//!
//! A write describes *what changed* with an [`InvalidationDescriptor`]; the
//! descriptor maps each domain flag to a deterministic set of cache keys.
//! Performing the deletion is left to the caller (see `InvalidationRouter`
//! in the `storefront` crate).

use uuid::Uuid;

use super::keys::{
    my_orders_key, order_key, product_key, ADMIN_KEYS, ALL_ORDERS_KEY, PRODUCT_LISTING_KEYS,
};

/// The product ids touched by a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductIds {
    /// A single product was created, updated or deleted.
    One(Uuid),
    /// Several products changed at once (e.g. stock drawn down by an order).
    Many(Vec<Uuid>),
}

impl From<Uuid> for ProductIds {
    fn from(id: Uuid) -> Self {
        Self::One(id)
    }
}

impl From<Vec<Uuid>> for ProductIds {
    fn from(ids: Vec<Uuid>) -> Self {
        Self::Many(ids)
    }
}

/// Describes which domains of data a write just changed.
///
/// Each flag is independent; the keys to delete are the union of the keys
/// for every flag that is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationDescriptor {
    pub product: bool,
    pub order: bool,
    pub admin: bool,
    pub product_id: Option<ProductIds>,
    pub user_id: Option<String>,
    pub order_id: Option<Uuid>,
}

impl InvalidationDescriptor {
    /// Creates an empty descriptor that invalidates nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks product listings as changed.
    pub fn product(mut self) -> Self {
        self.product = true;
        self
    }

    /// Marks order listings as changed.
    pub fn order(mut self) -> Self {
        self.order = true;
        self
    }

    /// Marks dashboard statistics as changed.
    pub fn admin(mut self) -> Self {
        self.admin = true;
        self
    }

    /// Sets the product id(s) the write touched.
    pub fn with_product_id(mut self, ids: impl Into<ProductIds>) -> Self {
        self.product_id = Some(ids.into());
        self
    }

    /// Sets the user whose order history changed.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the order that changed.
    pub fn with_order_id(mut self, order_id: Uuid) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Returns true if no flag is set.
    pub fn is_empty(&self) -> bool {
        !(self.product || self.order || self.admin)
    }

    /// Keys dropped by the `product` flag, or `None` when it is unset.
    ///
    /// A single id contributes `product-<id>` twice: once as the templated
    /// entry of the listing and once from the single-id branch. The duplicate
    /// is harmless because deleting a missing key is a no-op.
    pub fn product_keys(&self) -> Option<Vec<String>> {
        if !self.product {
            return None;
        }

        let mut keys: Vec<String> = PRODUCT_LISTING_KEYS.iter().map(|k| k.to_string()).collect();
        match &self.product_id {
            Some(ProductIds::One(id)) => {
                keys.push(product_key(id));
                keys.push(product_key(id));
            }
            Some(ProductIds::Many(ids)) => {
                keys.extend(ids.iter().map(product_key));
            }
            None => {}
        }
        Some(keys)
    }

    /// Keys dropped by the `order` flag, or `None` when it is unset.
    pub fn order_keys(&self) -> Option<Vec<String>> {
        if !self.order {
            return None;
        }

        Some(vec![
            ALL_ORDERS_KEY.to_string(),
            my_orders_key(self.user_id.as_deref()),
            order_key(self.order_id),
        ])
    }

    /// Keys dropped by the `admin` flag, or `None` when it is unset.
    pub fn admin_keys(&self) -> Option<Vec<String>> {
        self.admin
            .then(|| ADMIN_KEYS.iter().map(|k| k.to_string()).collect())
    }

    /// Returns true if the `order` flag renders a key with a placeholder id.
    pub fn has_undefined_order_ids(&self) -> bool {
        self.order && (self.user_id.is_none() || self.order_id.is_none())
    }

    /// Every key this descriptor invalidates, in flag order.
    pub fn keys(&self) -> Vec<String> {
        [self.product_keys(), self.order_keys(), self.admin_keys()]
            .into_iter()
            .flatten()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_id() -> Uuid {
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()
    }

    #[test]
    fn test_empty_descriptor_has_no_keys() {
        let descriptor = InvalidationDescriptor::new();
        assert!(descriptor.is_empty());
        assert!(descriptor.keys().is_empty());
    }

    #[test]
    fn test_product_without_id_drops_listing_keys() {
        let keys = InvalidationDescriptor::new().product().keys();
        assert_eq!(keys, vec!["latest-products", "categories", "all-products"]);
    }

    #[test]
    fn test_product_single_id_duplicates_product_key() {
        let id = product_id();
        let keys = InvalidationDescriptor::new()
            .product()
            .with_product_id(id)
            .keys();

        let expected = product_key(id);
        assert_eq!(keys.len(), 5);
        assert!(keys.contains(&"latest-products".to_string()));
        assert!(keys.contains(&"categories".to_string()));
        assert!(keys.contains(&"all-products".to_string()));
        assert_eq!(keys.iter().filter(|k| **k == expected).count(), 2);
    }

    #[test]
    fn test_product_single_id_regardless_of_other_flags() {
        let id = product_id();
        let keys = InvalidationDescriptor::new()
            .product()
            .order()
            .admin()
            .with_product_id(id)
            .with_user_id("u1")
            .keys();

        for key in ["latest-products", "categories", "all-products"] {
            assert!(keys.contains(&key.to_string()));
        }
        assert!(keys.contains(&product_key(id)));
    }

    #[test]
    fn test_product_many_ids_yields_k_plus_three_keys() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let keys = InvalidationDescriptor::new()
            .product()
            .with_product_id(ids.clone())
            .product_keys()
            .unwrap();

        assert_eq!(keys.len(), ids.len() + 3);
        for id in &ids {
            assert!(keys.contains(&product_key(id)));
        }
    }

    #[test]
    fn test_product_many_ids_keeps_duplicates() {
        let id = product_id();
        let keys = InvalidationDescriptor::new()
            .product()
            .with_product_id(vec![id, id])
            .product_keys()
            .unwrap();

        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_product_id_ignored_without_product_flag() {
        let keys = InvalidationDescriptor::new()
            .with_product_id(product_id())
            .keys();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_order_keys_with_ids() {
        let order_id = product_id();
        let keys = InvalidationDescriptor::new()
            .order()
            .with_user_id("user-7")
            .with_order_id(order_id)
            .keys();

        assert_eq!(
            keys,
            vec![
                "all-orders".to_string(),
                "my-orders-user-7".to_string(),
                format!("order-{}", order_id),
            ]
        );
    }

    #[test]
    fn test_order_keys_degrade_to_placeholder() {
        let descriptor = InvalidationDescriptor::new().order();
        assert!(descriptor.has_undefined_order_ids());
        assert_eq!(
            descriptor.keys(),
            vec!["all-orders", "my-orders-undefined", "order-undefined"]
        );
    }

    #[test]
    fn test_admin_keys_unconditional() {
        let keys = InvalidationDescriptor::new().admin().keys();
        assert_eq!(
            keys,
            vec![
                "admin-stats",
                "admin-pie-charts",
                "admin-bar-charts",
                "admin-line-charts"
            ]
        );
    }

    #[test]
    fn test_union_of_flags() {
        let keys = InvalidationDescriptor::new()
            .product()
            .order()
            .admin()
            .with_user_id("u")
            .with_order_id(Uuid::nil())
            .keys();

        // 3 listing keys + 3 order keys + 4 admin keys
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_has_undefined_order_ids_requires_order_flag() {
        assert!(!InvalidationDescriptor::new().has_undefined_order_ids());
        assert!(!InvalidationDescriptor::new()
            .order()
            .with_user_id("u")
            .with_order_id(Uuid::nil())
            .has_undefined_order_ids());
    }
}
