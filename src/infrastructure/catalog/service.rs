//! Product listing and cart service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::catalog::{CartItem, CartItemId, Product};
use crate::domain::storage::Storage;

/// Fields for a new product listing entry
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub team: String,
    pub image_url: String,
    pub name: String,
    pub price: String,
}

/// Fields for a new cart row
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub username: String,
    pub team: String,
    pub image_url: String,
    pub name: String,
    pub price: String,
}

/// Catalog and cart service over the product and cart record stores
#[derive(Debug)]
pub struct CatalogService {
    products: Arc<dyn Storage<Product>>,
    cart_items: Arc<dyn Storage<CartItem>>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn Storage<Product>>, cart_items: Arc<dyn Storage<CartItem>>) -> Self {
        Self {
            products,
            cart_items,
        }
    }

    /// Unconditional insert; no validation of price format or team existence.
    /// Access control is assumed to be enforced outside this service.
    pub async fn add_product(&self, request: NewProduct) -> Result<Product, DomainError> {
        info!(team = %request.team, name = %request.name, "Adding product");

        let product = Product::new(request.team, request.image_url, request.name, request.price);
        self.products.create(product).await
    }

    /// All products for a team.
    ///
    /// An empty result is `NotFound`, which conflates "no such team" with
    /// "team has no products"; both surface identically to the caller.
    pub async fn list_products(&self, team: &str) -> Result<Vec<Product>, DomainError> {
        let products: Vec<Product> = self
            .products
            .list()
            .await?
            .into_iter()
            .filter(|p| p.team() == team)
            .collect();

        if products.is_empty() {
            return Err(DomainError::not_found("No products found for this team"));
        }

        Ok(products)
    }

    /// Unconditional insert of a new cart row; duplicate adds of the same
    /// product accumulate as separate rows.
    pub async fn add_to_cart(&self, request: NewCartItem) -> Result<CartItem, DomainError> {
        debug!(username = %request.username, name = %request.name, "Adding item to cart");

        let item = CartItem::new(
            request.username,
            request.team,
            request.image_url,
            request.name,
            request.price,
        );
        self.cart_items.create(item).await
    }

    /// All cart rows for a user; `NotFound` when the cart is empty
    pub async fn cart(&self, username: &str) -> Result<Vec<CartItem>, DomainError> {
        let items: Vec<CartItem> = self
            .cart_items
            .list()
            .await?
            .into_iter()
            .filter(|i| i.username() == username)
            .collect();

        if items.is_empty() {
            return Err(DomainError::not_found("No cart items found for this user"));
        }

        Ok(items)
    }

    /// Delete one cart row by id.
    ///
    /// Returns whether a row was removed; removing an unknown id is not an
    /// error, matching the source system's delete-by-filter behavior.
    pub async fn remove_from_cart(&self, item_id: &str) -> Result<bool, DomainError> {
        self.cart_items.delete(&CartItemId::new(item_id)).await
    }

    /// Number of product listings, used by the readiness probe
    pub async fn product_count(&self) -> Result<usize, DomainError> {
        self.products.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_service() -> CatalogService {
        CatalogService::new(
            Arc::new(InMemoryStorage::<Product>::new()),
            Arc::new(InMemoryStorage::<CartItem>::new()),
        )
    }

    fn jersey(team: &str) -> NewProduct {
        NewProduct {
            team: team.to_string(),
            image_url: "jersey.jpg".to_string(),
            name: "Jersey".to_string(),
            price: "999".to_string(),
        }
    }

    fn cart_entry(username: &str, name: &str) -> NewCartItem {
        NewCartItem {
            username: username.to_string(),
            team: "CSK".to_string(),
            image_url: "item.jpg".to_string(),
            name: name.to_string(),
            price: "499".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_products() {
        let service = create_service();

        service.add_product(jersey("CSK")).await.unwrap();
        service.add_product(jersey("CSK")).await.unwrap();
        service.add_product(jersey("MI")).await.unwrap();

        let csk = service.list_products("CSK").await.unwrap();
        assert_eq!(csk.len(), 2);

        let mi = service.list_products("MI").await.unwrap();
        assert_eq!(mi.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_empty_team_is_not_found() {
        let service = create_service();

        service.add_product(jersey("CSK")).await.unwrap();

        // nonexistent team and a team with zero products look the same
        let result = service.list_products("KKR").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_duplicate_adds_accumulate() {
        let service = create_service();

        service.add_to_cart(cart_entry("alice", "Mug")).await.unwrap();
        service.add_to_cart(cart_entry("alice", "Mug")).await.unwrap();
        service.add_to_cart(cart_entry("alice", "Mug")).await.unwrap();

        let cart = service.cart("alice").await.unwrap();
        assert_eq!(cart.len(), 3);
    }

    #[tokio::test]
    async fn test_cart_is_scoped_by_username() {
        let service = create_service();

        service.add_to_cart(cart_entry("alice", "Mug")).await.unwrap();
        service.add_to_cart(cart_entry("bob", "Cap")).await.unwrap();

        let cart = service.cart("alice").await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].name(), "Mug");
    }

    #[tokio::test]
    async fn test_empty_cart_is_not_found() {
        let service = create_service();

        let result = service.cart("alice").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_remove_from_cart() {
        let service = create_service();

        service.add_to_cart(cart_entry("alice", "Mug")).await.unwrap();
        let item = service
            .add_to_cart(cart_entry("alice", "Cap"))
            .await
            .unwrap();

        let removed = service.remove_from_cart(item.id().as_str()).await.unwrap();
        assert!(removed);

        let cart = service.cart("alice").await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].name(), "Mug");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_not_an_error() {
        let service = create_service();

        let removed = service.remove_from_cart("no-such-id").await.unwrap();
        assert!(!removed);
    }
}
