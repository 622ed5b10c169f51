//! Product listing and cart entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::storage::{StorageEntity, StorageKey};

/// Opaque product identifier, generated at insert time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for ProductId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team-scoped product listing entry.
///
/// No uniqueness beyond the generated id; the price is carried verbatim as a
/// string, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    team: String,
    image_url: String,
    name: String,
    price: String,
}

impl Product {
    pub fn new(
        team: impl Into<String>,
        image_url: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            team: team.into(),
            image_url: image_url.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

impl StorageEntity for Product {
    type Key = ProductId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

/// Opaque cart item identifier, generated at add time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItemId(String);

impl CartItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CartItemId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row per add-to-cart action; duplicate adds accumulate as separate rows
/// with no quantity merging. Deleted individually by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    id: CartItemId,
    username: String,
    team: String,
    image_url: String,
    name: String,
    price: String,
}

impl CartItem {
    pub fn new(
        username: impl Into<String>,
        team: impl Into<String>,
        image_url: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: CartItemId::generate(),
            username: username.into(),
            team: team.into(),
            image_url: image_url.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn id(&self) -> &CartItemId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

impl StorageEntity for CartItem {
    type Key = CartItemId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ids_are_unique() {
        let a = Product::new("CSK", "a.jpg", "Jersey", "999");
        let b = Product::new("CSK", "a.jpg", "Jersey", "999");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_product_price_kept_verbatim() {
        let product = Product::new("MI", "cap.jpg", "Cap", "  499.00 ");
        assert_eq!(product.price(), "  499.00 ");
    }

    #[test]
    fn test_cart_item_roundtrip() {
        let item = CartItem::new("alice", "KKR", "mug.jpg", "Mug", "299");
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();

        assert_eq!(back, item);
        assert_eq!(back.key(), item.id());
    }
}
