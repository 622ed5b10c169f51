//! Product listing and cart endpoints

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, MessageResponse};
use crate::domain::catalog::{CartItem, Product};
use crate::infrastructure::catalog::{NewCartItem, NewProduct};

/// POST /product_listing request body, using the original wire field names
#[derive(Debug, Clone, Deserialize)]
pub struct AddProductRequest {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "P_url")]
    pub image_url: String,
    #[serde(rename = "P_name")]
    pub name: String,
    #[serde(rename = "P_price")]
    pub price: String,
}

/// GET /product_listing query string
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListingQuery {
    #[serde(rename = "Team")]
    pub team: Option<String>,
}

/// Product document as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "P_url")]
    pub image_url: String,
    #[serde(rename = "P_name")]
    pub name: String,
    #[serde(rename = "P_price")]
    pub price: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            team: product.team().to_string(),
            image_url: product.image_url().to_string(),
            name: product.name().to_string(),
            price: product.price().to_string(),
        }
    }
}

/// POST /add_to_cart request body
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "P_url")]
    pub image_url: String,
    #[serde(rename = "P_name")]
    pub name: String,
    #[serde(rename = "P_price")]
    pub price: String,
}

/// GET /add_to_cart query string
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuery {
    #[serde(rename = "Username")]
    pub username: Option<String>,
}

/// DELETE /add_to_cart query string
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveFromCartQuery {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
}

/// Cart row as returned to clients; `productId` is the handle for DELETE
#[derive(Debug, Clone, Serialize)]
pub struct CartItemResponse {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "P_url")]
    pub image_url: String,
    #[serde(rename = "P_name")]
    pub name: String,
    #[serde(rename = "P_price")]
    pub price: String,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id().to_string(),
            username: item.username().to_string(),
            team: item.team().to_string(),
            image_url: item.image_url().to_string(),
            name: item.name().to_string(),
            price: item.price().to_string(),
        }
    }
}

/// POST /product_listing
pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<AddProductRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .catalog_service
        .add_product(NewProduct {
            team: request.team,
            image_url: request.image_url,
            name: request.name,
            price: request.price,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product saved successfully")),
    ))
}

/// GET /product_listing?Team=
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListingQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let team = query
        .team
        .ok_or_else(|| ApiError::bad_request("Team query parameter is required"))?;

    debug!(team = %team, "Listing products");

    let products = state.catalog_service.list_products(&team).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// POST /add_to_cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .catalog_service
        .add_to_cart(NewCartItem {
            username: request.username,
            team: request.team,
            image_url: request.image_url,
            name: request.name,
            price: request.price,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Item added to cart")),
    ))
}

/// GET /add_to_cart?Username=
pub async fn get_cart(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartItemResponse>>, ApiError> {
    let username = query
        .username
        .ok_or_else(|| ApiError::not_found("No cart items found for this user"))?;

    let items = state.catalog_service.cart(&username).await?;

    Ok(Json(items.iter().map(CartItemResponse::from).collect()))
}

/// DELETE /add_to_cart?productId=
///
/// Reports success even when nothing matched; a delete with zero matches is
/// indistinguishable from one match, as in the source system.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Query(query): Query<RemoveFromCartQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Some(product_id) = query.product_id {
        state.catalog_service.remove_from_cart(&product_id).await?;
    }

    Ok(Json(MessageResponse::new("Item removed from cart")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_product_request_wire_names() {
        let json = r#"{"Team":"CSK","P_url":"jersey.jpg","P_name":"Jersey","P_price":"999"}"#;

        let request: AddProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.team, "CSK");
        assert_eq!(request.image_url, "jersey.jpg");
        assert_eq!(request.name, "Jersey");
        assert_eq!(request.price, "999");
    }

    #[test]
    fn test_add_to_cart_request_wire_names() {
        let json = r#"{"Username":"alice","Team":"MI","P_url":"cap.jpg","P_name":"Cap","P_price":"499"}"#;

        let request: AddToCartRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.team, "MI");
    }

    #[test]
    fn test_product_response_wire_names() {
        let product = Product::new("CSK", "jersey.jpg", "Jersey", "999");
        let json = serde_json::to_string(&ProductResponse::from(&product)).unwrap();

        assert!(json.contains("\"Team\":\"CSK\""));
        assert!(json.contains("\"P_url\":\"jersey.jpg\""));
        assert!(json.contains("\"P_name\":\"Jersey\""));
        assert!(json.contains("\"P_price\":\"999\""));
    }

    #[test]
    fn test_cart_item_response_exposes_product_id() {
        let item = CartItem::new("alice", "KKR", "mug.jpg", "Mug", "299");
        let json = serde_json::to_string(&CartItemResponse::from(&item)).unwrap();

        assert!(json.contains(&format!("\"productId\":\"{}\"", item.id())));
        assert!(json.contains("\"Username\":\"alice\""));
    }
}
