use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub product_id: Uuid,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartItemRef {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SyncCartRequest {
    pub cart_items: Vec<CartItemRef>,
}

/// Denormalized product projection embedded in a cart snapshot.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartProductDto {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image_url: Option<String>,
    pub price: i64,
    pub is_active: bool,
    pub in_carousel: bool,
    pub is_new: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineDto {
    pub product: CartProductDto,
    pub quantity: i32,
}

/// Presentation-ready view of a customer's cart. A customer without a cart
/// gets the empty representation rather than an error.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartSnapshot {
    pub id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
    pub items: Vec<CartLineDto>,
}

impl CartSnapshot {
    pub fn empty() -> Self {
        Self {
            id: None,
            created_at: None,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemsList {
    pub items: Vec<CartItemRef>,
}
