use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Prefix under which the upload handler stores product images.
pub const PRODUCT_UPLOADS_PREFIX: &str = "/uploads/products/";

pub fn product_image_url(stored_filename: &str) -> String {
    format!("{PRODUCT_UPLOADS_PREFIX}{stored_filename}")
}

#[derive(Debug, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub is_active: bool,
    pub in_carousel: bool,
    pub is_new: bool,
    pub variety_id: Option<Uuid>,
    pub collection_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Variety {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub origin: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Collection {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Faq {
    pub id: Uuid,
    pub question_en: String,
    pub question_ar: String,
    pub answer_en: String,
    pub answer_ar: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Section {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub body_en: Option<String>,
    pub body_ar: Option<String>,
    pub image: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::product_image_url;

    #[test]
    fn image_url_prepends_uploads_prefix() {
        assert_eq!(
            product_image_url("sukkari-box.jpg"),
            "/uploads/products/sukkari-box.jpg"
        );
    }
}
