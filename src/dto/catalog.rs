use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Collection, Variety};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVarietyRequest {
    pub name_en: String,
    pub name_ar: String,
    pub origin: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVarietyRequest {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub origin: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VarietyList {
    pub items: Vec<Variety>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub title_en: String,
    pub title_ar: String,
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub position: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct CollectionList {
    pub items: Vec<Collection>,
}
