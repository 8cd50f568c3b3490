use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ContactMessage, Faq, Section};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFaqRequest {
    pub question_en: String,
    pub question_ar: String,
    pub answer_en: String,
    pub answer_ar: String,
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFaqRequest {
    pub question_en: Option<String>,
    pub question_ar: Option<String>,
    pub answer_en: Option<String>,
    pub answer_ar: Option<String>,
    pub position: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct FaqList {
    pub items: Vec<Faq>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSectionRequest {
    pub title_en: String,
    pub title_ar: String,
    pub body_en: Option<String>,
    pub body_ar: Option<String>,
    pub image: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSectionRequest {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub body_en: Option<String>,
    pub body_ar: Option<String>,
    pub image: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct SectionList {
    pub items: Vec<Section>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactMessageList {
    pub items: Vec<ContactMessage>,
}
