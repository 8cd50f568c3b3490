use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::content::{
        ContactMessageList, ContactRequest, CreateFaqRequest, CreateSectionRequest, FaqList,
        SectionList, UpdateFaqRequest, UpdateSectionRequest,
    },
    entity::{
        contact_messages::{
            ActiveModel as ContactActive, Column as ContactCol, Entity as ContactMessages,
            Model as ContactModel,
        },
        faqs::{ActiveModel as FaqActive, Column as FaqCol, Entity as Faqs, Model as FaqModel},
        sections::{
            ActiveModel as SectionActive, Column as SectionCol, Entity as Sections,
            Model as SectionModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{ContactMessage, Faq, Section},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_faqs(state: &AppState) -> AppResult<ApiResponse<FaqList>> {
    let items = Faqs::find()
        .order_by_asc(FaqCol::Position)
        .order_by_asc(FaqCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(faq_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "FAQs",
        FaqList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_faq(
    state: &AppState,
    user: &AuthUser,
    payload: CreateFaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    let faq = FaqActive {
        id: Set(Uuid::new_v4()),
        question_en: Set(payload.question_en),
        question_ar: Set(payload.question_ar),
        answer_en: Set(payload.answer_en),
        answer_ar: Set(payload.answer_ar),
        position: Set(payload.position.unwrap_or(0)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "FAQ created",
        faq_from_entity(faq),
        Some(Meta::empty()),
    ))
}

pub async fn update_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateFaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    let existing = Faqs::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(f) => f,
        None => return Err(AppError::NotFound),
    };

    let mut active: FaqActive = existing.into();
    if let Some(question_en) = payload.question_en {
        active.question_en = Set(question_en);
    }
    if let Some(question_ar) = payload.question_ar {
        active.question_ar = Set(question_ar);
    }
    if let Some(answer_en) = payload.answer_en {
        active.answer_en = Set(answer_en);
    }
    if let Some(answer_ar) = payload.answer_ar {
        active.answer_ar = Set(answer_ar);
    }
    if let Some(position) = payload.position {
        active.position = Set(position);
    }

    let faq = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        faq_from_entity(faq),
        Some(Meta::empty()),
    ))
}

pub async fn delete_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Faqs::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_sections(state: &AppState) -> AppResult<ApiResponse<SectionList>> {
    let items = Sections::find()
        .order_by_asc(SectionCol::Position)
        .order_by_asc(SectionCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(section_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Sections",
        SectionList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_section(
    state: &AppState,
    user: &AuthUser,
    payload: CreateSectionRequest,
) -> AppResult<ApiResponse<Section>> {
    ensure_admin(user)?;
    let section = SectionActive {
        id: Set(Uuid::new_v4()),
        title_en: Set(payload.title_en),
        title_ar: Set(payload.title_ar),
        body_en: Set(payload.body_en),
        body_ar: Set(payload.body_ar),
        image: Set(payload.image),
        position: Set(payload.position.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Section created",
        section_from_entity(section),
        Some(Meta::empty()),
    ))
}

pub async fn update_section(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateSectionRequest,
) -> AppResult<ApiResponse<Section>> {
    ensure_admin(user)?;
    let existing = Sections::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: SectionActive = existing.into();
    if let Some(title_en) = payload.title_en {
        active.title_en = Set(title_en);
    }
    if let Some(title_ar) = payload.title_ar {
        active.title_ar = Set(title_ar);
    }
    if let Some(body_en) = payload.body_en {
        active.body_en = Set(Some(body_en));
    }
    if let Some(body_ar) = payload.body_ar {
        active.body_ar = Set(Some(body_ar));
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(position) = payload.position {
        active.position = Set(position);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }

    let section = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        section_from_entity(section),
        Some(Meta::empty()),
    ))
}

pub async fn delete_section(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Sections::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn submit_contact(
    state: &AppState,
    payload: ContactRequest,
) -> AppResult<ApiResponse<ContactMessage>> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "name, email and message are required".into(),
        ));
    }

    let message = ContactActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        message: Set(payload.message),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Message received",
        contact_from_entity(message),
        Some(Meta::empty()),
    ))
}

pub async fn list_contact_messages(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<ContactMessageList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = ContactMessages::find().order_by_desc(ContactCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(contact_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Messages",
        ContactMessageList { items },
        Some(meta),
    ))
}

pub async fn delete_contact_message(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = ContactMessages::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn faq_from_entity(model: FaqModel) -> Faq {
    Faq {
        id: model.id,
        question_en: model.question_en,
        question_ar: model.question_ar,
        answer_en: model.answer_en,
        answer_ar: model.answer_ar,
        position: model.position,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn section_from_entity(model: SectionModel) -> Section {
    Section {
        id: model.id,
        title_en: model.title_en,
        title_ar: model.title_ar,
        body_en: model.body_en,
        body_ar: model.body_ar,
        image: model.image,
        position: model.position,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn contact_from_entity(model: ContactModel) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        message: model.message,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
