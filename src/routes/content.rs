use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::content::{
        ContactMessageList, ContactRequest, CreateFaqRequest, CreateSectionRequest, FaqList,
        SectionList, UpdateFaqRequest, UpdateSectionRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{ContactMessage, Faq, Section},
    response::ApiResponse,
    routes::params::Pagination,
    services::content_service,
    state::AppState,
};

pub fn faqs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_faqs))
        .route("/", post(create_faq))
        .route("/{id}", put(update_faq))
        .route("/{id}", delete(delete_faq))
}

pub fn sections_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sections))
        .route("/", post(create_section))
        .route("/{id}", put(update_section))
        .route("/{id}", delete(delete_section))
}

pub fn contact_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_contact))
        .route("/", get(list_contact_messages))
        .route("/{id}", delete(delete_contact_message))
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    responses(
        (status = 200, description = "List FAQs in display order", body = ApiResponse<FaqList>)
    ),
    tag = "Content"
)]
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<ApiResponse<FaqList>>> {
    let resp = content_service::list_faqs(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/faqs",
    request_body = CreateFaqRequest,
    responses(
        (status = 200, description = "Create FAQ", body = ApiResponse<Faq>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn create_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFaqRequest>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = content_service::create_faq(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "Updated FAQ", body = ApiResponse<Faq>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "FAQ not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn update_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFaqRequest>,
) -> AppResult<Json<ApiResponse<Faq>>> {
    let resp = content_service::update_faq(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    params(
        ("id" = Uuid, Path, description = "FAQ ID")
    ),
    responses(
        (status = 200, description = "Deleted FAQ", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "FAQ not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_faq(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/sections",
    responses(
        (status = 200, description = "List storefront sections in display order", body = ApiResponse<SectionList>)
    ),
    tag = "Content"
)]
pub async fn list_sections(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SectionList>>> {
    let resp = content_service::list_sections(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/sections",
    request_body = CreateSectionRequest,
    responses(
        (status = 200, description = "Create section", body = ApiResponse<Section>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn create_section(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateSectionRequest>,
) -> AppResult<Json<ApiResponse<Section>>> {
    let resp = content_service::create_section(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/sections/{id}",
    params(
        ("id" = Uuid, Path, description = "Section ID")
    ),
    request_body = UpdateSectionRequest,
    responses(
        (status = 200, description = "Updated section", body = ApiResponse<Section>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Section not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn update_section(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSectionRequest>,
) -> AppResult<Json<ApiResponse<Section>>> {
    let resp = content_service::update_section(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/sections/{id}",
    params(
        ("id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Deleted section", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Section not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_section(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message received", body = ApiResponse<ContactMessage>),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Content"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ApiResponse<ContactMessage>>> {
    let resp = content_service::submit_contact(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List contact messages, newest first", body = ApiResponse<ContactMessageList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn list_contact_messages(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ContactMessageList>>> {
    let resp = content_service::list_contact_messages(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Deleted message", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Message not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Content"
)]
pub async fn delete_contact_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = content_service::delete_contact_message(&state, &user, id).await?;
    Ok(Json(resp))
}
