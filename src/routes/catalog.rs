use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::catalog::{
        CollectionList, CreateCollectionRequest, CreateVarietyRequest, UpdateCollectionRequest,
        UpdateVarietyRequest, VarietyList,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Collection, Variety},
    response::ApiResponse,
    routes::params::Pagination,
    services::catalog_service,
    state::AppState,
};

pub fn varieties_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_varieties))
        .route("/", post(create_variety))
        .route("/{id}", get(get_variety))
        .route("/{id}", put(update_variety))
        .route("/{id}", delete(delete_variety))
}

pub fn collections_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_collections))
        .route("/", post(create_collection))
        .route("/{id}", get(get_collection))
        .route("/{id}", put(update_collection))
        .route("/{id}", delete(delete_collection))
}

#[utoipa::path(
    get,
    path = "/api/varieties",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List date varieties", body = ApiResponse<VarietyList>)
    ),
    tag = "Catalog"
)]
pub async fn list_varieties(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<VarietyList>>> {
    let resp = catalog_service::list_varieties(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/varieties/{id}",
    params(
        ("id" = Uuid, Path, description = "Variety ID")
    ),
    responses(
        (status = 200, description = "Get variety", body = ApiResponse<Variety>),
        (status = 404, description = "Variety not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_variety(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Variety>>> {
    let resp = catalog_service::get_variety(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/varieties",
    request_body = CreateVarietyRequest,
    responses(
        (status = 200, description = "Create variety", body = ApiResponse<Variety>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_variety(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateVarietyRequest>,
) -> AppResult<Json<ApiResponse<Variety>>> {
    let resp = catalog_service::create_variety(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/varieties/{id}",
    params(
        ("id" = Uuid, Path, description = "Variety ID")
    ),
    request_body = UpdateVarietyRequest,
    responses(
        (status = 200, description = "Updated variety", body = ApiResponse<Variety>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Variety not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_variety(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVarietyRequest>,
) -> AppResult<Json<ApiResponse<Variety>>> {
    let resp = catalog_service::update_variety(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/varieties/{id}",
    params(
        ("id" = Uuid, Path, description = "Variety ID")
    ),
    responses(
        (status = 200, description = "Deleted variety", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Variety not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_variety(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_variety(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List collections", body = ApiResponse<CollectionList>)
    ),
    tag = "Catalog"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CollectionList>>> {
    let resp = catalog_service::list_collections(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Get collection", body = ApiResponse<Collection>),
        (status = 404, description = "Collection not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = catalog_service::get_collection(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Create collection", body = ApiResponse<Collection>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCollectionRequest>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = catalog_service::create_collection(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Updated collection", body = ApiResponse<Collection>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Collection not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCollectionRequest>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = catalog_service::update_collection(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Deleted collection", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Collection not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = catalog_service::delete_collection(&state, &user, id).await?;
    Ok(Json(resp))
}
