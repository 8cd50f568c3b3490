use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::catalog::{
        CollectionList, CreateCollectionRequest, CreateVarietyRequest, UpdateCollectionRequest,
        UpdateVarietyRequest, VarietyList,
    },
    entity::{
        collections::{
            ActiveModel as CollectionActive, Column as CollectionCol, Entity as Collections,
            Model as CollectionModel,
        },
        varieties::{
            ActiveModel as VarietyActive, Column as VarietyCol, Entity as Varieties,
            Model as VarietyModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Collection, Variety},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_varieties(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<VarietyList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Varieties::find().order_by_asc(VarietyCol::NameEn);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(variety_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Varieties",
        VarietyList { items },
        Some(meta),
    ))
}

pub async fn get_variety(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Variety>> {
    let variety = Varieties::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(variety_from_entity);
    let variety = match variety {
        Some(v) => v,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Variety", variety, None))
}

pub async fn create_variety(
    state: &AppState,
    user: &AuthUser,
    payload: CreateVarietyRequest,
) -> AppResult<ApiResponse<Variety>> {
    ensure_admin(user)?;
    let variety = VarietyActive {
        id: Set(Uuid::new_v4()),
        name_en: Set(payload.name_en),
        name_ar: Set(payload.name_ar),
        origin: Set(payload.origin),
        description_en: Set(payload.description_en),
        description_ar: Set(payload.description_ar),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Variety created",
        variety_from_entity(variety),
        Some(Meta::empty()),
    ))
}

pub async fn update_variety(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateVarietyRequest,
) -> AppResult<ApiResponse<Variety>> {
    ensure_admin(user)?;
    let existing = Varieties::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(v) => v,
        None => return Err(AppError::NotFound),
    };

    let mut active: VarietyActive = existing.into();
    if let Some(name_en) = payload.name_en {
        active.name_en = Set(name_en);
    }
    if let Some(name_ar) = payload.name_ar {
        active.name_ar = Set(name_ar);
    }
    if let Some(origin) = payload.origin {
        active.origin = Set(Some(origin));
    }
    if let Some(description_en) = payload.description_en {
        active.description_en = Set(Some(description_en));
    }
    if let Some(description_ar) = payload.description_ar {
        active.description_ar = Set(Some(description_ar));
    }

    let variety = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        variety_from_entity(variety),
        Some(Meta::empty()),
    ))
}

pub async fn delete_variety(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Varieties::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_collections(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CollectionList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Collections::find()
        .order_by_asc(CollectionCol::Position)
        .order_by_asc(CollectionCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(collection_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Collections",
        CollectionList { items },
        Some(meta),
    ))
}

pub async fn get_collection(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Collection>> {
    let collection = Collections::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(collection_from_entity);
    let collection = match collection {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Collection", collection, None))
}

pub async fn create_collection(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCollectionRequest,
) -> AppResult<ApiResponse<Collection>> {
    ensure_admin(user)?;
    let collection = CollectionActive {
        id: Set(Uuid::new_v4()),
        title_en: Set(payload.title_en),
        title_ar: Set(payload.title_ar),
        position: Set(payload.position.unwrap_or(0)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Collection created",
        collection_from_entity(collection),
        Some(Meta::empty()),
    ))
}

pub async fn update_collection(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCollectionRequest,
) -> AppResult<ApiResponse<Collection>> {
    ensure_admin(user)?;
    let existing = Collections::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: CollectionActive = existing.into();
    if let Some(title_en) = payload.title_en {
        active.title_en = Set(title_en);
    }
    if let Some(title_ar) = payload.title_ar {
        active.title_ar = Set(title_ar);
    }
    if let Some(position) = payload.position {
        active.position = Set(position);
    }

    let collection = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        collection_from_entity(collection),
        Some(Meta::empty()),
    ))
}

pub async fn delete_collection(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Collections::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn variety_from_entity(model: VarietyModel) -> Variety {
    Variety {
        id: model.id,
        name_en: model.name_en,
        name_ar: model.name_ar,
        origin: model.origin,
        description_en: model.description_en,
        description_ar: model.description_ar,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn collection_from_entity(model: CollectionModel) -> Collection {
    Collection {
        id: model.id,
        title_en: model.title_en,
        title_ar: model.title_ar,
        position: model.position,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
