use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Product, product_image_url},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::TitleEn).ilike(pattern.clone()))
                .add(Expr::col(Column::TitleAr).ilike(pattern.clone()))
                .add(Expr::col(Column::DescriptionEn).ilike(pattern.clone()))
                .add(Expr::col(Column::DescriptionAr).ilike(pattern)),
        );
    }

    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }

    if let Some(variety_id) = query.variety_id {
        condition = condition.add(Column::VarietyId.eq(variety_id));
    }

    if let Some(collection_id) = query.collection_id {
        condition = condition.add(Column::CollectionId.eq(collection_id));
    }

    if let Some(active) = query.active {
        condition = condition.add(Column::IsActive.eq(active));
    }

    if let Some(in_carousel) = query.in_carousel {
        condition = condition.add(Column::InCarousel.eq(in_carousel));
    }

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::CreatedAt);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let sort_col = match sort_by {
        ProductSortBy::CreatedAt => Column::CreatedAt,
        ProductSortBy::Price => Column::Price,
        ProductSortBy::Title => Column::TitleEn,
    };

    let mut finder = Products::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let result = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    if payload.price < 0 || payload.stock < 0 {
        return Err(AppError::BadRequest(
            "price and stock must not be negative".into(),
        ));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        title_en: Set(payload.title_en),
        title_ar: Set(payload.title_ar),
        description_en: Set(payload.description_en),
        description_ar: Set(payload.description_ar),
        image: Set(payload.image),
        price: Set(payload.price),
        stock: Set(payload.stock),
        is_active: Set(payload.is_active.unwrap_or(true)),
        in_carousel: Set(payload.in_carousel.unwrap_or(false)),
        is_new: Set(payload.is_new.unwrap_or(false)),
        variety_id: Set(payload.variety_id),
        collection_id: Set(payload.collection_id),
        created_at: NotSet,
    };
    let product = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(title_en) = payload.title_en {
        active.title_en = Set(title_en);
    }
    if let Some(title_ar) = payload.title_ar {
        active.title_ar = Set(title_ar);
    }
    if let Some(description_en) = payload.description_en {
        active.description_en = Set(Some(description_en));
    }
    if let Some(description_ar) = payload.description_ar {
        active.description_ar = Set(Some(description_ar));
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::BadRequest("price must not be negative".into()));
        }
        active.price = Set(price);
    }
    if let Some(stock) = payload.stock {
        if stock < 0 {
            return Err(AppError::BadRequest("stock must not be negative".into()));
        }
        active.stock = Set(stock);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(in_carousel) = payload.in_carousel {
        active.in_carousel = Set(in_carousel);
    }
    if let Some(is_new) = payload.is_new {
        active.is_new = Set(is_new);
    }
    if let Some(variety_id) = payload.variety_id {
        active.variety_id = Set(Some(variety_id));
    }
    if let Some(collection_id) = payload.collection_id {
        active.collection_id = Set(Some(collection_id));
    }

    let product = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn product_from_entity(model: ProductModel) -> Product {
    let image_url = model.image.as_deref().map(product_image_url);
    Product {
        id: model.id,
        title_en: model.title_en,
        title_ar: model.title_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        image: model.image,
        image_url,
        price: model.price,
        stock: model.stock,
        is_active: model.is_active,
        in_carousel: model.in_carousel,
        is_new: model.is_new,
        variety_id: model.variety_id,
        collection_id: model.collection_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
