use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::cart::{
        AddItemRequest, CartItemRef, CartItemsList, CartLineDto, CartProductDto, CartSnapshot,
        SyncCartRequest, UpdateItemRequest,
    },
    entity::{
        cart_items::{ActiveModel as CartItemActive, Column as CartItemCol, Entity as CartItems},
        carts::{self, ActiveModel as CartActive, Column as CartCol, Entity as Carts},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::product_image_url,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(FromRow)]
struct LineWithProductRow {
    product_id: Uuid,
    quantity: i32,
    title_en: String,
    title_ar: String,
    description_en: Option<String>,
    description_ar: Option<String>,
    image: Option<String>,
    price: i64,
    is_active: bool,
    in_carousel: bool,
    is_new: bool,
}

/// Resolve a bearer identity to a customer row. A stale token for a deleted
/// account answers 401 here rather than surfacing as a foreign-key error.
pub async fn customer_id_by_email(pool: &DbPool, email: &str) -> AppResult<Uuid> {
    let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM customers WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    row.map(|(id,)| id).ok_or(AppError::Unauthorized)
}

pub async fn get_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartSnapshot>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;
    let snapshot = load_snapshot(&state.pool, customer_id).await?;
    Ok(ApiResponse::success("OK", snapshot, Some(Meta::empty())))
}

pub async fn line_items(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartItemsList>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;
    let rows: Vec<(Uuid, i32)> = sqlx::query_as(
        r#"
        SELECT ci.product_id, ci.quantity
        FROM cart_items ci
        JOIN carts c ON c.id = ci.cart_id
        WHERE c.customer_id = $1
        ORDER BY ci.created_at ASC
        "#,
    )
    .bind(customer_id)
    .fetch_all(&state.pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|(product_id, quantity)| CartItemRef {
            product_id,
            quantity,
        })
        .collect();

    Ok(ApiResponse::success(
        "OK",
        CartItemsList { items },
        Some(Meta::empty()),
    ))
}

pub async fn add_item(
    state: &AppState,
    user: &AuthUser,
    payload: AddItemRequest,
) -> AppResult<ApiResponse<CartSnapshot>> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;

    let txn = state.orm.begin().await?;

    // The product row lock serializes concurrent mutations of the same
    // cart/product pair; the stock check and the line write commit together.
    let product = Products::find_by_id(payload.product_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let cart = find_or_create_cart(&txn, customer_id).await?;

    let existing = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .filter(CartItemCol::ProductId.eq(payload.product_id))
        .one(&txn)
        .await?;

    let current = existing.as_ref().map(|item| item.quantity).unwrap_or(0);
    let new_total = current + quantity;
    if new_total > product.stock {
        return Err(AppError::InsufficientStock(format!(
            "requested {} of product {}, {} in stock",
            new_total, product.id, product.stock
        )));
    }

    match existing {
        Some(item) => {
            let mut active: CartItemActive = item.into();
            active.quantity = Set(new_total);
            active.update(&txn).await?;
        }
        None => {
            CartItemActive {
                id: Set(Uuid::new_v4()),
                cart_id: Set(cart.id),
                product_id: Set(payload.product_id),
                quantity: Set(new_total),
                created_at: NotSet,
            }
            .insert(&txn)
            .await?;
        }
    }

    touch_cart(&txn, cart).await?;
    txn.commit().await?;

    let snapshot = load_snapshot(&state.pool, customer_id).await?;
    Ok(ApiResponse::success(
        "Added to cart",
        snapshot,
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateItemRequest,
) -> AppResult<ApiResponse<CartSnapshot>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;

    let txn = state.orm.begin().await?;

    let cart = Carts::find()
        .filter(CartCol::CustomerId.eq(customer_id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let item = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .filter(CartItemCol::ProductId.eq(payload.product_id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    if payload.quantity <= 0 {
        // Zero or below is a removal, not an error.
        CartItems::delete_by_id(item.id).exec(&txn).await?;
    } else {
        let product = Products::find_by_id(payload.product_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        if payload.quantity > product.stock {
            return Err(AppError::InsufficientStock(format!(
                "requested {} of product {}, {} in stock",
                payload.quantity, product.id, product.stock
            )));
        }

        let mut active: CartItemActive = item.into();
        active.quantity = Set(payload.quantity);
        active.update(&txn).await?;
    }

    touch_cart(&txn, cart).await?;
    txn.commit().await?;

    let snapshot = load_snapshot(&state.pool, customer_id).await?;
    Ok(ApiResponse::success(
        "Cart updated",
        snapshot,
        Some(Meta::empty()),
    ))
}

pub async fn remove_item(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
) -> AppResult<ApiResponse<CartSnapshot>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;

    let cart = Carts::find()
        .filter(CartCol::CustomerId.eq(customer_id))
        .one(&state.orm)
        .await?;

    // An absent cart or line is a no-op, not an error.
    if let Some(cart) = cart {
        let result = CartItems::delete_many()
            .filter(CartItemCol::CartId.eq(cart.id))
            .filter(CartItemCol::ProductId.eq(product_id))
            .exec(&state.orm)
            .await?;

        if result.rows_affected > 0 {
            touch_cart(&state.orm, cart).await?;
        }
    }

    let snapshot = load_snapshot(&state.pool, customer_id).await?;
    Ok(ApiResponse::success(
        "Removed from cart",
        snapshot,
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;

    if let Some(cart) = Carts::find()
        .filter(CartCol::CustomerId.eq(customer_id))
        .one(&state.orm)
        .await?
    {
        CartItems::delete_many()
            .filter(CartItemCol::CartId.eq(cart.id))
            .exec(&state.orm)
            .await?;
        touch_cart(&state.orm, cart).await?;
    }

    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Merge a pre-authentication, client-held cart into the server cart.
/// Local state wins wholesale: every existing server line is dropped and the
/// supplied list is written as-is, without a stock check. Last occurrence
/// wins for duplicate product ids; non-positive quantities are skipped.
pub async fn sync_local_cart(
    state: &AppState,
    user: &AuthUser,
    payload: SyncCartRequest,
) -> AppResult<ApiResponse<CartSnapshot>> {
    let customer_id = customer_id_by_email(&state.pool, &user.email).await?;

    let txn = state.orm.begin().await?;

    let cart = find_or_create_cart(&txn, customer_id).await?;

    CartItems::delete_many()
        .filter(CartItemCol::CartId.eq(cart.id))
        .exec(&txn)
        .await?;

    let mut lines: Vec<(Uuid, i32)> = Vec::new();
    for item in &payload.cart_items {
        if item.quantity <= 0 {
            continue;
        }
        match lines.iter_mut().find(|(id, _)| *id == item.product_id) {
            Some(line) => line.1 = item.quantity,
            None => lines.push((item.product_id, item.quantity)),
        }
    }

    for (product_id, quantity) in lines {
        CartItemActive {
            id: Set(Uuid::new_v4()),
            cart_id: Set(cart.id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;
    }

    touch_cart(&txn, cart).await?;
    txn.commit().await?;

    let snapshot = load_snapshot(&state.pool, customer_id).await?;
    Ok(ApiResponse::success(
        "Cart synced",
        snapshot,
        Some(Meta::empty()),
    ))
}

async fn find_or_create_cart<C: ConnectionTrait>(
    conn: &C,
    customer_id: Uuid,
) -> AppResult<carts::Model> {
    if let Some(cart) = Carts::find()
        .filter(CartCol::CustomerId.eq(customer_id))
        .one(conn)
        .await?
    {
        return Ok(cart);
    }

    let cart = CartActive {
        id: Set(Uuid::new_v4()),
        customer_id: Set(customer_id),
        is_active: Set(true),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(conn)
    .await?;

    Ok(cart)
}

async fn touch_cart<C: ConnectionTrait>(conn: &C, cart: carts::Model) -> AppResult<()> {
    let mut active: CartActive = cart.into();
    active.updated_at = Set(Utc::now().into());
    active.update(conn).await?;
    Ok(())
}

async fn load_snapshot(pool: &DbPool, customer_id: Uuid) -> AppResult<CartSnapshot> {
    let cart: Option<(Uuid, DateTime<Utc>)> =
        sqlx::query_as("SELECT id, created_at FROM carts WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_optional(pool)
            .await?;

    let Some((cart_id, created_at)) = cart else {
        return Ok(CartSnapshot::empty());
    };

    let rows = sqlx::query_as::<_, LineWithProductRow>(
        r#"
        SELECT ci.product_id, ci.quantity,
               p.title_en, p.title_ar, p.description_en, p.description_ar,
               p.image, p.price, p.is_active, p.in_carousel, p.is_new
        FROM cart_items ci
        JOIN products p ON p.id = ci.product_id
        WHERE ci.cart_id = $1
        ORDER BY ci.created_at ASC
        "#,
    )
    .bind(cart_id)
    .fetch_all(pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| CartLineDto {
            quantity: row.quantity,
            product: CartProductDto {
                id: row.product_id,
                title_en: row.title_en,
                title_ar: row.title_ar,
                description_en: row.description_en,
                description_ar: row.description_ar,
                image_url: row.image.as_deref().map(product_image_url),
                price: row.price,
                is_active: row.is_active,
                in_carousel: row.in_carousel,
                is_new: row.is_new,
            },
        })
        .collect();

    Ok(CartSnapshot {
        id: Some(cart_id),
        created_at: Some(created_at),
        items,
    })
}
