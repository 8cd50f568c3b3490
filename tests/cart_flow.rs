use dates_shop_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::cart::{AddItemRequest, CartItemRef, SyncCartRequest, UpdateItemRequest},
    entity::{customers::ActiveModel as CustomerActive, products::ActiveModel as ProductActive},
    error::AppError,
    middleware::auth::AuthUser,
    services::cart_service,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

// Cart reconciliation flows against a real database. Each test seeds its own
// customer and products, so the suite is safe to run in parallel.
//
// Set TEST_DATABASE_URL or DATABASE_URL to run; the tests skip otherwise.
async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run cart flow tests."
            );
            return Ok(None);
        }
    };

    let pool = create_pool(&database_url).await?;
    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    Ok(Some(AppState { pool, orm }))
}

async fn seed_customer(state: &AppState) -> anyhow::Result<AuthUser> {
    let email = format!("{}@cart-tests.example", Uuid::new_v4());
    CustomerActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.clone()),
        password_hash: Set("dummy".into()),
        role: Set("customer".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        email,
        role: "customer".into(),
    })
}

async fn seed_product(state: &AppState, stock: i32) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    ProductActive {
        id: Set(id),
        title_en: Set(format!("Test Dates {id}")),
        title_ar: Set("تمر تجريبي".into()),
        description_en: Set(Some("A box of dates for testing".into())),
        description_ar: Set(None),
        image: Set(Some("test-box.jpg".into())),
        price: Set(4500),
        stock: Set(stock),
        is_active: Set(true),
        in_carousel: Set(false),
        is_new: Set(false),
        variety_id: Set(None),
        collection_id: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(id)
}

#[tokio::test]
async fn add_then_get_cart_round_trip() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 10).await?;

    let resp = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(3),
        },
    )
    .await?;

    let snapshot = resp.data.unwrap();
    assert!(snapshot.id.is_some());
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].product.id, product_id);
    assert_eq!(snapshot.items[0].quantity, 3);
    assert_eq!(
        snapshot.items[0].product.image_url.as_deref(),
        Some("/uploads/products/test-box.jpg")
    );

    let fetched = cart_service::get_cart(&state, &user).await?.data.unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].product.id, product_id);
    assert_eq!(fetched.items[0].quantity, 3);

    let items = cart_service::line_items(&state, &user).await?.data.unwrap();
    assert_eq!(items.items.len(), 1);
    assert_eq!(items.items[0].product_id, product_id);
    assert_eq!(items.items[0].quantity, 3);

    Ok(())
}

#[tokio::test]
async fn add_uses_default_quantity_of_one() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 2).await?;

    let snapshot = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: None,
        },
    )
    .await?
    .data
    .unwrap();

    assert_eq!(snapshot.items[0].quantity, 1);
    Ok(())
}

#[tokio::test]
async fn add_allows_exactly_the_available_stock() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 5).await?;

    let snapshot = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(5),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(snapshot.items[0].quantity, 5);

    let err = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock(_)));

    Ok(())
}

#[tokio::test]
async fn add_beyond_stock_leaves_cart_unchanged() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 5).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(3),
        },
    )
    .await?;

    // 3 already held + 3 requested exceeds the 5 in stock.
    let err = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(3),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock(_)));

    let snapshot = cart_service::get_cart(&state, &user).await?.data.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].quantity, 3);

    Ok(())
}

#[tokio::test]
async fn add_unknown_product_is_not_found() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;

    let err = cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id: Uuid::new_v4(),
            quantity: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn update_to_zero_removes_the_line() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 10).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(2),
        },
    )
    .await?;

    let snapshot = cart_service::update_item(
        &state,
        &user,
        UpdateItemRequest {
            product_id,
            quantity: 0,
        },
    )
    .await?
    .data
    .unwrap();

    assert!(snapshot.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_missing_line_is_not_found() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let in_cart = seed_product(&state, 10).await?;
    let not_in_cart = seed_product(&state, 10).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id: in_cart,
            quantity: Some(1),
        },
    )
    .await?;

    let err = cart_service::update_item(
        &state,
        &user,
        UpdateItemRequest {
            product_id: not_in_cart,
            quantity: 2,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn update_beyond_stock_is_rejected() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let product_id = seed_product(&state, 4).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id,
            quantity: Some(2),
        },
    )
    .await?;

    let err = cart_service::update_item(
        &state,
        &user,
        UpdateItemRequest {
            product_id,
            quantity: 5,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock(_)));

    let snapshot = cart_service::get_cart(&state, &user).await?.data.unwrap();
    assert_eq!(snapshot.items[0].quantity, 2);

    Ok(())
}

#[tokio::test]
async fn remove_missing_item_is_a_noop() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let in_cart = seed_product(&state, 10).await?;
    let never_added = seed_product(&state, 10).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id: in_cart,
            quantity: Some(1),
        },
    )
    .await?;

    let snapshot = cart_service::remove_item(&state, &user, never_added)
        .await?
        .data
        .unwrap();

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].product.id, in_cart);

    Ok(())
}

#[tokio::test]
async fn clear_without_a_cart_is_a_noop() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;

    let resp = cart_service::clear_cart(&state, &user).await?;
    assert_eq!(resp.message, "Cart cleared");

    let snapshot = cart_service::get_cart(&state, &user).await?.data.unwrap();
    assert!(snapshot.id.is_none());
    assert!(snapshot.items.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_cart_without_a_cart_returns_the_empty_representation() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;

    let snapshot = cart_service::get_cart(&state, &user).await?.data.unwrap();
    assert!(snapshot.id.is_none());
    assert!(snapshot.created_at.is_none());
    assert!(snapshot.items.is_empty());

    Ok(())
}

#[tokio::test]
async fn sync_replaces_the_server_cart_wholesale() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user = seed_customer(&state).await?;
    let existing = seed_product(&state, 10).await?;
    let local = seed_product(&state, 10).await?;

    cart_service::add_item(
        &state,
        &user,
        AddItemRequest {
            product_id: existing,
            quantity: Some(1),
        },
    )
    .await?;

    // The pre-existing server line is discarded, not merged.
    let snapshot = cart_service::sync_local_cart(
        &state,
        &user,
        SyncCartRequest {
            cart_items: vec![CartItemRef {
                product_id: local,
                quantity: 2,
            }],
        },
    )
    .await?
    .data
    .unwrap();

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].product.id, local);
    assert_eq!(snapshot.items[0].quantity, 2);

    Ok(())
}

#[tokio::test]
async fn unresolvable_identity_is_unauthorized() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let ghost = AuthUser {
        email: format!("{}@cart-tests.example", Uuid::new_v4()),
        role: "customer".into(),
    };

    let err = cart_service::get_cart(&state, &ghost).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    Ok(())
}
