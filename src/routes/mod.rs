use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod content;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/cart", cart::router())
        .nest("/products", products::router())
        .nest("/varieties", catalog::varieties_router())
        .nest("/collections", catalog::collections_router())
        .nest("/faqs", content::faqs_router())
        .nest("/sections", content::sections_router())
        .nest("/contact", content::contact_router())
}
