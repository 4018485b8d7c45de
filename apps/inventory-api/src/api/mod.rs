//! API routes module

pub mod health;

use axum::{Router, routing::get};
use domain_inventory::{
    MySqlProductRepository, MySqlWarehouseRepository, ProductService, WarehouseService,
    handlers,
};

use crate::state::AppState;

/// Routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    let products = ProductService::new(MySqlProductRepository::new(state.db.clone()));
    let warehouses = WarehouseService::new(MySqlWarehouseRepository::new(state.db.clone()));
    let token = state.config.api_token.as_str();

    Router::new()
        .route("/ping", get(ping))
        .nest("/products", handlers::products::router(products, token))
        .nest("/warehouses", handlers::warehouses::router(warehouses, token))
}

async fn ping() -> &'static str {
    "pong"
}
