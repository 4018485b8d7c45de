//! HTTP handlers for products and warehouses.
//!
//! Reads are public. Writes go through [`axum_helpers::require_token`].

pub mod products;
pub mod warehouses;

use utoipa::OpenApi;

/// OpenAPI documentation for the inventory API, paths relative to the
/// mount point of the two routers.
#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/products", api = products::ProductsApi),
        (path = "/warehouses", api = warehouses::WarehousesApi)
    )
)]
pub struct ApiDoc;
