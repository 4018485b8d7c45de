//! Inventory Domain
//!
//! Products stored in warehouses, persisted in MySQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, token check on writes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Partial-update merge policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + MySQL / in-memory implementations),
//! └──────┬──────┘    driver failures classified into `StoreError`
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Warehouse, projections, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     repository::InMemoryInventory,
//!     service::{ProductService, WarehouseService},
//! };
//!
//! let store = InMemoryInventory::new();
//! let products = ProductService::new(store.clone());
//! let warehouses = WarehouseService::new(store);
//!
//! let router = axum::Router::new()
//!     .nest("/products", handlers::products::router(products, "s3cret"))
//!     .nest("/warehouses", handlers::warehouses::router(warehouses, "s3cret"));
//! ```

pub mod entity;
pub mod error;
pub mod expiration;
pub mod handlers;
pub mod models;
pub mod mysql;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, CreateWarehouse, Product, ProductFull, ReportProducts, UpdateProduct,
    Warehouse,
};
pub use mysql::{MySqlProductRepository, MySqlWarehouseRepository};
pub use repository::{InMemoryInventory, ProductRepository, WarehouseRepository};
pub use service::{ProductService, WarehouseService};
