//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: static header token check for write routes
//! - **[`server`]**: router assembly, health/readiness, graceful shutdown
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: numeric id path parameter, validated JSON body
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, config.request_timeout)?
//!     .merge(health_router(app_info!()));
//! create_app(router, &config).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

pub use auth::{TOKEN_HEADER, StaticToken, require_token};
pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use server::{
    ShutdownCoordinator, create_app, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
