//! MySQL connector and utilities
//!
//! Provides connection management, migration running, health checks and
//! server error-number extraction.

mod config;
mod connector;
mod error_number;
mod health;

pub use config::MySqlConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use error_number::server_error_number;
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
