//! SeaORM entities for the `products` and `warehouses` tables.

pub mod product;
pub mod warehouse;
