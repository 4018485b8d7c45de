use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::expiration;
use crate::models::{
    CreateProduct, CreateWarehouse, Product, ProductFull, ReportProducts, Warehouse,
};

/// Repository trait for Product persistence
///
/// Every failure is reported as a [`StoreError`] kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the expiration is normalized first
    async fn create(&self, input: CreateProduct) -> StoreResult<Product>;

    async fn get_by_id(&self, id: i32) -> StoreResult<Product>;

    /// Every product, in store order
    async fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// Overwrite the whole row keyed by `id`
    async fn update(&self, id: i32, product: Product) -> StoreResult<Product>;

    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Product joined with its warehouse
    async fn get_full_data(&self, id: i32) -> StoreResult<ProductFull>;
}

/// Repository trait for Warehouse persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn create(&self, input: CreateWarehouse) -> StoreResult<Warehouse>;

    async fn get_by_id(&self, id: i32) -> StoreResult<Warehouse>;

    async fn get_all(&self) -> StoreResult<Vec<Warehouse>>;

    /// Warehouse name with the number of products it holds
    async fn report_products(&self, id: i32) -> StoreResult<ReportProducts>;
}

#[derive(Debug, Default)]
struct Tables {
    products: BTreeMap<i32, Product>,
    warehouses: BTreeMap<i32, Warehouse>,
    last_product_id: i32,
    last_warehouse_id: i32,
}

impl Tables {
    fn check_product(&self, product: &Product) -> StoreResult<()> {
        if self
            .products
            .values()
            .any(|p| p.id != product.id && p.code_value == product.code_value)
        {
            return Err(StoreError::AlreadyExists);
        }
        if !self.warehouses.contains_key(&product.warehouse_id) {
            tracing::warn!(warehouse_id = product.warehouse_id, "Unknown warehouse");
            return Err(StoreError::Internal);
        }
        Ok(())
    }
}

/// In-memory implementation of both repositories (for development/testing).
///
/// Clones share the same tables, so one instance can back both services.
/// Enforces the `code_value` uniqueness and the warehouse reference.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInventory {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryInventory {
    async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        let expiration = expiration::normalize(&input.expiration)?;
        let mut tables = self.tables.write().await;

        let mut product = input.into_product(tables.last_product_id + 1);
        product.expiration = expiration;
        tables.check_product(&product)?;

        tables.last_product_id = product.id;
        tables.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        let tables = self.tables.read().await;
        tables.products.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.values().cloned().collect())
    }

    async fn update(&self, id: i32, mut product: Product) -> StoreResult<Product> {
        product.expiration = expiration::normalize(&product.expiration)?;
        product.id = id;

        let mut tables = self.tables.write().await;
        if !tables.products.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.check_product(&product)?;
        tables.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        if tables.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    async fn get_full_data(&self, id: i32) -> StoreResult<ProductFull> {
        let tables = self.tables.read().await;
        let product = tables.products.get(&id).ok_or(StoreError::NotFound)?;
        let warehouse = tables
            .warehouses
            .get(&product.warehouse_id)
            .ok_or(StoreError::NotFound)?;

        Ok(ProductFull {
            product: product.clone(),
            warehouse_name: warehouse.name.clone(),
            warehouse_address: warehouse.address.clone(),
        })
    }
}

#[async_trait]
impl WarehouseRepository for InMemoryInventory {
    async fn create(&self, input: CreateWarehouse) -> StoreResult<Warehouse> {
        let mut tables = self.tables.write().await;

        let warehouse = input.into_warehouse(tables.last_warehouse_id + 1);
        tables.last_warehouse_id = warehouse.id;
        tables.warehouses.insert(warehouse.id, warehouse.clone());

        tracing::info!(warehouse_id = warehouse.id, "Created warehouse");
        Ok(warehouse)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Warehouse> {
        let tables = self.tables.read().await;
        tables.warehouses.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<Warehouse>> {
        let tables = self.tables.read().await;
        Ok(tables.warehouses.values().cloned().collect())
    }

    async fn report_products(&self, id: i32) -> StoreResult<ReportProducts> {
        let tables = self.tables.read().await;
        let warehouse = tables.warehouses.get(&id).ok_or(StoreError::NotFound)?;
        let count = tables
            .products
            .values()
            .filter(|p| p.warehouse_id == id)
            .count();

        Ok(ReportProducts {
            warehouse_name: warehouse.name.clone(),
            product_count: count.to_string(),
        })
    }
}
