use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::{
    CreateProduct, CreateWarehouse, Product, ProductFull, ReportProducts, UpdateProduct,
    Warehouse,
};
use crate::repository::{ProductRepository, WarehouseRepository};

/// Service layer for products
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        self.repository.create(input).await
    }

    pub async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Load the product, overlay the supplied fields of `update` and persist
    /// the merged value. See [`Product::apply_update`] for what counts as
    /// supplied.
    pub async fn update_product(&self, id: i32, update: UpdateProduct) -> StoreResult<Product> {
        let mut product = self.repository.get_by_id(id).await?;
        product.apply_update(update);
        self.repository.update(id, product).await
    }

    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        self.repository.delete(id).await
    }

    pub async fn get_full_data(&self, id: i32) -> StoreResult<ProductFull> {
        self.repository.get_full_data(id).await
    }
}

/// Service layer for warehouses
pub struct WarehouseService<R: WarehouseRepository> {
    repository: Arc<R>,
}

impl<R: WarehouseRepository> Clone for WarehouseService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: WarehouseRepository> WarehouseService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create(&self, input: CreateWarehouse) -> StoreResult<Warehouse> {
        self.repository.create(input).await
    }

    pub async fn get_by_id(&self, id: i32) -> StoreResult<Warehouse> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Warehouse>> {
        self.repository.get_all().await
    }

    pub async fn report_products(&self, id: i32) -> StoreResult<ReportProducts> {
        self.repository.report_products(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::repository::{MockProductRepository, MockWarehouseRepository};
    use mockall::predicate::{always, eq};

    fn stored() -> Product {
        Product {
            id: 4,
            name: "Milk".to_string(),
            quantity: 10,
            code_value: "MLK-4".to_string(),
            is_published: true,
            expiration: "2025-12-15".to_string(),
            price: 1.5,
            warehouse_id: 2,
        }
    }

    #[tokio::test]
    async fn test_default_update_persists_stored_value() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(4))
            .returning(|_| Ok(stored()));
        mock_repo
            .expect_update()
            .with(eq(4), eq(stored()))
            .times(1)
            .returning(|_, p| Ok(p));

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product(4, UpdateProduct::default())
            .await
            .unwrap();

        assert_eq!(updated, stored());
    }

    #[tokio::test]
    async fn test_update_overlays_only_supplied_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(stored()));
        mock_repo
            .expect_update()
            .withf(|id, p| {
                *id == 4
                    && p.name == "Oat milk"
                    && p.expiration == "01/01/2026"
                    && p.quantity == 10
                    && p.code_value == "MLK-4"
                    && p.is_published
                    && p.warehouse_id == 2
            })
            .times(1)
            .returning(|_, p| Ok(p));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                4,
                UpdateProduct {
                    name: Some("Oat milk".to_string()),
                    quantity: Some(0),
                    expiration: Some("01/01/2026".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_product_stops_before_write() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(StoreError::NotFound));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service.update_product(9, UpdateProduct::default()).await;

        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_repository_errors_pass_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(always())
            .returning(|_| Err(StoreError::TableMissing));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.delete(1).await, Err(StoreError::TableMissing));
    }

    #[tokio::test]
    async fn test_report_products_delegates() {
        let mut mock_repo = MockWarehouseRepository::new();
        mock_repo
            .expect_report_products()
            .with(eq(3))
            .returning(|_| {
                Ok(ReportProducts {
                    warehouse_name: "Main".to_string(),
                    product_count: "0".to_string(),
                })
            });

        let service = WarehouseService::new(mock_repo);
        let report = service.report_products(3).await.unwrap();

        assert_eq!(report.product_count, "0");
    }
}
