//! MySQL repositories over [`database::BaseRepository`].
//!
//! Every `DbErr` is classified into a [`StoreError`] through `?`.

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement};

use crate::entity::{product, warehouse};
use crate::error::{StoreError, StoreResult};
use crate::expiration;
use crate::models::{
    CreateProduct, CreateWarehouse, Product, ProductFull, ReportProducts, Warehouse,
};
use crate::repository::{ProductRepository, WarehouseRepository};

#[derive(Clone)]
pub struct MySqlProductRepository {
    base: BaseRepository<product::Entity>,
}

impl MySqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn create(&self, input: CreateProduct) -> StoreResult<Product> {
        let expiration = expiration::normalize(&input.expiration)?;
        let mut product = input.into_product(0);
        product.expiration = expiration;

        let active_model = product::ActiveModel::from_product(&product)?;
        product.id = self.base.insert(active_model).await?;

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        self.base
            .find_by_id(id)
            .await?
            .map(Product::from)
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i32, mut product: Product) -> StoreResult<Product> {
        product.expiration = expiration::normalize(&product.expiration)?;
        product.id = id;

        let active_model = product::ActiveModel::from_product(&product)?;
        let rows_affected = self.base.update_by_id(id, active_model).await?;

        // Zero also means "no column changed"; only a missing row is an error
        if rows_affected == 0 && !self.base.exists(id).await? {
            return Err(StoreError::NotFound);
        }

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    async fn get_full_data(&self, id: i32) -> StoreResult<ProductFull> {
        let (model, warehouse) = product::Entity::find_by_id(id)
            .find_also_related(warehouse::Entity)
            .one(self.base.db())
            .await?
            .ok_or(StoreError::NotFound)?;

        let Some(warehouse) = warehouse else {
            tracing::warn!(
                product_id = id,
                warehouse_id = model.id_warehouse,
                "Product references a missing warehouse"
            );
            return Err(StoreError::NotFound);
        };

        Ok(ProductFull {
            product: model.into(),
            warehouse_name: warehouse.name,
            warehouse_address: warehouse.address,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct ProductCountRow {
    warehouse_name: String,
    product_count: i64,
}

const REPORT_PRODUCTS_SQL: &str = "SELECT w.name AS warehouse_name, COUNT(p.id) AS product_count \
     FROM warehouses w LEFT JOIN products p ON w.id = p.id_warehouse \
     WHERE w.id = ? GROUP BY w.id, w.name";

#[derive(Clone)]
pub struct MySqlWarehouseRepository {
    base: BaseRepository<warehouse::Entity>,
}

impl MySqlWarehouseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl WarehouseRepository for MySqlWarehouseRepository {
    async fn create(&self, input: CreateWarehouse) -> StoreResult<Warehouse> {
        let id = self
            .base
            .insert(warehouse::ActiveModel::from(input.clone()))
            .await?;

        tracing::info!(warehouse_id = id, "Created warehouse");
        Ok(input.into_warehouse(id))
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Warehouse> {
        self.base
            .find_by_id(id)
            .await?
            .map(Warehouse::from)
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<Warehouse>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Warehouse::from).collect())
    }

    async fn report_products(&self, id: i32) -> StoreResult<ReportProducts> {
        let row = ProductCountRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::MySql,
            REPORT_PRODUCTS_SQL,
            [id.into()],
        ))
        .one(self.base.db())
        .await?
        .ok_or(StoreError::NotFound)?;

        Ok(ReportProducts {
            warehouse_name: row.warehouse_name,
            product_count: row.product_count.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn product_model(id: i32) -> product::Model {
        product::Model {
            id,
            name: "Milk".to_string(),
            quantity: 10,
            code_value: format!("MLK-{id}"),
            is_published: false,
            expiration: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            price: 1.5,
            id_warehouse: 1,
        }
    }

    fn warehouse_model(id: i32) -> warehouse::Model {
        warehouse::Model {
            id,
            name: "Main".to_string(),
            address: "Street 1".to_string(),
            telephone: "555-0100".to_string(),
            capacity: 100,
        }
    }

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Milk".to_string(),
            quantity: 10,
            code_value: "MLK-1".to_string(),
            is_published: false,
            expiration: "15/12/2025".to_string(),
            price: 1.5,
            warehouse_id: 1,
        }
    }

    fn exec(last_insert_id: u64, rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_returns_id_and_canonical_expiration() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec(5, 1)])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        let created = repo.create(create_input()).await.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.expiration, "2025-12-15");
        assert_eq!(created.code_value, "MLK-1");
    }

    #[tokio::test]
    async fn test_create_with_bad_date_never_reaches_the_store() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();
        let repo = MySqlProductRepository::new(db.clone());

        let mut input = create_input();
        input.expiration = "31/02/2024".to_string();

        assert_eq!(repo.create(input).await, Err(StoreError::DateParseError));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_is_classified() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        assert_eq!(repo.create(create_input()).await, Err(StoreError::Internal));
    }

    #[tokio::test]
    async fn test_get_by_id_found_and_missing() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![product_model(1)]])
            .append_query_results([Vec::<product::Model>::new()])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        let product = repo.get_by_id(1).await.unwrap();
        assert_eq!(product.expiration, "2025-12-15");
        assert_eq!(product.warehouse_id, 1);

        assert_eq!(repo.get_by_id(2).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_get_all_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<product::Model>::new()])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        assert_eq!(repo.get_all().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec(0, 0)])
            .append_query_results([Vec::<product::Model>::new()])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        let product = create_input().into_product(9);
        assert_eq!(repo.update(9, product).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_without_changes_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec(0, 0)])
            .append_query_results([vec![product_model(1)]])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        let updated = repo
            .update(1, create_input().into_product(0))
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.expiration, "2025-12-15");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec(0, 1), exec(0, 0)])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        assert_eq!(repo.delete(1).await, Ok(()));
        assert_eq!(repo.delete(1).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_full_data_joins_warehouse() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![(product_model(1), Some(warehouse_model(1)))]])
            .append_query_results([vec![(product_model(2), None::<warehouse::Model>)]])
            .into_connection();
        let repo = MySqlProductRepository::new(db);

        let full = repo.get_full_data(1).await.unwrap();
        assert_eq!(full.product.id, 1);
        assert_eq!(full.warehouse_name, "Main");
        assert_eq!(full.warehouse_address, "Street 1");

        assert_eq!(repo.get_full_data(2).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_warehouse_assigns_id() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([exec(3, 1)])
            .into_connection();
        let repo = MySqlWarehouseRepository::new(db);

        let created = repo
            .create(CreateWarehouse {
                name: "Main".to_string(),
                address: "Street 1".to_string(),
                telephone: "555-0100".to_string(),
                capacity: 100,
            })
            .await
            .unwrap();
        assert_eq!(created, warehouse_model(3).into());
    }

    #[tokio::test]
    async fn test_report_products_renders_count_as_text() {
        let row = |count: i64| {
            BTreeMap::from([
                ("warehouse_name", Value::from("Main")),
                ("product_count", Value::from(count)),
            ])
        };
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![row(0)]])
            .append_query_results([vec![row(4)]])
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let repo = MySqlWarehouseRepository::new(db);

        let empty = repo.report_products(1).await.unwrap();
        assert_eq!(empty.warehouse_name, "Main");
        assert_eq!(empty.product_count, "0");

        assert_eq!(repo.report_products(1).await.unwrap().product_count, "4");
        assert_eq!(repo.report_products(9).await, Err(StoreError::NotFound));
    }
}
