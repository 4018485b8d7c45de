//! Integration tests for the MySQL repositories
//!
//! These tests use real MySQL via testcontainers to ensure:
//! - Server errors are classified into `StoreError`
//! - The unique code and warehouse foreign key are enforced
//! - Joins and the product count report read what was written
//!
//! They need Docker: `cargo test -- --ignored`

use domain_inventory::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_product(builder: &TestDataBuilder, suffix: &str, warehouse_id: i32) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        quantity: 10,
        code_value: builder.code_value(suffix),
        is_published: false,
        expiration: builder.expiration(),
        price: 2.5,
        warehouse_id,
    }
}

// ============================================================================
// Product repository
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let warehouse_id = db.create_test_warehouse(&builder.name("warehouse", "main")).await;

    let created = repo
        .create(new_product(&builder, "main", warehouse_id))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_canonical_date(&created.expiration, "created expiration");

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_duplicate_code_value_is_duplicate_entry() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_code");
    let warehouse_id = db.create_test_warehouse("main").await;

    repo.create(new_product(&builder, "dup", warehouse_id))
        .await
        .unwrap();
    let result = repo.create(new_product(&builder, "dup", warehouse_id)).await;

    assert_eq!(result, Err(StoreError::DuplicateEntry));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unknown_warehouse_is_internal() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("unknown_warehouse");

    // 1452 (foreign key) has no dedicated kind
    let result = repo.create(new_product(&builder, "orphan", 9999)).await;
    assert_eq!(result, Err(StoreError::Internal));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_and_delete");
    let warehouse_id = db.create_test_warehouse("main").await;

    let mut product = repo
        .create(new_product(&builder, "p", warehouse_id))
        .await
        .unwrap();

    // Same values: MySQL reports zero changed rows, still a success
    let unchanged = repo.update(product.id, product.clone()).await.unwrap();
    assert_eq!(unchanged, product);

    product.quantity = 3;
    product.expiration = "01/02/2031".to_string();
    let updated = repo.update(product.id, product.clone()).await.unwrap();
    assert_eq!(updated.expiration, "2031-02-01");
    assert_eq!(repo.get_by_id(product.id).await.unwrap().quantity, 3);

    assert_eq!(
        repo.update(product.id + 1000, product.clone()).await,
        Err(StoreError::NotFound)
    );

    assert_eq!(repo.delete(product.id).await, Ok(()));
    assert_eq!(repo.delete(product.id).await, Err(StoreError::NotFound));
    assert_eq!(repo.get_by_id(product.id).await, Err(StoreError::NotFound));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_full_data_joins_warehouse() {
    let db = TestDatabase::new().await;
    let repo = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("full_data");
    let warehouse_id = db.create_test_warehouse("North").await;

    let product = repo
        .create(new_product(&builder, "p", warehouse_id))
        .await
        .unwrap();

    let full = repo.get_full_data(product.id).await.unwrap();
    assert_eq!(full.product, product);
    assert_eq!(full.warehouse_name, "North");
    assert_eq!(full.warehouse_address, "Test Street 1");

    assert_eq!(
        repo.get_full_data(product.id + 1000).await,
        Err(StoreError::NotFound)
    );
}

// ============================================================================
// Warehouse repository
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_warehouses_and_report() {
    let db = TestDatabase::new().await;
    let warehouses = MySqlWarehouseRepository::new(db.connection());
    let products = MySqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("report");

    assert_eq!(warehouses.get_all().await, Ok(vec![]));

    let warehouse = warehouses
        .create(CreateWarehouse {
            name: builder.name("warehouse", "main"),
            address: "Street 1".to_string(),
            telephone: "555-0100".to_string(),
            capacity: 50,
        })
        .await
        .unwrap();
    assert_eq!(warehouses.get_by_id(warehouse.id).await.unwrap(), warehouse);

    let empty = warehouses.report_products(warehouse.id).await.unwrap();
    assert_eq!(empty.product_count, "0");
    assert_eq!(empty.warehouse_name, warehouse.name);

    for suffix in ["a", "b"] {
        products
            .create(new_product(&builder, suffix, warehouse.id))
            .await
            .unwrap();
    }
    let report = warehouses.report_products(warehouse.id).await.unwrap();
    assert_eq!(report.product_count, "2");

    assert_eq!(
        warehouses.report_products(warehouse.id + 1000).await,
        Err(StoreError::NotFound)
    );
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_product_service_merge_against_mysql() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(MySqlProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_merge");
    let warehouse_id = db.create_test_warehouse("main").await;

    let created = service
        .create(new_product(&builder, "p", warehouse_id))
        .await
        .unwrap();

    let unchanged = service
        .update_product(created.id, UpdateProduct::default())
        .await
        .unwrap();
    assert_eq!(unchanged, created);

    let renamed = service
        .update_product(
            created.id,
            UpdateProduct {
                name: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "renamed");
    assert_eq!(renamed.code_value, created.code_value);
}
