use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product stored in a warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    /// Unique business key
    pub code_value: String,
    pub is_published: bool,
    /// `YYYY-MM-DD` on reads
    #[schema(example = "2025-12-15")]
    pub expiration: String,
    pub price: f64,
    /// Warehouse holding the product
    #[serde(rename = "id_warehouse")]
    pub warehouse_id: i32,
}

/// Product joined with the name and address of its warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductFull {
    #[serde(flatten)]
    pub product: Product,
    pub warehouse_name: String,
    pub warehouse_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub capacity: i32,
}

/// Number of products held by a warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportProducts {
    pub warehouse_name: String,
    /// Decimal count, `"0"` for an empty warehouse
    #[schema(example = "3")]
    pub product_count: String,
}

/// DTO for creating a product, also the body of a full `PUT` update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub quantity: i32,
    #[validate(length(min = 1))]
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    /// `DD/MM/YYYY`
    #[validate(length(min = 1))]
    #[schema(example = "15/12/2025")]
    pub expiration: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[serde(rename = "id_warehouse")]
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
}

/// Sparse product update.
///
/// A field that is absent, empty or zero leaves the stored value unchanged,
/// so quantity and price cannot be set to zero through an update.
/// Publication state and warehouse are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub code_value: Option<String>,
    /// `DD/MM/YYYY`
    pub expiration: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

impl From<CreateProduct> for UpdateProduct {
    fn from(input: CreateProduct) -> Self {
        Self {
            name: Some(input.name),
            quantity: Some(input.quantity),
            code_value: Some(input.code_value),
            expiration: Some(input.expiration),
            price: Some(input.price),
        }
    }
}

impl CreateProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
            warehouse_id: self.warehouse_id,
        }
    }
}

impl Product {
    /// Overlay the supplied, non-default fields of `update`.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name.filter(|v| !v.is_empty()) {
            self.name = name;
        }
        if let Some(quantity) = update.quantity.filter(|v| *v > 0) {
            self.quantity = quantity;
        }
        if let Some(code_value) = update.code_value.filter(|v| !v.is_empty()) {
            self.code_value = code_value;
        }
        if let Some(expiration) = update.expiration.filter(|v| !v.is_empty()) {
            self.expiration = expiration;
        }
        if let Some(price) = update.price.filter(|v| *v > 0.0) {
            self.price = price;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWarehouse {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub telephone: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

impl CreateWarehouse {
    pub fn into_warehouse(self, id: i32) -> Warehouse {
        Warehouse {
            id,
            name: self.name,
            address: self.address,
            telephone: self.telephone,
            capacity: self.capacity,
        }
    }
}

/// Query of `GET /warehouses/reportProducts`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Warehouse ID
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Milk".to_string(),
            quantity: 10,
            code_value: "MLK-1".to_string(),
            is_published: true,
            expiration: "2025-12-15".to_string(),
            price: 1.5,
            warehouse_id: 2,
        }
    }

    #[test]
    fn test_product_json_uses_id_warehouse() {
        let json = serde_json::to_value(product()).unwrap();
        assert_eq!(json["id_warehouse"], 2);
        assert!(json.get("warehouse_id").is_none());
    }

    #[test]
    fn test_product_full_flattens_product_fields() {
        let full = ProductFull {
            product: product(),
            warehouse_name: "Main".to_string(),
            warehouse_address: "Street 1".to_string(),
        };

        let json = serde_json::to_value(full).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["code_value"], "MLK-1");
        assert_eq!(json["warehouse_name"], "Main");
        assert_eq!(json["warehouse_address"], "Street 1");
    }

    #[test]
    fn test_default_update_changes_nothing() {
        let mut p = product();
        p.apply_update(UpdateProduct::default());
        assert_eq!(p, product());
    }

    #[test]
    fn test_empty_and_zero_fields_are_ignored() {
        let mut p = product();
        p.apply_update(UpdateProduct {
            name: Some(String::new()),
            quantity: Some(0),
            code_value: Some(String::new()),
            expiration: Some(String::new()),
            price: Some(0.0),
        });
        assert_eq!(p, product());
    }

    #[test]
    fn test_supplied_fields_are_overlaid() {
        let mut p = product();
        p.apply_update(UpdateProduct {
            name: Some("Oat milk".to_string()),
            quantity: Some(3),
            price: Some(2.25),
            ..Default::default()
        });

        assert_eq!(p.name, "Oat milk");
        assert_eq!(p.quantity, 3);
        assert_eq!(p.price, 2.25);
        assert_eq!(p.code_value, "MLK-1");
        assert_eq!(p.expiration, "2025-12-15");
        assert!(p.is_published);
        assert_eq!(p.warehouse_id, 2);
    }

    #[test]
    fn test_create_product_validation() {
        let valid = CreateProduct {
            name: "Milk".to_string(),
            quantity: 10,
            code_value: "MLK-1".to_string(),
            is_published: false,
            expiration: "15/12/2025".to_string(),
            price: 1.5,
            warehouse_id: 1,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateProduct {
            name: String::new(),
            price: 0.0,
            warehouse_id: 0,
            ..valid
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_update_rejects_negative_numbers() {
        assert!(UpdateProduct::default().validate().is_ok());
        assert!(
            UpdateProduct {
                quantity: Some(0),
                price: Some(0.0),
                ..Default::default()
            }
            .validate()
            .is_ok()
        );

        let invalid = UpdateProduct {
            quantity: Some(-1),
            price: Some(-0.5),
            ..Default::default()
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_warehouse_capacity_must_be_positive() {
        let warehouse = CreateWarehouse {
            name: "Main".to_string(),
            address: "Street 1".to_string(),
            telephone: "555-0100".to_string(),
            capacity: 0,
        };
        assert!(warehouse.validate().is_err());
    }
}
