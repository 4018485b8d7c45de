use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::error::StoreResult;
use crate::expiration;
use crate::models::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(unique)]
    pub code_value: String,
    pub is_published: bool,
    pub expiration: Date,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub id_warehouse: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::IdWarehouse",
        to = "super::warehouse::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Warehouse,
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            code_value: model.code_value,
            is_published: model.is_published,
            expiration: expiration::format(model.expiration),
            price: model.price,
            warehouse_id: model.id_warehouse,
        }
    }
}

impl ActiveModel {
    /// Every column except the key, with the expiration parsed into a `DATE`.
    pub fn from_product(product: &Product) -> StoreResult<Self> {
        Ok(ActiveModel {
            name: Set(product.name.clone()),
            quantity: Set(product.quantity),
            code_value: Set(product.code_value.clone()),
            is_published: Set(product.is_published),
            expiration: Set(expiration::parse(&product.expiration)?),
            price: Set(product.price),
            id_warehouse: Set(product.warehouse_id),
            ..Default::default()
        })
    }
}
