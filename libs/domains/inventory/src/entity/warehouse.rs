use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateWarehouse, Warehouse};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Warehouse {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            telephone: model.telephone,
            capacity: model.capacity,
        }
    }
}

impl From<CreateWarehouse> for ActiveModel {
    fn from(input: CreateWarehouse) -> Self {
        ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            telephone: Set(input.telephone),
            capacity: Set(input.capacity),
            ..Default::default()
        }
    }
}
