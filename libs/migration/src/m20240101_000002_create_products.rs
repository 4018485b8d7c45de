use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_warehouses::Warehouses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Name))
                    .col(integer(Products::Quantity))
                    .col(string_uniq(Products::CodeValue))
                    .col(boolean(Products::IsPublished).default(false))
                    .col(date(Products::Expiration))
                    .col(double(Products::Price))
                    .col(integer(Products::IdWarehouse))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_id_warehouse")
                            .from(Products::Table, Products::IdWarehouse)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_id_warehouse")
                    .table(Products::Table)
                    .col(Products::IdWarehouse)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Quantity,
    CodeValue,
    IsPublished,
    Expiration,
    Price,
    IdWarehouse,
}
