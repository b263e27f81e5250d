//! Create `Inventory` table.
//! Same layout as `Food` plus the `MaxQuantity` capacity column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(big_integer(Inventory::Id).auto_increment().primary_key())
                    .col(string_len(Inventory::Name, 255).not_null())
                    .col(double_null(Inventory::Quantity))
                    .col(double_null(Inventory::MaxQuantity))
                    .col(string_len_null(Inventory::Unit, 64))
                    .col(timestamp_with_time_zone(Inventory::CreateDate).not_null())
                    .col(timestamp_with_time_zone(Inventory::UpdateDate).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_name")
                    .table(Inventory::Table)
                    .col(Inventory::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inventory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    #[sea_orm(iden = "Inventory")]
    Table,
    #[sea_orm(iden = "id")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Quantity")]
    Quantity,
    #[sea_orm(iden = "MaxQuantity")]
    MaxQuantity,
    #[sea_orm(iden = "Unit")]
    Unit,
    #[sea_orm(iden = "CreateDate")]
    CreateDate,
    #[sea_orm(iden = "UpdateDate")]
    UpdateDate,
}
