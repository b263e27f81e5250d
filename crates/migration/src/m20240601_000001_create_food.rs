//! Create `Food` table.
//!
//! Column names are PascalCase to stay compatible with existing databases.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(big_integer(Food::Id).auto_increment().primary_key())
                    .col(string_len(Food::Name, 255).not_null())
                    .col(double_null(Food::Quantity))
                    .col(string_len_null(Food::Unit, 64))
                    .col(timestamp_with_time_zone(Food::CreateDate).not_null())
                    .col(timestamp_with_time_zone(Food::UpdateDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Food::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Food {
    #[sea_orm(iden = "Food")]
    Table,
    #[sea_orm(iden = "id")]
    Id,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Quantity")]
    Quantity,
    #[sea_orm(iden = "Unit")]
    Unit,
    #[sea_orm(iden = "CreateDate")]
    CreateDate,
    #[sea_orm(iden = "UpdateDate")]
    UpdateDate,
}
