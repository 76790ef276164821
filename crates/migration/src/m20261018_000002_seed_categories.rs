use sea_orm_migration::prelude::*;

use crate::m20261018_000001_create_trivia_schema::Categories;

/// Inserted in order so a fresh database assigns ids 1..=6.
const CATEGORY_TYPES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Categories::Table).columns([Categories::Type]);
        for kind in CATEGORY_TYPES {
            insert
                .values([kind.into()])
                .map_err(|e| DbErr::Custom(format!("invalid category seed row: {e}")))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Type).is_in(CATEGORY_TYPES))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
