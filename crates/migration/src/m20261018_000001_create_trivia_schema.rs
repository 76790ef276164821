use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(pk_auto(Categories::Id))
                    .col(string_len(Categories::Type, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(pk_auto(Questions::Id))
                    .col(text(Questions::Question))
                    .col(text(Questions::Answer))
                    .col(integer(Questions::Category))
                    // Difficulty is validated in app code as well; the database refuses anything below 1.
                    .col(integer(Questions::Difficulty).check(Expr::col(Questions::Difficulty).gte(1)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-questions-category")
                            .from(Questions::Table, Questions::Category)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_questions_category")
                    .table(Questions::Table)
                    .col(Questions::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Categories {
    Table,
    Id,
    Type,
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
