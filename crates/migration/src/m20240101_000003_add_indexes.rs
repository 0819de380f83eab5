use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Message: index on author_id for the per-account listing endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_message_author")
                    .table(Message::Table)
                    .col(Message::AuthorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_message_author").table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Message { Table, AuthorId }
