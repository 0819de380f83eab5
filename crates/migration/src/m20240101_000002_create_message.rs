//! Create `message` table with FK to `account`.
//!
//! No cascade on the FK: removing an account is out of scope and must not
//! silently take messages with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Message::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Message::AuthorId).not_null())
                    .col(string_len(Message::Text, 255).not_null())
                    .col(big_integer(Message::PostedAtEpoch).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_account")
                            .from(Message::Table, Message::AuthorId)
                            .to(Account::Table, Account::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Message::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Message { Table, Id, AuthorId, Text, PostedAtEpoch }

#[derive(DeriveIden)]
enum Account { Table, Id }
