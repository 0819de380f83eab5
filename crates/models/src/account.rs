use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::message;

/// Registered user identity. `password` is stored as received; see DESIGN.md
/// on the inherited plaintext credential scheme.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Message,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Message => Entity::has_many(message::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new account; the store assigns the id. A duplicate username is
/// rejected by the UNIQUE constraint and comes back as `ModelError::Db`.
pub async fn create(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        password: Set(password.to_string()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
