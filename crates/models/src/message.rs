use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::account;
use crate::errors;

/// Short text post owned by an account. `posted_at_epoch` is the
/// client-supplied creation time in milliseconds since the Unix epoch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub posted_at_epoch: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Account,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AuthorId)
                .to(account::Column::Id)
                .into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    author_id: i64,
    text: &str,
    posted_at_epoch: i64,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        author_id: Set(author_id),
        text: Set(text.to_string()),
        posted_at_epoch: Set(posted_at_epoch),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Replace the text of an existing message. `Ok(None)` when the id does not
/// exist; the caller decides whether that is an error.
pub async fn update_text(
    db: &DatabaseConnection,
    id: i64,
    text: &str,
) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    let Some(found) = found else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.text = Set(text.to_string());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Remove a message, returning the removed row. Lookup-then-delete: the row
/// is fetched first so the caller can echo it back.
pub async fn delete_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    let Some(found) = found else {
        return Ok(None);
    };
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(found))
}
