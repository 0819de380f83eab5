use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::ServiceError;
use crate::message::domain::{Message, NewMessage};
use crate::message::repository::MessageRepository;

pub struct SeaOrmMessageRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::message::Model) -> Message {
    Message {
        id: m.id,
        author_id: m.author_id,
        text: m.text,
        posted_at_epoch: m.posted_at_epoch,
    }
}

#[async_trait::async_trait]
impl MessageRepository for SeaOrmMessageRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let res = models::message::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(res.map(to_domain))
    }

    async fn insert(&self, new: &NewMessage) -> Result<Message, ServiceError> {
        let created =
            models::message::create(&self.db, new.author_id, &new.text, new.posted_at_epoch)
                .await
                .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(to_domain(created))
    }

    async fn update_text(&self, id: i64, text: &str) -> Result<Option<Message>, ServiceError> {
        let updated = models::message::update_text(&self.db, id, text)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(updated.map(to_domain))
    }

    async fn delete(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let removed = models::message::delete_by_id(&self.db, id)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(removed.map(to_domain))
    }

    async fn list_all(&self) -> Result<Vec<Message>, ServiceError> {
        let rows = models::message::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Message>, ServiceError> {
        let rows = models::message::Entity::find()
            .filter(models::message::Column::AuthorId.eq(author_id))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }
}
