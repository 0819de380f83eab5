use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::account::domain::Account;
use crate::account::repository::AccountRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::account::Model) -> Account {
    Account { id: m.id, username: m.username, password: m.password }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, ServiceError> {
        let res = models::account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(res.map(to_domain))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, ServiceError> {
        let res = models::account::Entity::find()
            .filter(models::account::Column::Username.eq(username.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(res.map(to_domain))
    }

    async fn insert(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        // A lost check-then-insert race lands here: the UNIQUE violation from
        // the store maps into the same rejected channel as the pre-check.
        let created = models::account::create(&self.db, username, password)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(to_domain(created))
    }
}
