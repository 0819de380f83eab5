use async_trait::async_trait;

use super::domain::{Message, NewMessage};
use crate::errors::ServiceError;

/// Repository abstraction for message persistence.
///
/// Mutations against an absent id report `Ok(None)`, not an error; the
/// service decides how that propagates.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError>;
    async fn insert(&self, new: &NewMessage) -> Result<Message, ServiceError>;
    async fn update_text(&self, id: i64, text: &str) -> Result<Option<Message>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<Option<Message>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<Message>, ServiceError>;
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Message>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockMessageRepository {
        messages: Mutex<BTreeMap<i64, Message>>, // key: id, ordered for stable listings
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl MessageRepository for MockMessageRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages.get(&id).cloned())
        }

        async fn insert(&self, new: &NewMessage) -> Result<Message, ServiceError> {
            let mut messages = self.messages.lock().unwrap();
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let message = Message {
                id: *next,
                author_id: new.author_id,
                text: new.text.clone(),
                posted_at_epoch: new.posted_at_epoch,
            };
            messages.insert(message.id, message.clone());
            Ok(message)
        }

        async fn update_text(&self, id: i64, text: &str) -> Result<Option<Message>, ServiceError> {
            let mut messages = self.messages.lock().unwrap();
            Ok(messages.get_mut(&id).map(|m| {
                m.text = text.to_string();
                m.clone()
            }))
        }

        async fn delete(&self, id: i64) -> Result<Option<Message>, ServiceError> {
            let mut messages = self.messages.lock().unwrap();
            Ok(messages.remove(&id))
        }

        async fn list_all(&self) -> Result<Vec<Message>, ServiceError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages.values().cloned().collect())
        }

        async fn list_by_author(&self, author_id: i64) -> Result<Vec<Message>, ServiceError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages.values().filter(|m| m.author_id == author_id).cloned().collect())
        }
    }
}
