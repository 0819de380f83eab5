use serde::{Deserialize, Serialize};

/// Message creation input (no id yet). `posted_at_epoch` is client-supplied,
/// in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub author_id: i64,
    pub text: String,
    pub posted_at_epoch: i64,
}

/// Text replacement for an existing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateText {
    pub text: String,
}

/// Domain message (business view), including the server-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub posted_at_epoch: i64,
}
