use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

/// A landlord-tenant thread attached to one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub participant_id: String,
    pub participant_name: String,
    pub participant_avatar: Option<String>,
    pub listing_title: Option<String>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_count: u32,
}
