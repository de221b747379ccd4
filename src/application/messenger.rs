use crate::domain::chat::{ChatMessage, Conversation};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Landlord-tenant chat threads held in memory.
pub struct Messenger {
    conversations: Vec<Conversation>,
    threads: HashMap<Uuid, Vec<ChatMessage>>,
}

impl Messenger {
    pub fn new(conversations: Vec<Conversation>, threads: HashMap<Uuid, Vec<ChatMessage>>) -> Self {
        Self {
            conversations,
            threads,
        }
    }

    /// Conversations with the most recent activity first, optionally
    /// narrowed by a case-insensitive participant search.
    pub fn conversations(&self, search: &str) -> Vec<&Conversation> {
        let needle = search.trim().to_lowercase();
        let mut list: Vec<&Conversation> = self
            .conversations
            .iter()
            .filter(|c| needle.is_empty() || c.participant_name.to_lowercase().contains(&needle))
            .collect();
        list.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        list
    }

    pub fn thread(&self, conversation_id: Uuid) -> &[ChatMessage] {
        self.threads
            .get(&conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    /// Append an outgoing message and refresh the conversation preview.
    pub fn send(&mut self, conversation_id: Uuid, sender_id: &str, sender_name: &str, body: &str) {
        let body = body.trim();
        if body.is_empty() {
            return;
        }
        let message = ChatMessage {
            id: Uuid::new_v4(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
            read: true,
        };
        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conversation.last_message = message.body.clone();
            conversation.last_message_at = message.sent_at;
        }
        self.threads.entry(conversation_id).or_default().push(message);
    }

    /// Opening a thread clears its unread badge.
    pub fn mark_read(&mut self, conversation_id: Uuid) {
        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conversation.unread_count = 0;
        }
        if let Some(thread) = self.threads.get_mut(&conversation_id) {
            for message in thread {
                message.read = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock;

    fn messenger() -> Messenger {
        let conversations = mock::sample_conversations();
        let mut threads = HashMap::new();
        threads.insert(
            conversations[0].id,
            mock::sample_thread(&conversations[0], "1", "Jamshid Karimov"),
        );
        Messenger::new(conversations, threads)
    }

    #[test]
    fn conversations_sorted_by_recency() {
        let messenger = messenger();
        let list = messenger.conversations("");
        assert_eq!(list.len(), 3);
        assert!(list.windows(2).all(|w| w[0].last_message_at >= w[1].last_message_at));
    }

    #[test]
    fn search_matches_participant_name() {
        let messenger = messenger();
        let list = messenger.conversations("aziza");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].participant_name, "Aziza Karimova");
    }

    #[test]
    fn send_updates_preview_and_thread() {
        let mut messenger = messenger();
        let id = messenger.conversations("")[0].id;
        let before = messenger.thread(id).len();

        messenger.send(id, "1", "Jamshid Karimov", "Ha, hali bo'sh");
        assert_eq!(messenger.thread(id).len(), before + 1);
        let conversation = messenger.conversations("")[0];
        assert_eq!(conversation.last_message, "Ha, hali bo'sh");
    }

    #[test]
    fn blank_messages_are_dropped() {
        let mut messenger = messenger();
        let id = messenger.conversations("")[0].id;
        let before = messenger.thread(id).len();
        messenger.send(id, "1", "Jamshid Karimov", "   ");
        assert_eq!(messenger.thread(id).len(), before);
    }

    #[test]
    fn mark_read_clears_unread_badge() {
        let mut messenger = messenger();
        assert_eq!(messenger.total_unread(), 3);
        let id = messenger
            .conversations("")
            .iter()
            .find(|c| c.unread_count == 2)
            .unwrap()
            .id;
        messenger.mark_read(id);
        assert_eq!(messenger.total_unread(), 1);
        assert!(messenger.thread(id).iter().all(|m| m.read));
    }
}
