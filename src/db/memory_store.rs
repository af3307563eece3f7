use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db::ConversationStore;
use crate::errors::AppError;
use crate::models::{Conversation, Message};

/// Process-lifetime conversation map. One lock serializes every mutation;
/// nothing is ever evicted.
#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<String, Vec<Message>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create_or_get(&self, id: &str) -> Result<Conversation, AppError> {
        let mut conversations = self.conversations.write().await;
        let messages = conversations.entry(id.to_string()).or_insert_with(|| {
            debug!("Creating conversation {id}");
            Vec::new()
        });
        Ok(Conversation { id: id.to_string(), messages: messages.clone() })
    }

    async fn append(&self, id: &str, message: Message) -> Result<(), AppError> {
        let mut conversations = self.conversations.write().await;
        conversations.entry(id.to_string()).or_default().push(message);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Vec<Message>, AppError> {
        self.conversations
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::ConversationNotFound { id: id.to_string() })
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.conversations.read().await.len())
    }
}
