use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::agent::EchoAgent;
use crate::db::ConversationStore;
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse, Message, MessageRole};

#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    agent: EchoAgent,
}

impl ChatService {
    pub fn new(store: Arc<dyn ConversationStore>, agent: EchoAgent) -> Self {
        Self { store, agent }
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    pub async fn get_messages(&self, conversation_id: &str) -> Result<Vec<Message>, AppError> {
        self.store.get(conversation_id).await
    }

    /// Runs one turn: stores the user message and the echoed reply under a
    /// freshly minted conversation id.
    ///
    /// Any caller-supplied conversation context is ignored, so every
    /// conversation holds exactly one turn.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        let conversation_id = Uuid::new_v4().to_string();
        let timestamp = Utc::now();

        // ── Resolve conversation ──────────────────────────────────────────────
        self.store.create_or_get(&conversation_id).await.map_err(|e| {
            error!("Failed to create conversation {conversation_id}: {e}");
            e
        })?;

        // ── Persist user message (role from the request is not trusted) ──────
        let user_message = Message::new(MessageRole::User, request.content, timestamp);
        let reply = self.agent.reply(&conversation_id, &user_message.content);
        self.store
            .append(&conversation_id, user_message)
            .await
            .map_err(|e| {
                error!("Failed to store user message for {conversation_id}: {e}");
                e
            })?;

        // ── Persist assistant reply with the same timestamp ──────────────────
        let assistant_message = Message::new(MessageRole::Assistant, reply.clone(), timestamp);
        self.store
            .append(&conversation_id, assistant_message)
            .await
            .map_err(|e| {
                error!("Failed to store assistant message for {conversation_id}: {e}");
                e
            })?;

        info!("Completed chat turn for conversation {conversation_id}");

        Ok(ChatResponse { message: reply, conversation_id, timestamp })
    }
}
