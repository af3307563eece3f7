pub mod memory_store;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Conversation, Message};

pub use memory_store::InMemoryConversationStore;

/// Storage seam for conversation history. Handlers only see this trait, so a
/// persistent backend can replace the in-memory one.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the conversation for `id`, creating an empty one if absent.
    async fn create_or_get(&self, id: &str) -> Result<Conversation, AppError>;

    /// Appends `message` to the end of the conversation.
    async fn append(&self, id: &str, message: Message) -> Result<(), AppError>;

    /// All messages of the conversation in insertion order.
    async fn get(&self, id: &str) -> Result<Vec<Message>, AppError>;

    async fn count(&self) -> Result<usize, AppError>;
}
