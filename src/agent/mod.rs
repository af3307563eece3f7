use tracing::debug;

const ECHO_PREFIX: &str = "Echo: ";

/// Reply generator for a single chat turn. Stands in for a real generation
/// backend: the reply is the user content with a fixed prefix.
#[derive(Debug, Clone, Default)]
pub struct EchoAgent;

impl EchoAgent {
    pub fn new() -> Self {
        Self
    }

    pub fn reply(&self, conversation_id: &str, user_message: &str) -> String {
        debug!("Echoing {} bytes for conversation {conversation_id}", user_message.len());
        format!("{ECHO_PREFIX}{user_message}")
    }
}
