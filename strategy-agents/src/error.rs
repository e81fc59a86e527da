/// Errors surfaced by the agent roster.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Agent {0} not found")]
    NotFound(String),
}
