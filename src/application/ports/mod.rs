mod llm_client;
mod transcription_engine;
mod vault;
mod workspace;

pub use llm_client::{LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use vault::{Vault, VaultError};
pub use workspace::Workspace;
