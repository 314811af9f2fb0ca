use async_trait::async_trait;

use crate::domain::VaultPath;

/// Storage capabilities of the note vault: a directory tree of Markdown
/// notes and binary attachments addressed by vault-relative paths.
#[async_trait]
pub trait Vault: Send + Sync {
    async fn read_note(&self, path: &VaultPath) -> Result<String, VaultError>;

    /// Replaces the full content of an existing note.
    async fn write_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError>;

    /// Creates a new note, failing with `AlreadyExists` rather than
    /// overwriting.
    async fn create_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError>;

    async fn exists(&self, path: &VaultPath) -> Result<bool, VaultError>;

    /// Every file in the vault, in enumeration order.
    async fn list_files(&self) -> Result<Vec<VaultPath>, VaultError>;

    async fn read_binary(&self, path: &VaultPath) -> Result<Vec<u8>, VaultError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
}
