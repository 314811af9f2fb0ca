use async_trait::async_trait;

use crate::domain::VaultPath;

/// User-facing capabilities of the host workspace: transient notices
/// and revealing a note after it has been created.
#[async_trait]
pub trait Workspace: Send + Sync {
    fn notify(&self, message: &str);

    async fn open_note(&self, path: &VaultPath);
}
