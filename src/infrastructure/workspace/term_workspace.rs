use crate::application::ports::Workspace;
use crate::domain::VaultPath;

/// Terminal stand-in for the host workspace: notices go to stderr, and
/// "opening" a note prints its vault path so the shell can pick it up.
pub struct TermWorkspace;

#[async_trait::async_trait]
impl Workspace for TermWorkspace {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    async fn open_note(&self, path: &VaultPath) {
        println!("{path}");
    }
}
