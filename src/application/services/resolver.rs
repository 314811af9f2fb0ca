use crate::application::ports::{Vault, VaultError};
use crate::domain::{AudioLink, ResolvedAudioFile, VaultPath};

/// Maps an extracted link to a concrete vault file. A link that is
/// itself a valid vault path is returned verbatim with its basename as
/// the display name; otherwise the vault is scanned linearly for the
/// first file whose name matches the link exactly, and the bare link
/// string becomes the display name.
pub async fn resolve_link(
    vault: &dyn Vault,
    link: &AudioLink,
) -> Result<ResolvedAudioFile, ResolveError> {
    let direct = VaultPath::new(link.as_str());
    if vault.exists(&direct).await? {
        return Ok(ResolvedAudioFile {
            name: direct.file_name().to_string(),
            path: direct,
        });
    }

    let files = vault.list_files().await?;
    let hit = files
        .into_iter()
        .find(|path| path.file_name() == link.as_str());

    match hit {
        Some(path) => {
            tracing::debug!(link = %link, path = %path, "Resolved link by filename scan");
            Ok(ResolvedAudioFile {
                name: link.as_str().to_string(),
                path,
            })
        }
        None => Err(ResolveError::NotFound(link.as_str().to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("audio file not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Vault(#[from] VaultError),
}
