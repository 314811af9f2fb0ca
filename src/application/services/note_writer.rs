use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::application::ports::{Vault, VaultError};
use crate::domain::{splice_below_marker, VaultPath};

/// Writes generated transcript content into the vault: new uniquely
/// named transcription notes, and in-place splices below an embed
/// marker in an existing note.
pub struct NoteWriter {
    vault: Arc<dyn Vault>,
}

impl NoteWriter {
    pub fn new(vault: Arc<dyn Vault>) -> Self {
        Self { vault }
    }

    /// Creates `<audio file name> Transcription.md` in `folder`. On
    /// collision the name gains a UTC timestamp suffix with `:` and `.`
    /// replaced, retrying until a free name is found; an existing note
    /// is never overwritten. Returns the created path.
    pub async fn create_transcription_note(
        &self,
        folder: Option<&VaultPath>,
        audio_name: &str,
        content: &str,
    ) -> Result<VaultPath, VaultError> {
        let mut candidate = note_path(folder, &format!("{audio_name} Transcription.md"));
        while self.vault.exists(&candidate).await? {
            let timestamp = Utc::now()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .replace([':', '.'], "-");
            candidate = note_path(
                folder,
                &format!("{audio_name} Transcription {timestamp}.md"),
            );
        }

        self.vault.create_note(&candidate, content).await?;
        tracing::info!(path = %candidate, "Created transcription note");
        Ok(candidate)
    }

    /// Re-reads the note, splices `block` below the first `![[link]]`
    /// marker (appending at the end when the marker is absent) and
    /// writes the full content back.
    pub async fn append_below_marker(
        &self,
        note: &VaultPath,
        link: &str,
        block: &str,
    ) -> Result<(), VaultError> {
        let content = self.vault.read_note(note).await?;
        let updated = splice_below_marker(&content, link, block);
        self.vault.write_note(note, &updated).await
    }
}

fn note_path(folder: Option<&VaultPath>, file_name: &str) -> VaultPath {
    match folder {
        Some(folder) => VaultPath::new(format!("{}/{}", folder.as_str(), file_name)),
        None => VaultPath::new(file_name),
    }
}
