use std::sync::Arc;

use crate::application::ports::{
    LlmClient, TranscriptionEngine, TranscriptionError, Vault, VaultError, Workspace,
};
use crate::application::services::resolver::{resolve_link, ResolveError};
use crate::application::services::NoteWriter;
use crate::domain::{AudioLink, TranscriptBlock, VaultPath};

const POST_PROCESS_PROMPT: &str =
    "Clean up this transcript. Add paragraphs and punctuation where appropriate.";

/// Behavioral switches for a transcription run, mapped from the
/// persisted settings record by the caller.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    pub api_key_set: bool,
    pub add_link_to_original_file: bool,
    pub embed_audio_link: bool,
    pub tag: String,
    pub post_process: bool,
    pub post_process_instructions: String,
}

/// Outcome counts for one batch of links, reported back to the caller
/// after every per-link failure has already been surfaced as a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Drives the pipeline for a batch of audio links: resolve the link,
/// read the audio bytes, transcribe, optionally post-process, and write
/// the result into the vault. Links are processed strictly sequentially
/// in the order given, and one link's failure never stops the rest of
/// the batch.
pub struct TranscriptionService {
    vault: Arc<dyn Vault>,
    workspace: Arc<dyn Workspace>,
    engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    writer: NoteWriter,
    options: TranscriptionOptions,
}

impl TranscriptionService {
    pub fn new(
        vault: Arc<dyn Vault>,
        workspace: Arc<dyn Workspace>,
        engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        options: TranscriptionOptions,
    ) -> Self {
        let writer = NoteWriter::new(Arc::clone(&vault));
        Self {
            vault,
            workspace,
            engine,
            llm_client,
            writer,
            options,
        }
    }

    /// Transcribes each link into its own new note next to `origin`,
    /// opening every created note and, when configured, splicing a
    /// link-back block below the original embed marker.
    pub async fn transcribe_to_new_notes(
        &self,
        origin: &VaultPath,
        links: &[AudioLink],
    ) -> BatchSummary {
        if !self.ensure_api_key() {
            return BatchSummary::default();
        }

        let mut summary = BatchSummary::default();
        for link in links {
            match self.link_to_new_note(origin, link).await {
                Ok(()) => {
                    summary.succeeded += 1;
                    self.workspace
                        .notify(&format!("Transcription complete for {link}"));
                }
                Err(e) => {
                    summary.failed += 1;
                    self.report_failure(link.as_str(), &e);
                }
            }
        }
        summary
    }

    /// Transcribes each link and splices the result below its embed
    /// marker inside `note` itself.
    pub async fn transcribe_into_note(
        &self,
        note: &VaultPath,
        links: &[AudioLink],
    ) -> BatchSummary {
        if !self.ensure_api_key() {
            return BatchSummary::default();
        }

        let mut summary = BatchSummary::default();
        for link in links {
            match self.link_into_note(note, link).await {
                Ok(()) => {
                    summary.succeeded += 1;
                    self.workspace
                        .notify(&format!("Transcription added to active note for {link}"));
                }
                Err(e) => {
                    summary.failed += 1;
                    self.report_failure(link.as_str(), &e);
                }
            }
        }
        summary
    }

    /// Transcribes one audio file into a new note created next to it.
    pub async fn transcribe_file_to_new_note(&self, audio: &VaultPath) -> BatchSummary {
        if !self.ensure_api_key() {
            return BatchSummary::default();
        }

        let name = audio.file_name().to_string();
        match self.file_to_new_note(audio, &name).await {
            Ok(()) => {
                self.workspace.notify("Transcription complete!");
                BatchSummary {
                    succeeded: 1,
                    failed: 0,
                }
            }
            Err(e) => {
                self.report_failure(audio.as_str(), &e);
                BatchSummary {
                    succeeded: 0,
                    failed: 1,
                }
            }
        }
    }

    /// Transcribes one audio file and splices the result into `note`,
    /// below the file's embed marker when one is present.
    pub async fn append_file_transcription(
        &self,
        audio: &VaultPath,
        note: &VaultPath,
    ) -> BatchSummary {
        if !self.ensure_api_key() {
            return BatchSummary::default();
        }

        let name = audio.file_name().to_string();
        let result: Result<(), LinkError> = async {
            let text = self.transcribe_audio_at(audio, &name).await?;
            let block = TranscriptBlock::transcription(&name, &self.options.tag, &text);
            self.writer
                .append_below_marker(note, audio.as_str(), &block.render())
                .await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => {
                self.workspace
                    .notify(&format!("Transcription added to active note for {name}"));
                BatchSummary {
                    succeeded: 1,
                    failed: 0,
                }
            }
            Err(e) => {
                self.report_failure(audio.as_str(), &e);
                BatchSummary {
                    succeeded: 0,
                    failed: 1,
                }
            }
        }
    }

    async fn link_to_new_note(&self, origin: &VaultPath, link: &AudioLink) -> Result<(), LinkError> {
        let resolved = resolve_link(self.vault.as_ref(), link).await?;
        let text = self.transcribe_audio_at(&resolved.path, &resolved.name).await?;

        let block = TranscriptBlock::transcription(&resolved.name, &self.options.tag, &text);
        let mut content = String::new();
        if self.options.embed_audio_link {
            content.push_str(&format!("![[{}]]\n", resolved.name));
        }
        content.push_str(&block.render());

        let created = self
            .writer
            .create_transcription_note(origin.parent().as_ref(), &resolved.name, &content)
            .await?;
        self.workspace.open_note(&created).await;

        if self.options.add_link_to_original_file {
            let back =
                TranscriptBlock::link_back(&resolved.name, &self.options.tag, created.file_name());
            self.writer
                .append_below_marker(origin, link.as_str(), &back.render())
                .await?;
        }
        Ok(())
    }

    async fn link_into_note(&self, note: &VaultPath, link: &AudioLink) -> Result<(), LinkError> {
        let resolved = resolve_link(self.vault.as_ref(), link).await?;
        let text = self.transcribe_audio_at(&resolved.path, &resolved.name).await?;
        let block = TranscriptBlock::transcription(&resolved.name, &self.options.tag, &text);
        self.writer
            .append_below_marker(note, link.as_str(), &block.render())
            .await?;
        Ok(())
    }

    async fn file_to_new_note(&self, audio: &VaultPath, name: &str) -> Result<(), LinkError> {
        let text = self.transcribe_audio_at(audio, name).await?;

        let block = TranscriptBlock::transcription(name, &self.options.tag, &text);
        let mut content = String::new();
        if self.options.embed_audio_link {
            content.push_str(&format!("![[{name}]]\n"));
        }
        content.push_str(&block.render());

        let created = self
            .writer
            .create_transcription_note(audio.parent().as_ref(), name, &content)
            .await?;
        self.workspace.open_note(&created).await;
        Ok(())
    }

    /// Reads the audio bytes, transcribes them, and runs the optional
    /// cleanup pass. A cleanup failure is reported and the raw
    /// transcript is kept; a transcript is never lost to it.
    async fn transcribe_audio_at(
        &self,
        path: &VaultPath,
        file_name: &str,
    ) -> Result<String, LinkError> {
        let audio = self.vault.read_binary(path).await?;
        tracing::debug!(path = %path, bytes = audio.len(), "Read audio file");

        let text = self.engine.transcribe(&audio, file_name).await?;
        if text.is_empty() {
            return Err(LinkError::EmptyTranscript);
        }
        tracing::info!(path = %path, chars = text.len(), "Transcription completed");

        if !self.options.post_process {
            return Ok(text);
        }

        let instructions = if self.options.post_process_instructions.is_empty() {
            POST_PROCESS_PROMPT.to_string()
        } else {
            format!(
                "{POST_PROCESS_PROMPT}\n{}",
                self.options.post_process_instructions
            )
        };
        match self.llm_client.complete(&instructions, &text).await {
            Ok(cleaned) => Ok(cleaned),
            Err(e) => {
                tracing::warn!(error = %e, path = %path, "Post-processing failed");
                self.workspace.notify(&format!(
                    "Post-processing failed for {file_name}; keeping the raw transcript"
                ));
                Ok(text)
            }
        }
    }

    fn ensure_api_key(&self) -> bool {
        if self.options.api_key_set {
            return true;
        }
        tracing::warn!("Transcription requested without an API key");
        self.workspace.notify("OpenAI API key not set!");
        false
    }

    fn report_failure(&self, link: &str, error: &LinkError) {
        tracing::warn!(link = %link, error = %error, "Link processing failed");
        let notice = match error {
            LinkError::Resolve(ResolveError::NotFound(_)) => {
                format!("Audio file not found: {link}")
            }
            LinkError::Transcription(_) | LinkError::EmptyTranscript => {
                format!("Transcription failed for {link}")
            }
            LinkError::Resolve(ResolveError::Vault(_)) | LinkError::Vault(_) => {
                format!("An error occurred during transcription for {link}")
            }
        };
        self.workspace.notify(&notice);
    }
}

#[derive(Debug, thiserror::Error)]
enum LinkError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error("empty transcript returned")]
    EmptyTranscript,
}
