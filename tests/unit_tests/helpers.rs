use std::sync::Mutex;

use notevox::application::ports::{
    LlmClient, LlmClientError, TranscriptionEngine, TranscriptionError, Vault, VaultError,
    Workspace,
};
use notevox::application::services::TranscriptionOptions;
use notevox::domain::VaultPath;

/// In-memory vault preserving insertion order, so "first match in
/// enumeration order" is deterministic in tests.
pub struct MockVault {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn with_files(files: &[(&str, &[u8])]) -> Self {
        Self {
            files: Mutex::new(
                files
                    .iter()
                    .map(|(path, data)| (path.to_string(), data.to_vec()))
                    .collect(),
            ),
        }
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| String::from_utf8(data.clone()).unwrap())
    }
}

#[async_trait::async_trait]
impl Vault for MockVault {
    async fn read_note(&self, path: &VaultPath) -> Result<String, VaultError> {
        let bytes = self.read_binary(path).await?;
        String::from_utf8(bytes).map_err(|e| VaultError::ReadFailed(e.to_string()))
    }

    async fn write_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError> {
        let mut files = self.files.lock().unwrap();
        match files.iter_mut().find(|(p, _)| p == path.as_str()) {
            Some((_, data)) => *data = content.as_bytes().to_vec(),
            None => files.push((path.as_str().to_string(), content.as_bytes().to_vec())),
        }
        Ok(())
    }

    async fn create_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError> {
        let mut files = self.files.lock().unwrap();
        if files.iter().any(|(p, _)| p == path.as_str()) {
            return Err(VaultError::AlreadyExists(path.to_string()));
        }
        files.push((path.as_str().to_string(), content.as_bytes().to_vec()));
        Ok(())
    }

    async fn exists(&self, path: &VaultPath) -> Result<bool, VaultError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .any(|(p, _)| p == path.as_str()))
    }

    async fn list_files(&self) -> Result<Vec<VaultPath>, VaultError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _)| VaultPath::new(p.clone()))
            .collect())
    }

    async fn read_binary(&self, path: &VaultPath) -> Result<Vec<u8>, VaultError> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path.as_str())
            .map(|(_, data)| data.clone())
            .ok_or_else(|| VaultError::NotFound(path.to_string()))
    }
}

/// Records notices and opened notes instead of talking to a terminal.
#[derive(Default)]
pub struct MockWorkspace {
    pub notices: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
}

impl MockWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Workspace for MockWorkspace {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    async fn open_note(&self, path: &VaultPath) {
        self.opened.lock().unwrap().push(path.to_string());
    }
}

/// Engine returning a fixed transcript and recording the file names it
/// was asked about.
pub struct FixedEngine {
    text: String,
    pub calls: Mutex<Vec<String>>,
}

impl FixedEngine {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for FixedEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        self.calls.lock().unwrap().push(file_name.to_string());
        Ok(self.text.clone())
    }
}

pub struct FailingEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for FailingEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed("boom".to_string()))
    }
}

/// Cleanup pass that uppercases, so post-processed output is
/// distinguishable from the raw transcript.
pub struct UppercaseLlm;

#[async_trait::async_trait]
impl LlmClient for UppercaseLlm {
    async fn complete(
        &self,
        _instructions: &str,
        transcript: &str,
    ) -> Result<String, LlmClientError> {
        Ok(transcript.to_uppercase())
    }
}

pub struct FailingLlm;

#[async_trait::async_trait]
impl LlmClient for FailingLlm {
    async fn complete(
        &self,
        _instructions: &str,
        _transcript: &str,
    ) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed("llm down".to_string()))
    }
}

pub fn default_options() -> TranscriptionOptions {
    TranscriptionOptions {
        api_key_set: true,
        add_link_to_original_file: true,
        embed_audio_link: false,
        tag: "#transcription".to_string(),
        post_process: false,
        post_process_instructions: String::new(),
    }
}
