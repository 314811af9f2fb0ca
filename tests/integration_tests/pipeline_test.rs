use std::sync::{Arc, Mutex};

use notevox::application::ports::{
    LlmClient, LlmClientError, TranscriptionEngine, TranscriptionError, Workspace,
};
use notevox::application::services::{TranscriptionOptions, TranscriptionService};
use notevox::domain::{extract_audio_links, VaultPath};
use notevox::infrastructure::vault::FsVault;

struct FixedEngine(&'static str);

#[async_trait::async_trait]
impl TranscriptionEngine for FixedEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(self.0.to_string())
    }
}

struct NoopLlm;

#[async_trait::async_trait]
impl LlmClient for NoopLlm {
    async fn complete(
        &self,
        _instructions: &str,
        transcript: &str,
    ) -> Result<String, LlmClientError> {
        Ok(transcript.to_string())
    }
}

#[derive(Default)]
struct RecordingWorkspace {
    opened: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Workspace for RecordingWorkspace {
    fn notify(&self, _message: &str) {}

    async fn open_note(&self, path: &VaultPath) {
        self.opened.lock().unwrap().push(path.to_string());
    }
}

fn options() -> TranscriptionOptions {
    TranscriptionOptions {
        api_key_set: true,
        add_link_to_original_file: true,
        embed_audio_link: false,
        tag: "#transcription".to_string(),
        post_process: false,
        post_process_instructions: String::new(),
    }
}

#[tokio::test]
async fn given_on_disk_vault_when_transcribing_to_new_notes_then_files_and_link_back_appear() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("attachments")).unwrap();
    std::fs::write(dir.path().join("rec.md"), "log ![[voice.m4a]] end").unwrap();
    std::fs::write(dir.path().join("attachments/voice.m4a"), b"fake audio").unwrap();

    let vault = Arc::new(FsVault::new(dir.path().to_path_buf()).unwrap());
    let workspace = Arc::new(RecordingWorkspace::default());
    let service = TranscriptionService::new(
        vault,
        workspace.clone(),
        Arc::new(FixedEngine("hello world")),
        Arc::new(NoopLlm),
        options(),
    );

    let note = VaultPath::new("rec.md");
    let links = extract_audio_links("log ![[voice.m4a]] end");
    let summary = service.transcribe_to_new_notes(&note, &links).await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 0);

    let created = dir.path().join("voice.m4a Transcription.md");
    assert_eq!(
        std::fs::read_to_string(created).unwrap(),
        "### Transcription for voice.m4a\n#transcription\nhello world"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("rec.md")).unwrap(),
        "log ![[voice.m4a]]\n### Link to transcription for voice.m4a\n#transcription\n[[voice.m4a Transcription]]\n end"
    );
    assert_eq!(
        workspace.opened.lock().unwrap().clone(),
        vec!["voice.m4a Transcription.md".to_string()]
    );
}

#[tokio::test]
async fn given_existing_transcription_note_when_transcribing_again_then_original_survives() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("rec.md"), "![[clip.mp3]]").unwrap();
    std::fs::write(dir.path().join("clip.mp3"), b"fake audio").unwrap();
    std::fs::write(dir.path().join("clip.mp3 Transcription.md"), "first run").unwrap();

    let vault = Arc::new(FsVault::new(dir.path().to_path_buf()).unwrap());
    let workspace = Arc::new(RecordingWorkspace::default());
    let mut opts = options();
    opts.add_link_to_original_file = false;
    let service = TranscriptionService::new(
        vault,
        workspace,
        Arc::new(FixedEngine("second run")),
        Arc::new(NoopLlm),
        opts,
    );

    let summary = service
        .transcribe_to_new_notes(&VaultPath::new("rec.md"), &extract_audio_links("![[clip.mp3]]"))
        .await;

    assert_eq!(summary.succeeded, 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("clip.mp3 Transcription.md")).unwrap(),
        "first run"
    );

    // Exactly one extra, timestamp-suffixed note holds the new run.
    let extra: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("clip.mp3 Transcription ") && name.ends_with(".md"))
        .collect();
    assert_eq!(extra.len(), 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join(&extra[0])).unwrap(),
        "second run"
    );
}
