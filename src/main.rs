use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use notevox::application::ports::{Vault, Workspace};
use notevox::application::services::TranscriptionService;
use notevox::infrastructure::audio::OpenAiWhisperEngine;
use notevox::infrastructure::llm::OpenAiChatClient;
use notevox::infrastructure::observability::{init_tracing, TracingConfig};
use notevox::infrastructure::vault::FsVault;
use notevox::infrastructure::workspace::TermWorkspace;
use notevox::presentation::cli::{self, Cli, CommandDeps, Commands, NoteDestination};
use notevox::presentation::config::Settings;

fn build_deps(vault_root: &Path, settings: &Settings) -> anyhow::Result<CommandDeps> {
    let vault: Arc<dyn Vault> = Arc::new(FsVault::new(vault_root.to_path_buf())?);
    let workspace: Arc<dyn Workspace> = Arc::new(TermWorkspace);
    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.api_key.clone(),
        settings.transcription.base_url.clone(),
        Some(settings.transcription.model.clone()),
    ));
    let llm_client = Arc::new(OpenAiChatClient::new(
        settings.api_key.clone(),
        settings.llm.base_url.clone(),
        settings.post_process_model.clone(),
    ));
    let service = TranscriptionService::new(
        Arc::clone(&vault),
        Arc::clone(&workspace),
        engine,
        llm_client,
        settings.transcription_options(),
    );
    Ok(CommandDeps {
        vault,
        workspace,
        service,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.vault.join(".notevox.toml"));
    let settings = Settings::load(&config_path)?;

    init_tracing(TracingConfig {
        level: settings.logging.level.clone(),
        json_format: settings.logging.json,
    });
    tracing::debug!(vault = %cli.vault.display(), "Vault selected");

    match cli.command {
        Commands::Settings { action } => cli::run_settings_command(action, settings, &config_path),
        Commands::NewNote { note, all } => {
            let deps = build_deps(&cli.vault, &settings)?;
            cli::run_note_command(&deps, &note, all, NoteDestination::NewNotes).await
        }
        Commands::ActiveNote { note, all } => {
            let deps = build_deps(&cli.vault, &settings)?;
            cli::run_note_command(&deps, &note, all, NoteDestination::ActiveNote).await
        }
        Commands::File { audio, note } => {
            let deps = build_deps(&cli.vault, &settings)?;
            cli::run_file_command(&deps, &settings, &audio, note.as_deref()).await
        }
    }
}
