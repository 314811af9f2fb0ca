use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::application::ports::{Vault, VaultError, Workspace};
use crate::application::services::TranscriptionService;
use crate::domain::{extract_audio_links, is_supported_audio_file, AudioLink, VaultPath};
use crate::presentation::config::Settings;
use crate::presentation::dialog::run_selection;

#[derive(Parser)]
#[command(name = "notevox", version, about = "Transcribe audio embeds in a Markdown vault")]
pub struct Cli {
    /// Vault root directory
    #[arg(long, default_value = ".")]
    pub vault: std::path::PathBuf,

    /// Settings file (defaults to .notevox.toml in the vault root)
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transcribe the audio links of a note into new transcription notes
    NewNote {
        /// Vault-relative path of the note to scan
        note: String,
        /// Skip the selection dialog and take every link
        #[arg(long)]
        all: bool,
    },
    /// Append transcriptions below the audio links inside the note itself
    ActiveNote {
        /// Vault-relative path of the note to scan
        note: String,
        /// Skip the selection dialog and take every link
        #[arg(long)]
        all: bool,
    },
    /// Transcribe a single audio file; the destination follows the settings
    File {
        /// Vault-relative path of the audio file
        audio: String,
        /// Note receiving the transcript when not transcribing to a new note
        #[arg(long)]
        note: Option<String>,
    },
    /// Show or change the persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the effective settings record
    Show,
    /// Persist one settings key
    Set { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteDestination {
    NewNotes,
    ActiveNote,
}

/// Everything a note/file command needs: the vault, the workspace, and
/// the wired pipeline service.
pub struct CommandDeps {
    pub vault: Arc<dyn Vault>,
    pub workspace: Arc<dyn Workspace>,
    pub service: TranscriptionService,
}

/// Scans `note` for audio embeds, lets the user narrow the batch when
/// more than one is found, and runs the pipeline toward `destination`.
pub async fn run_note_command(
    deps: &CommandDeps,
    note: &str,
    all: bool,
    destination: NoteDestination,
) -> anyhow::Result<()> {
    let note = VaultPath::new(note);
    let content = match deps.vault.read_note(&note).await {
        Ok(content) => content,
        Err(VaultError::NotFound(_)) => {
            deps.workspace
                .notify(&format!("Active note not found: {note}"));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let links = extract_audio_links(&content);
    if links.is_empty() {
        deps.workspace.notify("No audio links found in the note!");
        return Ok(());
    }

    let selected: Vec<AudioLink> = if links.len() == 1 || all {
        links
    } else {
        let labels = links.iter().map(|link| link.as_str().to_string()).collect();
        let stdin = io::stdin();
        match run_selection(labels, stdin.lock(), io::stderr())? {
            Some(chosen) => chosen.into_iter().map(AudioLink::new).collect(),
            None => return Ok(()),
        }
    };
    if selected.is_empty() {
        deps.workspace.notify("No audio files selected.");
        return Ok(());
    }

    let summary = match destination {
        NoteDestination::NewNotes => deps.service.transcribe_to_new_notes(&note, &selected).await,
        NoteDestination::ActiveNote => deps.service.transcribe_into_note(&note, &selected).await,
    };
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch finished"
    );
    Ok(())
}

/// Context-menu analogue: transcribe one audio file, into a new note or
/// into the given note depending on the persisted setting.
pub async fn run_file_command(
    deps: &CommandDeps,
    settings: &Settings,
    audio: &str,
    note: Option<&str>,
) -> anyhow::Result<()> {
    let audio = VaultPath::new(audio);
    if !is_supported_audio_file(audio.file_name()) {
        deps.workspace
            .notify(&format!("Unsupported audio file: {audio}"));
        return Ok(());
    }
    if !deps.vault.exists(&audio).await? {
        deps.workspace
            .notify(&format!("Audio file not found: {audio}"));
        return Ok(());
    }

    if settings.transcribe_to_new_note {
        deps.service.transcribe_file_to_new_note(&audio).await;
        return Ok(());
    }

    match note {
        Some(note) => {
            let note = VaultPath::new(note);
            if !deps.vault.exists(&note).await? {
                deps.workspace
                    .notify(&format!("Active note not found: {note}"));
                return Ok(());
            }
            deps.service.append_file_transcription(&audio, &note).await;
        }
        None => deps.workspace.notify(
            "No active note! Pass --note, or enable transcribe_to_new_note in the settings.",
        ),
    }
    Ok(())
}

pub fn run_settings_command(
    action: SettingsAction,
    mut settings: Settings,
    config_path: &Path,
) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        SettingsAction::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(config_path)?;
            println!("Updated {key}");
        }
    }
    Ok(())
}
