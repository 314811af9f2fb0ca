use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::application::services::TranscriptionOptions;

/// The persisted settings record. Every key has a default, so a missing
/// or partial settings file always yields a usable record; environment
/// variables prefixed `NOTEVOX_` override the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub transcribe_to_new_note: bool,
    pub add_link_to_original_file: bool,
    pub embed_audio_link: bool,
    pub tag: String,
    pub post_process: bool,
    pub post_process_model: String,
    pub post_process_instructions: String,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            transcribe_to_new_note: false,
            add_link_to_original_file: true,
            embed_audio_link: false,
            tag: "#transcription".to_string(),
            post_process: false,
            post_process_model: "gpt-4o-mini".to_string(),
            post_process_instructions: String::new(),
            transcription: TranscriptionSettings::default(),
            llm: LlmSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("NOTEVOX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Writes the full record back as TOML, the settings-tab analogue.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let rendered = toml::to_string_pretty(self)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Updates one of the user-facing keys from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key {
            "api_key" => self.api_key = value.to_string(),
            "transcribe_to_new_note" => self.transcribe_to_new_note = parse_bool(key, value)?,
            "add_link_to_original_file" => {
                self.add_link_to_original_file = parse_bool(key, value)?;
            }
            "embed_audio_link" => self.embed_audio_link = parse_bool(key, value)?,
            "tag" => self.tag = value.to_string(),
            "post_process" => self.post_process = parse_bool(key, value)?,
            "post_process_model" => self.post_process_model = value.to_string(),
            "post_process_instructions" => self.post_process_instructions = value.to_string(),
            other => return Err(SettingsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn transcription_options(&self) -> TranscriptionOptions {
        TranscriptionOptions {
            api_key_set: !self.api_key.is_empty(),
            add_link_to_original_file: self.add_link_to_original_file,
            embed_audio_link: self.embed_audio_link,
            tag: self.tag.clone(),
            post_process: self.post_process,
            post_process_instructions: self.post_process_instructions.clone(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
