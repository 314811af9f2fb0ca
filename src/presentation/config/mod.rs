mod settings;

pub use settings::{
    LlmSettings, LoggingSettings, Settings, SettingsError, TranscriptionSettings,
};
