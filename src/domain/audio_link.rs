use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::vault_path::VaultPath;

/// Audio attachment formats the transcription API accepts.
pub const SUPPORTED_AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "webm", "wav", "ogg", "m4a"];

static EMBED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[\[([^\]]+\.(?i:mp3|webm|wav|ogg|m4a))\]\]").expect("embed pattern is valid")
});

/// The literal text captured between the brackets of an audio embed
/// marker, e.g. `recording.mp3` or `attachments/recording.mp3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioLink(String);

impl AudioLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename component of the link, with any folder prefix removed.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for AudioLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An audio link mapped to a concrete vault file. `name` is the display
/// name used in generated headings; `path` locates the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAudioFile {
    pub name: String,
    pub path: VaultPath,
}

/// Scans note text for `![[<name>.<ext>]]` audio embeds. Order of
/// appearance is preserved and duplicate markers produce duplicate
/// entries; zero matches is a valid result.
pub fn extract_audio_links(content: &str) -> Vec<AudioLink> {
    EMBED_PATTERN
        .captures_iter(content)
        .map(|caps| AudioLink::new(&caps[1]))
        .collect()
}

pub fn is_supported_audio_extension(extension: &str) -> bool {
    SUPPORTED_AUDIO_EXTENSIONS
        .iter()
        .any(|ext| extension.eq_ignore_ascii_case(ext))
}

/// Extension check on a full file name, mirroring the embed pattern's
/// allow-list.
pub fn is_supported_audio_file(file_name: &str) -> bool {
    match file_name.rfind('.') {
        Some(idx) => is_supported_audio_extension(&file_name[idx + 1..]),
        None => false,
    }
}
