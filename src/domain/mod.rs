mod audio_link;
mod splice;
mod transcript;
mod vault_path;

pub use audio_link::{
    extract_audio_links, is_supported_audio_extension, is_supported_audio_file, AudioLink,
    ResolvedAudioFile, SUPPORTED_AUDIO_EXTENSIONS,
};
pub use splice::splice_below_marker;
pub use transcript::TranscriptBlock;
pub use vault_path::VaultPath;
