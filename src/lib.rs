//! Transcribes audio embeds found in the Markdown notes of a vault and
//! writes the transcripts back, either below the embed or into new notes.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
