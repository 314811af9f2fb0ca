mod note_writer;
mod resolver;
mod transcription_service;

pub use note_writer::NoteWriter;
pub use resolver::{resolve_link, ResolveError};
pub use transcription_service::{BatchSummary, TranscriptionOptions, TranscriptionService};
