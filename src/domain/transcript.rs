#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Transcription,
    LinkBack,
}

/// A generated block of note text: a level-3 heading naming the source
/// audio file, an optional tag line, and a body (the transcript itself,
/// or a link to the note holding it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptBlock {
    kind: BlockKind,
    audio_name: String,
    tag: String,
    body: String,
}

impl TranscriptBlock {
    pub fn transcription(audio_name: &str, tag: &str, text: &str) -> Self {
        Self {
            kind: BlockKind::Transcription,
            audio_name: audio_name.to_string(),
            tag: tag.to_string(),
            body: text.to_string(),
        }
    }

    /// A block pointing at the note that holds the transcript. The
    /// `.md` suffix is stripped so the body is a plain `[[note]]` link.
    pub fn link_back(audio_name: &str, tag: &str, note_name: &str) -> Self {
        let target = note_name.strip_suffix(".md").unwrap_or(note_name);
        Self {
            kind: BlockKind::LinkBack,
            audio_name: audio_name.to_string(),
            tag: tag.to_string(),
            body: format!("[[{target}]]"),
        }
    }

    pub fn heading(&self) -> String {
        match self.kind {
            BlockKind::Transcription => format!("### Transcription for {}", self.audio_name),
            BlockKind::LinkBack => format!("### Link to transcription for {}", self.audio_name),
        }
    }

    pub fn render(&self) -> String {
        let mut out = self.heading();
        if !self.tag.is_empty() {
            out.push('\n');
            out.push_str(&self.tag);
        }
        out.push('\n');
        out.push_str(&self.body);
        out
    }
}
