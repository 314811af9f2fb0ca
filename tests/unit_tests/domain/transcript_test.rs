use notevox::domain::TranscriptBlock;

#[test]
fn given_tag_when_rendering_transcription_then_tag_line_sits_between_heading_and_body() {
    let block = TranscriptBlock::transcription("meeting.mp3", "#transcription", "hello world");

    assert_eq!(
        block.render(),
        "### Transcription for meeting.mp3\n#transcription\nhello world"
    );
}

#[test]
fn given_empty_tag_when_rendering_then_tag_line_is_omitted() {
    let block = TranscriptBlock::transcription("meeting.mp3", "", "hello world");

    assert_eq!(block.render(), "### Transcription for meeting.mp3\nhello world");
}

#[test]
fn given_note_name_when_rendering_link_back_then_md_suffix_is_stripped() {
    let block = TranscriptBlock::link_back("voice.m4a", "#transcription", "voice.m4a Transcription.md");

    assert_eq!(
        block.render(),
        "### Link to transcription for voice.m4a\n#transcription\n[[voice.m4a Transcription]]"
    );
}
