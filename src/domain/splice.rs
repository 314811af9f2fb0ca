/// Inserts `block` on its own lines immediately below the first
/// `![[link]]` marker in `content`, leaving every other byte untouched.
/// When the marker cannot be found (the link text may have been
/// transformed during resolution) the block is appended to the end of
/// the note instead, so generated content is never dropped.
pub fn splice_below_marker(content: &str, link: &str, block: &str) -> String {
    let marker = format!("![[{link}]]");
    match content.find(&marker) {
        Some(idx) => {
            let after = idx + marker.len();
            format!("{}\n{}\n{}", &content[..after], block, &content[after..])
        }
        None => format!("{content}\n\n{block}\n"),
    }
}
