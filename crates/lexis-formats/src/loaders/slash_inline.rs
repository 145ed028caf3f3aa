use std::sync::LazyLock;

use lexis_core::dictionary::{Entry, SourceIndex, SourceParser};
use lexis_core::pronunciation::split_slashed;
use regex::Regex;

use super::index_lines;

// Headword, then either a `/` opening the pronunciation or two or more spaces
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\w\s'-]+?)\s*((?:/|\s{2,}).*)$").expect("Invalid slash inline record pattern")
});

/// `headword /pron/ definition`, pronunciation rewritten as `[pron]`
pub struct SlashInline;

impl SourceParser for SlashInline {
    fn name(&self) -> &'static str {
        "slash_inline"
    }

    fn parse(&self, text: &str) -> SourceIndex {
        index_lines(text, |line| {
            let caps = RECORD.captures(line)?;
            let headword = caps[1].trim().to_string();
            let (pronunciation, definition) = split_slashed(caps[2].trim());
            Some((headword, Entry::new(pronunciation, definition)))
        })
    }
}
