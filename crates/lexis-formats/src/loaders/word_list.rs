use std::sync::LazyLock;

use lexis_core::dictionary::{Entry, SourceIndex, SourceParser};
use lexis_core::pronunciation::split_bracketed;
use regex::Regex;

use super::index_lines;

// Optional `*` marker, headword, then at least two whitespace characters
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*?([\w\s.-]+?)\s{2,}(.*)$").expect("Invalid word list record pattern")
});

/// Vocabulary list: `headword  definition [pron] ...`
pub struct WordList;

impl SourceParser for WordList {
    fn name(&self) -> &'static str {
        "word_list"
    }

    fn parse(&self, text: &str) -> SourceIndex {
        index_lines(text, |line| {
            let caps = RECORD.captures(line)?;
            let headword = caps[1].trim().to_string();
            let (pronunciation, definition) = split_bracketed(caps[2].trim());
            Some((headword, Entry::new(pronunciation, definition)))
        })
    }
}
