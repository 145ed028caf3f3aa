use lexis_core::dictionary::{Entry, SourceIndex, SourceParser};
use lexis_core::pronunciation::split_slashed;

use super::index_lines;

/// Separator between headword and definition
pub const SEPARATOR: char = '⇒';

/// `headword⇒/pron/ definition`
pub struct Arrow;

impl SourceParser for Arrow {
    fn name(&self) -> &'static str {
        "arrow"
    }

    fn parse(&self, text: &str) -> SourceIndex {
        index_lines(text, |line| {
            let (headword, rest) = line.split_once(SEPARATOR)?;
            let (pronunciation, definition) = split_slashed(rest.trim());
            Some((headword.trim().to_string(), Entry::new(pronunciation, definition)))
        })
    }
}
