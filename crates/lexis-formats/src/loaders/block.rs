use std::sync::LazyLock;

use lexis_core::dictionary::{Entry, SourceIndex, SourceParser};
use lexis_core::pronunciation::bracket;
use regex::Regex;

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid block separator pattern"));

/// Blank-line separated blocks
///
/// ```text
/// headword
/// /pron/
/// definition line
/// definition line
/// ```
///
/// The pronunciation line is optional; definition lines are joined with spaces.
pub struct Block;

impl SourceParser for Block {
    fn name(&self) -> &'static str {
        "block"
    }

    fn parse(&self, text: &str) -> SourceIndex {
        let mut index = SourceIndex::new();

        for block in BLANK_LINE.split(text).map(str::trim).filter(|b| !b.is_empty()) {
            let lines: Vec<&str> = block.lines().map(str::trim).collect();
            let Some((headword, rest)) = lines.split_first() else {
                continue;
            };
            if headword.is_empty() {
                continue;
            }

            let (pronunciation, definition_lines) = match rest.split_first() {
                Some((first, tail)) if first.starts_with('/') && first.ends_with('/') => {
                    let inner = first.trim_matches(|c: char| c == ' ' || c == '/');
                    (Some(bracket(inner)), tail)
                }
                _ => (None, rest),
            };

            index.insert_merged(
                *headword,
                Entry::new(pronunciation, definition_lines.join(" ")),
            );
        }

        index
    }
}
