use lexis_core::dictionary::{Entry, SourceIndex, SourceParser};
use lexis_core::types::SourceFormat;

pub mod arrow;
pub mod block;
pub mod bracket_inline;
pub mod slash_inline;
pub mod word_list;

pub use arrow::Arrow;
pub use block::Block;
pub use bracket_inline::BracketInline;
pub use slash_inline::SlashInline;
pub use word_list::WordList;

/// Parser implementing the given grammar
pub fn parser_for(format: SourceFormat) -> &'static dyn SourceParser {
    match format {
        SourceFormat::WordList => &WordList,
        SourceFormat::SlashInline => &SlashInline,
        SourceFormat::BracketInline => &BracketInline,
        SourceFormat::Block => &Block,
        SourceFormat::Arrow => &Arrow,
    }
}

/// Index a one-record-per-line source
///
/// Lines are trimmed; blank lines, lines `record` rejects and records with an
/// empty headword are skipped.
fn index_lines<F>(text: &str, record: F) -> SourceIndex
where
    F: Fn(&str) -> Option<(String, Entry)>,
{
    let mut index = SourceIndex::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((headword, entry)) = record(line) {
            if !headword.is_empty() {
                index.insert_merged(headword, entry);
            }
        }
    }

    index
}
