use serde::{Deserialize, Serialize, Serializer};

/// Marker that identifies a redirect line in the master list
pub const REDIRECT_MARKER: &str = "►@@@LINK";

/// Glyph a redirect line is split on
pub const REDIRECT_GLYPH: char = '►';

/// Grammar a source text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Headword, two or more spaces, definition with a `[...]` pronunciation
    WordList,
    /// Headword followed by a `/.../` pronunciation or two or more spaces
    SlashInline,
    /// Headword followed by a `[...]` pronunciation or two or more spaces
    BracketInline,
    /// Blank-line separated blocks, headword first, optional `/.../` line second
    Block,
    /// `headword⇒definition` with a `/.../` pronunciation
    Arrow,
}

/// Where a resolved entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    /// No enabled source has the headword
    None,
    /// The master line was a cross-reference
    Redirect,
    /// Priority rank of the source that satisfied the lookup (1 = first tried)
    Rank(u8),
}

impl Serialize for SourceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SourceTag::None => serializer.serialize_u8(0),
            SourceTag::Redirect => serializer.serialize_str("redirect"),
            SourceTag::Rank(rank) => serializer.serialize_u8(*rank),
        }
    }
}

/// Final record for one master-list line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub headword: String,
    pub pronunciation: Option<String>,
    pub definition: Option<String>,
    pub source: SourceTag,
    /// Master line this entry was resolved from
    #[serde(skip)]
    pub line: String,
}

/// Ordered headword lines from the authoritative list
///
/// Lines are trimmed and blank lines dropped; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterList {
    lines: Vec<String>,
}

impl MasterList {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for MasterList {
    /// Each item is one line: trimmed, dropped if blank, never split
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_list_trims_and_keeps_duplicates() {
        let list = MasterList::from_text("  cat \n\n dog\r\ncat\n   \n");
        assert_eq!(list.lines(), ["cat", "dog", "cat"]);
    }

    #[test]
    fn test_source_tag_serialization() {
        assert_eq!(serde_json::to_value(SourceTag::None).unwrap(), serde_json::json!(0));
        assert_eq!(
            serde_json::to_value(SourceTag::Redirect).unwrap(),
            serde_json::json!("redirect")
        );
        assert_eq!(serde_json::to_value(SourceTag::Rank(3)).unwrap(), serde_json::json!(3));
    }

    #[test]
    fn test_resolved_entry_record_omits_line() {
        let entry = ResolvedEntry {
            headword: "cat".into(),
            pronunciation: None,
            definition: None,
            source: SourceTag::None,
            line: "cat".into(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "headword": "cat",
                "pronunciation": null,
                "definition": null,
                "source": 0,
            })
        );
    }

    #[test]
    fn test_master_list_from_items_keeps_one_line_per_item() {
        let list: MasterList = [" cat ", "", "two\nlines", "   ", "dog"].into_iter().collect();
        assert_eq!(list.lines(), ["cat", "two\nlines", "dog"]);
    }

    #[test]
    fn test_source_format_names() {
        for (format, name) in [
            (SourceFormat::WordList, "word_list"),
            (SourceFormat::SlashInline, "slash_inline"),
            (SourceFormat::BracketInline, "bracket_inline"),
            (SourceFormat::Block, "block"),
            (SourceFormat::Arrow, "arrow"),
        ] {
            assert_eq!(serde_json::to_value(format).unwrap(), serde_json::json!(name));
            let parsed: SourceFormat = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(parsed, format);
        }
        assert!(serde_json::from_value::<SourceFormat>(serde_json::json!("csv")).is_err());
    }
}
