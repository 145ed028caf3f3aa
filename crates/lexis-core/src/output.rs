use crate::types::{ResolvedEntry, SourceTag};

/// Render the human-readable line for a resolved entry
///
/// Redirect lines are echoed verbatim; found entries carry their source rank.
pub fn text_line(entry: &ResolvedEntry) -> String {
    match entry.source {
        SourceTag::Redirect => entry.line.clone(),
        SourceTag::Rank(rank) => {
            let definition = entry.definition.as_deref().unwrap_or_default();
            let body = match entry.pronunciation.as_deref().filter(|p| !p.is_empty()) {
                Some(pron) => format!("{pron} ※ {definition}").trim().to_string(),
                None => definition.to_string(),
            };
            format!("{} ⇒ {body} 〇〈{rank}〉", entry.headword)
        }
        SourceTag::None => format!("{} <Not Found>", entry.headword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pron: Option<&str>, def: Option<&str>, source: SourceTag) -> ResolvedEntry {
        ResolvedEntry {
            headword: "cat".into(),
            pronunciation: pron.map(str::to_string),
            definition: def.map(str::to_string),
            source,
            line: "cat".into(),
        }
    }

    #[test]
    fn test_found_with_pronunciation() {
        let e = entry(Some("[kæt]"), Some("a small domesticated feline"), SourceTag::Rank(5));
        assert_eq!(text_line(&e), "cat ⇒ [kæt] ※ a small domesticated feline 〇〈5〉");
    }

    #[test]
    fn test_found_without_pronunciation() {
        let e = entry(None, Some("n. 猫"), SourceTag::Rank(2));
        assert_eq!(text_line(&e), "cat ⇒ n. 猫 〇〈2〉");
    }

    #[test]
    fn test_found_with_empty_definition() {
        let e = entry(Some("[kæt]"), Some(""), SourceTag::Rank(4));
        assert_eq!(text_line(&e), "cat ⇒ [kæt] ※ 〇〈4〉");
    }

    #[test]
    fn test_not_found() {
        let e = entry(None, None, SourceTag::None);
        assert_eq!(text_line(&e), "cat <Not Found>");
    }

    #[test]
    fn test_redirect_echoes_line() {
        let e = ResolvedEntry {
            headword: "xyzzy".into(),
            pronunciation: None,
            definition: Some("►@@@LINK=see foo".into()),
            source: SourceTag::Redirect,
            line: "xyzzy►@@@LINK=see foo".into(),
        };
        assert_eq!(text_line(&e), "xyzzy►@@@LINK=see foo");
    }
}
