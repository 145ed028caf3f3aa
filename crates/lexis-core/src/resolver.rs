use crate::dictionary::SourceIndex;
use crate::types::{MasterList, REDIRECT_GLYPH, REDIRECT_MARKER, ResolvedEntry, SourceTag};

/// Resolves master-list lines against ranked source indexes
///
/// Sources are tried in ascending rank and the first index holding the
/// headword is authoritative. Definitions are never merged across sources.
#[derive(Debug, Default)]
pub struct Resolver {
    sources: Vec<(u8, SourceIndex)>,
}

impl Resolver {
    /// Build from `(rank, index)` pairs in any order
    pub fn new(sources: impl IntoIterator<Item = (u8, SourceIndex)>) -> Self {
        let mut sources: Vec<(u8, SourceIndex)> = sources.into_iter().collect();
        sources.sort_by_key(|(rank, _)| *rank);
        Self { sources }
    }

    /// Ranks that take part in resolution, ascending
    pub fn ranks(&self) -> Vec<u8> {
        self.sources.iter().map(|(rank, _)| *rank).collect()
    }

    /// Resolve a single master-list line
    pub fn resolve_line(&self, line: &str) -> ResolvedEntry {
        if line.contains(REDIRECT_MARKER) {
            return resolve_redirect(line);
        }

        let headword = line.trim();
        let hit = self
            .sources
            .iter()
            .find_map(|(rank, index)| index.get(headword).map(|entry| (*rank, entry)));

        match hit {
            Some((rank, entry)) => ResolvedEntry {
                headword: headword.to_string(),
                pronunciation: entry.pronunciation.clone(),
                definition: Some(entry.definition.clone()),
                source: SourceTag::Rank(rank),
                line: line.to_string(),
            },
            None => ResolvedEntry {
                headword: headword.to_string(),
                pronunciation: None,
                definition: None,
                source: SourceTag::None,
                line: line.to_string(),
            },
        }
    }

    /// Lazily resolve every line of the master list, in order
    pub fn resolve<'a>(
        &'a self,
        master: &'a MasterList,
    ) -> impl Iterator<Item = ResolvedEntry> + 'a {
        master.lines().iter().map(|line| self.resolve_line(line))
    }
}

fn resolve_redirect(line: &str) -> ResolvedEntry {
    let (headword, target) = line.split_once(REDIRECT_GLYPH).unwrap_or((line, ""));

    ResolvedEntry {
        headword: headword.trim().to_string(),
        pronunciation: None,
        definition: Some(format!("{REDIRECT_GLYPH}{}", target.trim())),
        source: SourceTag::Redirect,
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Entry;

    fn index(records: &[(&str, Option<&str>, &str)]) -> SourceIndex {
        let mut index = SourceIndex::new();
        for (headword, pron, def) in records {
            index.insert_merged(*headword, Entry::new(pron.map(str::to_string), *def));
        }
        index
    }

    #[test]
    fn test_single_source_hit() {
        let resolver = Resolver::new([(3, index(&[("apple", Some("[ˈæpl]"), "n. 苹果")]))]);
        let entry = resolver.resolve_line("apple");

        assert_eq!(entry.headword, "apple");
        assert_eq!(entry.pronunciation.as_deref(), Some("[ˈæpl]"));
        assert_eq!(entry.definition.as_deref(), Some("n. 苹果"));
        assert_eq!(entry.source, SourceTag::Rank(3));
    }

    #[test]
    fn test_lower_rank_wins_and_scan_stops() {
        let resolver = Resolver::new([
            (4, index(&[("bank", Some("[bæŋk]"), "from four")])),
            (2, index(&[("bank", None, "from two")])),
        ]);
        let entry = resolver.resolve_line("bank");

        assert_eq!(entry.source, SourceTag::Rank(2));
        assert_eq!(entry.definition.as_deref(), Some("from two"));
        // No pronunciation borrowed from the lower-priority source
        assert_eq!(entry.pronunciation, None);
    }

    #[test]
    fn test_falls_through_to_later_rank() {
        let resolver = Resolver::new([
            (2, index(&[("other", None, "x")])),
            (5, index(&[("cat", Some("[kæt]"), "a small domesticated feline")])),
        ]);
        let entry = resolver.resolve_line("cat");
        assert_eq!(entry.source, SourceTag::Rank(5));
    }

    #[test]
    fn test_not_found() {
        let resolver = Resolver::new([(2, index(&[("cat", None, "x")]))]);
        let entry = resolver.resolve_line("dog");

        assert_eq!(entry.source, SourceTag::None);
        assert_eq!(entry.pronunciation, None);
        assert_eq!(entry.definition, None);
    }

    #[test]
    fn test_redirect_ignores_indexes() {
        let resolver = Resolver::new([(2, index(&[("xyzzy", Some("[x]"), "indexed")]))]);
        let entry = resolver.resolve_line("xyzzy►@@@LINK=see foo");

        assert_eq!(entry.headword, "xyzzy");
        assert_eq!(entry.pronunciation, None);
        assert_eq!(entry.definition.as_deref(), Some("►@@@LINK=see foo"));
        assert_eq!(entry.source, SourceTag::Redirect);
        assert_eq!(entry.line, "xyzzy►@@@LINK=see foo");
    }

    #[test]
    fn test_redirect_splits_on_first_glyph() {
        let entry = Resolver::default().resolve_line("colour ►@@@LINK=color ►extra");
        assert_eq!(entry.headword, "colour");
        assert_eq!(entry.definition.as_deref(), Some("►@@@LINK=color ►extra"));
    }

    #[test]
    fn test_glyph_without_marker_is_a_lookup() {
        let resolver = Resolver::new([(2, index(&[("a►b", None, "odd")]))]);
        let entry = resolver.resolve_line("a►b");
        assert_eq!(entry.source, SourceTag::Rank(2));
    }

    #[test]
    fn test_resolve_preserves_order_and_duplicates() {
        let resolver = Resolver::new([(2, index(&[("a", None, "1"), ("b", None, "2")]))]);
        let master: MasterList = ["b", "missing", "a", "b"].into_iter().collect();

        let tags: Vec<(String, SourceTag)> = resolver
            .resolve(&master)
            .map(|e| (e.headword, e.source))
            .collect();

        assert_eq!(
            tags,
            vec![
                ("b".to_string(), SourceTag::Rank(2)),
                ("missing".to_string(), SourceTag::None),
                ("a".to_string(), SourceTag::Rank(2)),
                ("b".to_string(), SourceTag::Rank(2)),
            ]
        );
    }

    #[test]
    fn test_ranks_sorted() {
        let resolver = Resolver::new([
            (5, SourceIndex::new()),
            (2, SourceIndex::new()),
            (3, SourceIndex::new()),
        ]);
        assert_eq!(resolver.ranks(), vec![2, 3, 5]);
    }
}
