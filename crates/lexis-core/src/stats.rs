use crate::types::{ResolvedEntry, SourceTag};

/// Counters reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub redirects: usize,
}

impl Summary {
    pub fn record(&mut self, entry: &ResolvedEntry) {
        self.total += 1;
        match entry.source {
            SourceTag::Rank(_) => self.matched += 1,
            SourceTag::Redirect => self.redirects += 1,
            SourceTag::None => {}
        }
    }

    pub fn unmatched(&self) -> usize {
        self.total - self.matched - self.redirects
    }
}
