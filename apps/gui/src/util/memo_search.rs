use tome_core::{SearchFilter, SearchHit, Workspace, search};

/// Caches the hit list of the last query. A scan only re-runs when one of
/// its inputs changes: the query text, the active filter, or the workspace
/// revision counter.
#[derive(Default)]
pub struct MemoizedSearch {
    query: String,
    filter: SearchFilter,
    revision: u64,
    valid: bool,
    hits: Vec<SearchHit>,
}

impl MemoizedSearch {
    pub fn results(
        &mut self,
        workspace: &Workspace,
        query: &str,
        filter: SearchFilter,
    ) -> &[SearchHit] {
        let stale = !self.valid
            || self.query != query
            || self.filter != filter
            || self.revision != workspace.revision();

        if stale {
            self.hits = search(workspace, query, filter);
            self.query = query.to_owned();
            self.filter = filter;
            self.revision = workspace.revision();
            self.valid = true;
        }

        &self.hits
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tome_core::{Document, SourceKind};

    fn doc(id: &str, name: &str, content: &str) -> Document {
        let kind = SourceKind::file(name);
        Document::new(id, name, content, kind, "1 KB", "2024-01-01T00:00:00Z")
    }

    #[test]
    fn results_follow_workspace_mutations() {
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "notes.txt", "rust in the morning"));

        let mut memo = MemoizedSearch::default();
        assert_eq!(memo.results(&ws, "rust", SearchFilter::All).len(), 1);

        ws.add_document(doc("d2", "more.txt", "rust in the evening"));
        assert_eq!(memo.results(&ws, "rust", SearchFilter::All).len(), 2);
    }

    #[test]
    fn filter_change_invalidates_cache() {
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "notes.txt", "rust in the morning"));

        let mut memo = MemoizedSearch::default();
        assert_eq!(memo.results(&ws, "rust", SearchFilter::All).len(), 1);
        assert_eq!(memo.results(&ws, "rust", SearchFilter::Chat).len(), 0);
        assert_eq!(memo.results(&ws, "rust", SearchFilter::Documents).len(), 1);
    }
}
