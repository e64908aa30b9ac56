// tome-core/src/search.rs
//! Unified content search.
//!
//! A pure function of the three collections plus query and filter: scans
//! documents, notes and chat messages for a case-insensitive literal
//! substring and returns one combined result list, most recent first. No
//! side effects, no failure modes — an unparseable timestamp just sorts as
//! the Unix epoch.

use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::highlight::{content_preview, match_ranges};
use crate::model::{ChatMessage, Document, MessageAuthor, Note};
use crate::store::Workspace;

/// Which collections a search scans.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumIter,
    EnumCount,
)]
pub enum SearchFilter {
    #[default]
    All,
    Documents,
    Notes,
    Chat,
}

impl SearchFilter {
    /// Parse one of the four category labels. Anything else yields `None`,
    /// which callers treat as "no category matches" (an empty result set).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "all" => Some(SearchFilter::All),
            "documents" => Some(SearchFilter::Documents),
            "notes" => Some(SearchFilter::Notes),
            "chat" => Some(SearchFilter::Chat),
            _ => None,
        }
    }

    fn includes(&self, kind: ResultKind) -> bool {
        match self {
            SearchFilter::All => true,
            SearchFilter::Documents => kind == ResultKind::Document,
            SearchFilter::Notes => kind == ResultKind::Note,
            SearchFilter::Chat => kind == ResultKind::Chat,
        }
    }
}

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ResultKind {
    Document,
    Note,
    Chat,
}

/// One search hit: an ephemeral projection of a source entity, recomputed on
/// every query change. Holds no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    /// Content truncated to the first 200 characters (plus "..." if cut).
    pub preview: String,
    /// Byte spans over `preview` covering each occurrence of the query.
    pub match_ranges: Vec<Range<usize>>,
    /// Category-specific descriptive line.
    pub metadata: String,
    /// Copied from the source entity; drives the ordering.
    pub timestamp: String,
}

/// Scan all three collections for `query` under `filter`, most recent first.
///
/// An empty or whitespace-only query returns an empty list without scanning
/// anything — distinct from a scan with zero matches.
pub fn search(workspace: &Workspace, query: &str, filter: SearchFilter) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits = Vec::new();

    if filter.includes(ResultKind::Document) {
        for doc in workspace.documents() {
            if contains(&doc.name, &needle) || contains(&doc.content, &needle) {
                hits.push(document_hit(doc, query));
            }
        }
    }

    if filter.includes(ResultKind::Note) {
        for note in workspace.notes() {
            if contains(&note.title, &needle) || contains(&note.content, &needle) {
                hits.push(note_hit(note, query));
            }
        }
    }

    if filter.includes(ResultKind::Chat) {
        for message in workspace.chat_messages() {
            if contains(&message.content, &needle) {
                hits.push(chat_hit(message, query));
            }
        }
    }

    tracing::debug!(query, %filter, count = hits.len(), "search scan complete");

    sort_most_recent_first(hits)
}

/// `needle` must already be lowercased.
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn document_hit(doc: &Document, query: &str) -> SearchHit {
    let preview = content_preview(&doc.content);
    let match_ranges = match_ranges(&preview, query);
    SearchHit {
        kind: ResultKind::Document,
        id: doc.id.clone(),
        title: doc.name.clone(),
        preview,
        match_ranges,
        metadata: format!("{} • {}", doc.kind.label(), doc.size),
        timestamp: doc.upload_date.clone(),
    }
}

fn note_hit(note: &Note, query: &str) -> SearchHit {
    let preview = content_preview(&note.content);
    let match_ranges = match_ranges(&preview, query);
    SearchHit {
        kind: ResultKind::Note,
        id: note.id.clone(),
        title: note.title.clone(),
        preview,
        match_ranges,
        metadata: note.tags.join(", "),
        timestamp: note.timestamp.clone(),
    }
}

fn chat_hit(message: &ChatMessage, query: &str) -> SearchHit {
    let preview = content_preview(&message.content);
    let match_ranges = match_ranges(&preview, query);
    let title = match message.author {
        MessageAuthor::User => "Your message",
        MessageAuthor::Ai => "AI response",
    };
    SearchHit {
        kind: ResultKind::Chat,
        id: message.id.clone(),
        title: title.to_string(),
        preview,
        match_ranges,
        metadata: message.author.role().to_string(),
        timestamp: message.timestamp.clone(),
    }
}

/// Stable descending sort by parsed timestamp; ties keep scan order so the
/// result is deterministic and reproducible.
fn sort_most_recent_first(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let mut keyed: Vec<(DateTime<Utc>, SearchHit)> = hits
        .into_iter()
        .map(|hit| (parse_timestamp(&hit.timestamp), hit))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, hit)| hit).collect()
}

/// A timestamp that fails to parse sorts as the epoch; ordering stays total
/// and defined, never an error.
fn parse_timestamp(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChatMessage, Document, Note, SourceKind};
    use rstest::rstest;

    fn doc(id: &str, name: &str, content: &str, ts: &str) -> Document {
        Document::new(id, name, content, SourceKind::file("a.pdf"), "2 KB", ts)
    }

    fn note(id: &str, title: &str, content: &str, tags: &[&str], ts: &str) -> Note {
        Note::new(
            id,
            title,
            content,
            tags.iter().map(|t| t.to_string()).collect(),
            ts,
        )
    }

    fn msg(id: &str, author: MessageAuthor, content: &str, ts: &str) -> ChatMessage {
        ChatMessage::new(id, author, content, ts)
    }

    fn sample_workspace() -> Workspace {
        let mut ws = Workspace::new();
        ws.add_document(doc(
            "d1",
            "Plan A",
            "budget forecast",
            "2026-03-01T10:00:00+00:00",
        ));
        ws.add_document(doc(
            "d2",
            "Notes from standup",
            "nothing relevant",
            "2026-03-02T10:00:00+00:00",
        ));
        ws.add_note(note(
            "n1",
            "Budget review",
            "quarterly numbers",
            &["finance", "q1"],
            "2026-03-03T10:00:00+00:00",
        ));
        ws.push_raw_message(msg(
            "c1",
            MessageAuthor::User,
            "discuss budget",
            "2026-03-04T10:00:00+00:00",
        ));
        ws.push_raw_message(msg(
            "c2",
            MessageAuthor::Ai,
            "here is a summary",
            "2026-03-05T10:00:00+00:00",
        ));
        ws
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_query_yields_empty(#[case] query: &str) {
        let ws = sample_workspace();
        assert!(search(&ws, query, SearchFilter::All).is_empty());
    }

    #[test]
    fn two_budget_hits_ordered_by_time() {
        let mut ws = Workspace::new();
        ws.add_document(doc(
            "d1",
            "Plan A",
            "budget forecast",
            "2026-03-01T10:00:00+00:00",
        ));
        ws.push_raw_message(msg(
            "c1",
            MessageAuthor::User,
            "discuss budget",
            "2026-03-04T10:00:00+00:00",
        ));

        let hits = search(&ws, "budget", SearchFilter::All);
        assert_eq!(hits.len(), 2);
        // chat message is newer, so it comes first
        assert_eq!(hits[0].kind, ResultKind::Chat);
        assert_eq!(hits[1].kind, ResultKind::Document);
        for hit in &hits {
            assert!(hit.preview.to_lowercase().contains("budget"));
        }
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let ws = sample_workspace();
        let hits = search(&ws, "BUDGET", SearchFilter::All);
        // d1 (content), n1 (title), c1 (content)
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn document_matches_on_name_too() {
        let ws = sample_workspace();
        let hits = search(&ws, "standup", SearchFilter::Documents);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "d2");
    }

    #[rstest]
    #[case(SearchFilter::Documents, ResultKind::Document)]
    #[case(SearchFilter::Notes, ResultKind::Note)]
    #[case(SearchFilter::Chat, ResultKind::Chat)]
    fn filter_restricts_kind(#[case] filter: SearchFilter, #[case] kind: ResultKind) {
        let ws = sample_workspace();
        let hits = search(&ws, "budget", filter);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.kind == kind));
    }

    #[test]
    fn all_is_the_union_of_the_category_filters() {
        let ws = sample_workspace();
        let all = search(&ws, "budget", SearchFilter::All).len();
        let sum = search(&ws, "budget", SearchFilter::Documents).len()
            + search(&ws, "budget", SearchFilter::Notes).len()
            + search(&ws, "budget", SearchFilter::Chat).len();
        assert_eq!(all, sum);
    }

    #[test]
    fn ordering_is_monotone_non_increasing() {
        let ws = sample_workspace();
        let hits = search(&ws, "e", SearchFilter::All);
        assert!(hits.len() >= 2);
        let keys: Vec<_> = hits.iter().map(|h| parse_timestamp(&h.timestamp)).collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn equal_timestamps_keep_scan_order() {
        let ts = "2026-03-01T10:00:00+00:00";
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "alpha", "shared term", ts));
        ws.add_note(note("n1", "beta", "shared term", &[], ts));
        ws.push_raw_message(msg("c1", MessageAuthor::User, "shared term", ts));

        let hits = search(&ws, "shared", SearchFilter::All);
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        // documents scan before notes before chat
        assert_eq!(ids, vec!["d1", "n1", "c1"]);
    }

    #[test]
    fn unparseable_timestamp_sorts_last_as_epoch() {
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "broken", "term here", "last Tuesday"));
        ws.add_document(doc("d2", "fine", "term here", "2026-03-01T10:00:00+00:00"));

        let hits = search(&ws, "term", SearchFilter::All);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "d2");
        assert_eq!(hits[1].id, "d1");
    }

    #[test]
    fn preview_is_truncated_and_highlighted() {
        let long = format!("{} budget {}", "x".repeat(100), "y".repeat(200));
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "doc", &long, "2026-03-01T10:00:00+00:00"));

        let hits = search(&ws, "budget", SearchFilter::All);
        let hit = &hits[0];
        assert_eq!(hit.preview.chars().count(), 203);
        assert!(hit.preview.ends_with("..."));
        assert_eq!(hit.match_ranges.len(), 1);
        assert_eq!(&hit.preview[hit.match_ranges[0].clone()], "budget");
    }

    #[test]
    fn short_preview_is_verbatim() {
        let ws = sample_workspace();
        let hits = search(&ws, "forecast", SearchFilter::Documents);
        assert_eq!(hits[0].preview, "budget forecast");
    }

    #[test]
    fn metadata_lines_per_kind() {
        let ws = sample_workspace();
        let hits = search(&ws, "budget", SearchFilter::All);
        let by_kind = |kind: ResultKind| hits.iter().find(|h| h.kind == kind).unwrap();
        assert_eq!(by_kind(ResultKind::Document).metadata, "PDF • 2 KB");
        assert_eq!(by_kind(ResultKind::Note).metadata, "finance, q1");
        assert_eq!(by_kind(ResultKind::Chat).metadata, "user");
    }

    #[test]
    fn chat_titles_depend_on_author() {
        let ws = sample_workspace();
        let user_hits = search(&ws, "discuss", SearchFilter::Chat);
        assert_eq!(user_hits[0].title, "Your message");
        let ai_hits = search(&ws, "summary", SearchFilter::Chat);
        assert_eq!(ai_hits[0].title, "AI response");
    }

    #[test]
    fn query_is_never_pattern_syntax() {
        let mut ws = Workspace::new();
        ws.add_document(doc("d1", "doc", "b.dget here", "2026-03-01T10:00:00+00:00"));
        // '.' is a literal character, not a wildcard
        assert!(search(&ws, "budget", SearchFilter::All).is_empty());
        assert_eq!(search(&ws, "b.dget", SearchFilter::All).len(), 1);
    }

    #[rstest]
    #[case("all", Some(SearchFilter::All))]
    #[case("documents", Some(SearchFilter::Documents))]
    #[case("notes", Some(SearchFilter::Notes))]
    #[case("chat", Some(SearchFilter::Chat))]
    #[case("Documents", None)]
    #[case("everything", None)]
    #[case("", None)]
    fn filter_labels(#[case] label: &str, #[case] expected: Option<SearchFilter>) {
        assert_eq!(SearchFilter::from_label(label), expected);
    }

    #[test]
    fn search_is_pure() {
        let ws = sample_workspace();
        let rev = ws.revision();
        let first = search(&ws, "budget", SearchFilter::All);
        let second = search(&ws, "budget", SearchFilter::All);
        assert_eq!(first, second);
        assert_eq!(ws.revision(), rev);
    }
}
