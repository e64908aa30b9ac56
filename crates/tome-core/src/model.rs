// tome-core/src/model.rs
//! Entity definitions for the three workspace collections.
//!
//! Ids are unique within their own collection only, and the uniqueness is
//! guaranteed by the caller (see [`crate::token::next_id`]), not enforced by
//! the store. Timestamps are RFC 3339 strings; an unparseable value is never
//! an error, it just sorts as the Unix epoch in search results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures when constructing a [`SourceKind`] at the boundary.
/// Callers react by simply not adding the source; nothing is surfaced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("not an http(s) URL: {0}")]
    NotHttpUrl(String),
    #[error("not a YouTube URL: {0}")]
    NotYoutubeUrl(String),
}

/// File formats the stubbed upload path recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Pdf,
    PlainText,
}

impl FileFormat {
    /// Guess from a file name extension; everything unknown counts as text,
    /// matching the original import stub.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            FileFormat::Pdf
        } else {
            FileFormat::PlainText
        }
    }
}

/// The tagged source variants a document can come from.
///
/// Each variant has a validated constructor; there is no loosely-typed bag of
/// optional fields crossing the add-source boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    File { format: FileFormat },
    Website { url: String },
    YouTube { url: String },
    PastedText,
}

impl SourceKind {
    pub fn file(name: &str) -> Self {
        SourceKind::File {
            format: FileFormat::from_name(name),
        }
    }

    pub fn website(url: impl Into<String>) -> Result<Self, SourceError> {
        let url = url.into();
        if !is_http_url(&url) {
            tracing::debug!("rejected website source: {url}");
            return Err(SourceError::NotHttpUrl(url));
        }
        Ok(SourceKind::Website { url })
    }

    pub fn youtube(url: impl Into<String>) -> Result<Self, SourceError> {
        let url = url.into();
        if !is_http_url(&url) {
            tracing::debug!("rejected youtube source: {url}");
            return Err(SourceError::NotHttpUrl(url));
        }
        if !is_youtube_host(&url) {
            tracing::debug!("rejected youtube source: {url}");
            return Err(SourceError::NotYoutubeUrl(url));
        }
        Ok(SourceKind::YouTube { url })
    }

    pub fn pasted_text() -> Self {
        SourceKind::PastedText
    }

    /// Display label, also used as the type half of a search hit's
    /// "<type> • <size>" metadata line.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::File {
                format: FileFormat::Pdf,
            } => "PDF",
            SourceKind::File {
                format: FileFormat::PlainText,
            } => "Plain text",
            SourceKind::Website { .. } => "Website",
            SourceKind::YouTube { .. } => "YouTube",
            SourceKind::PastedText => "Pasted text",
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}

fn is_youtube_host(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = host.strip_prefix("www.").unwrap_or(host);
    host == "youtube.com" || host == "youtu.be" || host.ends_with(".youtube.com")
}

/// A source document shown in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    pub kind: SourceKind,
    /// Display string, e.g. "12.4 KB". Placeholder for stubbed imports.
    pub size: String,
    /// RFC 3339 creation time.
    pub upload_date: String,
    /// UI-only selection flag.
    pub selected: bool,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        kind: SourceKind,
        size: impl Into<String>,
        upload_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            kind,
            size: size.into(),
            upload_date: upload_date.into(),
            selected: true,
        }
    }
}

/// A studio note, either authored by the user or produced by a generate stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Ordered tag list; joined with ", " in search metadata.
    pub tags: Vec<String>,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags,
            timestamp: timestamp.into(),
        }
    }
}

/// Partial note update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAuthor {
    User,
    Ai,
}

impl MessageAuthor {
    /// Role string used as chat metadata in search hits.
    pub fn role(&self) -> &'static str {
        match self {
            MessageAuthor::User => "user",
            MessageAuthor::Ai => "ai",
        }
    }
}

/// One chat transcript entry. Append-only; never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: MessageAuthor,
    pub content: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(
        id: impl Into<String>,
        author: MessageAuthor,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("report.pdf", FileFormat::Pdf)]
    #[case("REPORT.PDF", FileFormat::Pdf)]
    #[case("notes.txt", FileFormat::PlainText)]
    #[case("no-extension", FileFormat::PlainText)]
    fn file_format_from_name(#[case] name: &str, #[case] expected: FileFormat) {
        assert_eq!(FileFormat::from_name(name), expected);
    }

    #[rstest]
    #[case("https://example.com/page")]
    #[case("http://example.com")]
    fn website_accepts_http_urls(#[case] url: &str) {
        assert!(SourceKind::website(url).is_ok());
    }

    #[rstest]
    #[case("example.com")]
    #[case("ftp://example.com")]
    #[case("https://")]
    #[case("")]
    fn website_rejects_non_http(#[case] url: &str) {
        assert_eq!(
            SourceKind::website(url),
            Err(SourceError::NotHttpUrl(url.to_string()))
        );
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=abc123")]
    #[case("https://youtu.be/abc123")]
    #[case("http://m.youtube.com/watch?v=abc123")]
    fn youtube_accepts_youtube_hosts(#[case] url: &str) {
        assert!(SourceKind::youtube(url).is_ok());
    }

    #[test]
    fn youtube_rejects_other_hosts() {
        assert_eq!(
            SourceKind::youtube("https://example.com/watch?v=abc"),
            Err(SourceError::NotYoutubeUrl(
                "https://example.com/watch?v=abc".to_string()
            ))
        );
    }

    #[test]
    fn youtube_rejects_lookalike_host() {
        // "notyoutube.com" must not pass the host check
        assert!(SourceKind::youtube("https://notyoutube.com/v").is_err());
    }

    #[test]
    fn source_labels() {
        assert_eq!(SourceKind::file("a.pdf").label(), "PDF");
        assert_eq!(SourceKind::pasted_text().label(), "Pasted text");
        assert_eq!(
            SourceKind::website("https://example.com").unwrap().label(),
            "Website"
        );
    }
}
