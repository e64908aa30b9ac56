mod memo_search;
mod preview_highlighter;
mod time;

pub use memo_search::MemoizedSearch;
pub use preview_highlighter::highlight_preview;
pub use time::{format_date, format_timestamp};
