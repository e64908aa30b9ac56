mod main;

pub use main::App;

/// Which view fills the central panel. A document reader can sit on top of
/// any of these; it is tracked separately so closing it restores the tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum MainView {
    #[default]
    Chat,
    Search,
    Notes,
}

impl MainView {
    pub const TABS: [MainView; 3] = [MainView::Chat, MainView::Search, MainView::Notes];
}
