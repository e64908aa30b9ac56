pub const APP_ID: &str = "tome";
pub const APP_NAME: &str = "Tome";

pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "tome";
pub const CONFIG_FILE_NAME: &str = "tome.toml";

pub const ID_PANEL_SOURCES: &str = "sources_panel";
pub const ID_PANEL_STUDIO: &str = "studio_panel";
pub const ID_PANEL_VIEW_TABS: &str = "view_tabs_panel";
pub const ID_WINDOW_ADD_SOURCE: &str = "add_source_window";
