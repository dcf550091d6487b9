//! Terminal font browser: a searchable, sectioned list of installed families
//! with a jump-to-letter strip.

pub mod app;
pub mod event;
pub mod index_strip;
pub mod list_view;
pub mod listing;
pub mod search;
pub mod terminal;
pub mod ui;

pub use app::{App, FontBrowser, Mode};
pub use index_strip::{ScrollAnchor, ScrollQueue, ScrollRequest, SectionIndex};
pub use list_view::{FontPreview, ListView, Row, ScrollContainer};
pub use search::{SearchChrome, SearchDelegate, SearchEvent, SearchHost};
pub use terminal::run;
