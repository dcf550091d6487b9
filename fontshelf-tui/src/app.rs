//! Core application state

use fontshelf_core::{
    Catalog, FamilySummary, FilterState, FontRegistry, FontshelfConfig, Letter, SearchPolicy,
};
use tracing::{debug, info};

use crate::index_strip::{ScrollAnchor, ScrollQueue, ScrollRequest, SectionIndex};
use crate::list_view::{ListView, ScrollContainer};
use crate::search::{SearchChrome, SearchDelegate, SearchEvent, SearchHost};

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate the list, jump between sections
    #[default]
    Browse,
    /// Search field has focus
    Search,
}

/// Owner of the filter state. Receives the search bar's events.
#[derive(Debug, Clone)]
pub struct FontBrowser {
    /// Snapshot of every family the registry reported
    fonts: Vec<String>,
    filter: FilterState,
    policy: SearchPolicy,
    results: Option<Vec<String>>,
    /// Set when the list needs rebuilding
    dirty: bool,
}

impl FontBrowser {
    pub fn new(fonts: Vec<String>, policy: SearchPolicy) -> Self {
        Self {
            fonts,
            filter: FilterState::Empty,
            policy,
            results: None,
            dirty: false,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Sorted matches while a search is active, `None` otherwise.
    pub fn results(&self) -> Option<&[String]> {
        self.results.as_deref()
    }

    /// Whether the list needs rebuilding since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn set_filter(&mut self, filter: FilterState) {
        self.results = filter.apply(&self.fonts, &self.policy);
        self.filter = filter;
        self.dirty = true;
    }
}

impl SearchDelegate for FontBrowser {
    fn on_text_changed(&mut self, query: &str) {
        self.set_filter(FilterState::from_query(query));
        debug!(
            query,
            matches = ?self.results.as_ref().map(Vec::len),
            "search text changed"
        );
    }

    fn on_cancel(&mut self) {
        debug!("search cancelled");
        self.set_filter(FilterState::Empty);
    }

    fn on_dismiss(&mut self) {
        debug!("search dismissed");
    }
}

/// Main application state
pub struct App {
    pub catalog: Catalog,
    pub browser: FontBrowser,
    pub search: SearchHost,
    pub list: ListView,
    pub index: SectionIndex,
    /// Scroll requests waiting for the next tick
    pub scroll_queue: ScrollQueue,
    /// Show the details pane
    pub show_details: bool,
    /// Details for the highlighted family, `None` when it falls back to the default face
    pub details: Option<FamilySummary>,
    details_for: Option<String>,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
    registry: Box<dyn FontRegistry>,
}

impl App {
    /// Snapshot the registry once and build everything derived from it.
    pub fn new(registry: Box<dyn FontRegistry>, config: &FontshelfConfig) -> Self {
        let fonts = registry.family_names();
        let catalog = Catalog::build_with_exclusions(&fonts, &config.catalog.excluded_families);

        info!(
            families = fonts.len(),
            placed = catalog.len(),
            sections = catalog.letters().len(),
            "font catalog ready"
        );

        let mut list = ListView::new(config.preview.size);
        list.refresh(&catalog, None);

        Self {
            index: SectionIndex::new(catalog.letters()),
            browser: FontBrowser::new(fonts, config.catalog.search_policy()),
            search: SearchHost::new(SearchChrome::from(&config.chrome)),
            list,
            catalog,
            scroll_queue: ScrollQueue::new(),
            show_details: true,
            details: None,
            details_for: None,
            status_message: None,
            registry,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.search.is_focused() {
            Mode::Search
        } else {
            Mode::Browse
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Feed a key to the search bar; the browser hears about any event.
    pub fn handle_search_key(&mut self, key: crossterm::event::KeyEvent) {
        self.search.handle_key_with(key, &mut self.browser);
        self.sync_list();
    }

    /// Cancel the active search from browse mode.
    pub fn cancel_search(&mut self) {
        let event = self.search.cancel();
        self.dispatch_search(event);
    }

    /// Forward a search event to the browser and rebuild the list if needed.
    pub fn dispatch_search(&mut self, event: SearchEvent) {
        event.dispatch(&mut self.browser);
        self.sync_list();
    }

    /// Queue a jump to `letter`'s section for the next tick.
    pub fn jump_to(&mut self, letter: Letter) {
        if self.catalog.bucket(letter).is_none() {
            self.set_status(format!("No fonts under {}", letter));
            return;
        }
        if !self.browser.filter().is_empty() {
            self.set_status("Clear the search to jump between sections");
            return;
        }
        self.scroll_queue.defer(ScrollRequest {
            section: letter,
            anchor: ScrollAnchor::Center,
        });
    }

    /// Apply scroll requests queued during the previous tick.
    pub fn flush_scroll_requests(&mut self) {
        for request in self.scroll_queue.drain() {
            self.list.scroll_to(request.section, request.anchor);
        }
    }

    /// Resolve the highlighted family against the registry when it changes.
    pub fn update_details(&mut self) {
        let selected = self.list.selected_family().map(str::to_string);
        if selected == self.details_for {
            return;
        }

        self.details = selected
            .as_deref()
            .and_then(|family| self.registry.describe(family));
        self.details_for = selected;
    }

    fn sync_list(&mut self) {
        if self.browser.take_dirty() {
            self.list.refresh(&self.catalog, self.browser.results());
        }
    }
}
