//! Search bar state machine and navigation chrome.
//!
//! The host owns the text field. Every edit, cancel, or dismiss is turned
//! into a [`SearchEvent`] and forwarded to whoever implements
//! [`SearchDelegate`]; the host itself never decides what gets filtered.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fontshelf_core::config::ChromeConfig;

/// Static chrome applied to the header on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChrome {
    pub title: String,
    pub placeholder: String,
    pub large_title: bool,
}

impl Default for SearchChrome {
    fn default() -> Self {
        Self::from(&ChromeConfig::default())
    }
}

impl From<&ChromeConfig> for SearchChrome {
    fn from(config: &ChromeConfig) -> Self {
        Self {
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            large_title: config.large_title,
        }
    }
}

/// Receiver of search bar events.
pub trait SearchDelegate {
    /// Called after every edit with the full current text.
    fn on_text_changed(&mut self, query: &str);

    /// Called when the user cancels the search.
    fn on_cancel(&mut self);

    /// Called when the search surface is dismissed with its text kept.
    fn on_dismiss(&mut self);
}

/// An event produced by the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    TextChanged(String),
    Cancelled,
    Dismissed,
}

impl SearchEvent {
    /// Forward this event to `delegate`.
    pub fn dispatch<D: SearchDelegate + ?Sized>(self, delegate: &mut D) {
        match self {
            SearchEvent::TextChanged(query) => delegate.on_text_changed(&query),
            SearchEvent::Cancelled => delegate.on_cancel(),
            SearchEvent::Dismissed => delegate.on_dismiss(),
        }
    }
}

/// Search input surface plus the chrome around it.
#[derive(Debug, Clone, Default)]
pub struct SearchHost {
    chrome: SearchChrome,
    text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    cursor: usize,
    focused: bool,
}

impl SearchHost {
    pub fn new(chrome: SearchChrome) -> Self {
        Self {
            chrome,
            ..Self::default()
        }
    }

    pub fn chrome(&self) -> &SearchChrome {
        &self.chrome
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the field keyboard focus. Existing text is kept.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Cancel from outside the field (e.g. Esc while browsing a filtered list).
    pub fn cancel(&mut self) -> SearchEvent {
        self.text.clear();
        self.cursor = 0;
        self.focused = false;
        SearchEvent::Cancelled
    }

    /// Run `key` through the state machine. Returns the event to forward,
    /// if any. Keys are ignored while the field is not focused.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchEvent> {
        if !self.focused {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(self.cancel()),
            KeyCode::Enter => {
                self.focused = false;
                Some(SearchEvent::Dismissed)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.text.is_empty() {
                    return None;
                }
                self.text.clear();
                self.cursor = 0;
                Some(self.changed())
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                Some(self.changed())
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                Some(self.changed())
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return None;
                }
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                Some(self.changed())
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                None
            }
            _ => None,
        }
    }

    /// Run `key` through the state machine and forward the resulting event.
    /// Returns whether an event was forwarded.
    pub fn handle_key_with<D: SearchDelegate + ?Sized>(
        &mut self,
        key: KeyEvent,
        delegate: &mut D,
    ) -> bool {
        match self.handle_key(key) {
            Some(event) => {
                event.dispatch(delegate);
                true
            }
            None => false,
        }
    }

    /// Text split at the cursor, for drawing.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    fn changed(&self) -> SearchEvent {
        SearchEvent::TextChanged(self.text.clone())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
