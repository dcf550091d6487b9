//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use fontshelf_core::Letter;
use ratatui::layout::Position;

use super::app::{App, Mode};

/// Rows moved per mouse wheel notch
const WHEEL_STEP: isize = 3;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Dispatch any terminal event
pub fn handle_event(app: &mut App, event: Event) -> HandleResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        // Resize is picked up by the next draw
        _ => HandleResult::Continue,
    }
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcut
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    app.clear_status();

    match app.mode() {
        Mode::Search => {
            app.handle_search_key(key);
            HandleResult::Continue
        }
        Mode::Browse => handle_browse_mode(app, key),
    }
}

/// Handle keys while browsing the list
fn handle_browse_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // Focus the search field
        KeyCode::Char('/') => {
            app.search.focus();
            HandleResult::Continue
        }

        // Drop an applied search
        KeyCode::Esc => {
            if !app.browser.filter().is_empty() {
                app.cancel_search();
            }
            HandleResult::Continue
        }

        KeyCode::Char('j') | KeyCode::Down => {
            app.list.move_cursor(1);
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list.move_cursor(-1);
            HandleResult::Continue
        }

        KeyCode::PageDown => {
            app.list.page_down();
            HandleResult::Continue
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.list.page_down();
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            app.list.page_up();
            HandleResult::Continue
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.list.page_up();
            HandleResult::Continue
        }

        KeyCode::Home | KeyCode::Char('g') => {
            app.list.to_top();
            HandleResult::Continue
        }
        KeyCode::End => {
            app.list.to_bottom();
            HandleResult::Continue
        }

        // Toggle details pane
        KeyCode::Char('p') => {
            app.show_details = !app.show_details;
            HandleResult::Continue
        }

        // Shift+letter jumps to that section
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            if let Some(letter) = Letter::from_char(c) {
                app.jump_to(letter);
            }
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle mouse input: index strip drags and wheel scrolling
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> HandleResult {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.index.press(position),
        MouseEventKind::Drag(MouseButton::Left) => app.index.drag_to(position),
        MouseEventKind::Up(MouseButton::Left) => app.index.release(),
        MouseEventKind::ScrollDown => app.list.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.list.scroll_by(-WHEEL_STEP),
        _ => {}
    }

    HandleResult::Continue
}
