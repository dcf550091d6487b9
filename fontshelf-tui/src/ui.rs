//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Mode};
use super::index_strip::STRIP_WIDTH;
use super::list_view::Row;

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the active row
const HIGHLIGHT: Color = Color::Yellow;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI.
///
/// This is also the geometry pass: list height and index label positions are
/// measured here, and any scroll the index strip asks for is queued for the
/// next tick rather than applied.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let header_height = if app.search.chrome().large_title { 4 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Title + search field
            Constraint::Min(3),                // List, strip, details
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let content_chunks = if app.show_details {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(STRIP_WIDTH),
                Constraint::Percentage(35),
            ])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(STRIP_WIDTH)])
            .split(chunks[1])
    };

    render_list(frame, app, content_chunks[0]);
    render_index_strip(frame, app, content_chunks[1]);
    if app.show_details {
        render_details(frame, app, content_chunks[2]);
    }

    render_status_bar(frame, app, chunks[2]);
}

/// Render the navigation chrome: title and search field
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chrome = app.search.chrome();
    let focused = app.mode() == Mode::Search;

    let (title_area, field_area) = if chrome.large_title {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);
        (Some(rows[0]), rows[1])
    } else {
        (None, area)
    };

    if let Some(title_area) = title_area {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {}", chrome.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);
    }

    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(SECONDARY)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if !chrome.large_title {
        block = block
            .title(format!(" {} ", chrome.title))
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    }

    let content = if app.search.text().is_empty() && !focused {
        Line::from(Span::styled(
            format!("/ {}", chrome.placeholder),
            Style::default().fg(DIM),
        ))
    } else if focused {
        let (before, after) = app.search.split_at_cursor();
        if before.is_empty() && after.is_empty() {
            Line::from(vec![
                Span::styled("|", Style::default().fg(Color::Magenta)),
                Span::styled(chrome.placeholder.as_str(), Style::default().fg(DIM)),
            ])
        } else {
            Line::from(vec![
                Span::raw(before),
                Span::styled("|", Style::default().fg(Color::Magenta)),
                Span::raw(after),
            ])
        }
    } else {
        Line::from(app.search.text())
    };

    frame.render_widget(Paragraph::new(content).block(block), field_area);
}

/// Render the font list (grouped or filtered)
fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = match app.browser.filter().query() {
        Some(query) => format!(" '{}' ({} matches) ", query, app.list.font_count()),
        None => format!(
            " {} fonts in {} sections ",
            app.catalog.len(),
            app.catalog.letters().len()
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let inner = block.inner(area);
    app.list.set_viewport(inner.height as usize);

    let cursor = app.list.cursor();
    let items: Vec<ListItem> = app
        .list
        .visible_rows()
        .map(|(idx, row)| match row {
            Row::Header(letter) => ListItem::new(Line::from(Span::styled(
                letter.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))),
            Row::Font(preview) => {
                let style = if idx == cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(
                    format!("  {}", preview.family),
                    style,
                )))
            }
        })
        .collect();

    // Show placeholder if empty
    let list = if items.is_empty() {
        let placeholder_text = if app.browser.filter().is_empty() {
            "  No fonts installed"
        } else {
            "  No matches"
        };
        let placeholder = ListItem::new(Line::from(Span::styled(
            placeholder_text,
            Style::default().fg(DIM),
        )));
        List::new(vec![placeholder]).block(block)
    } else {
        List::new(items).block(block)
    };

    frame.render_widget(list, area);
}

/// Render the jump-to-letter strip and run its hit test
fn render_index_strip(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.index.layout(inner, &mut app.scroll_queue);

    let dimmed = !app.browser.filter().is_empty();
    let dragging = app.index.drag_location();

    for (letter, rect) in app.index.labels() {
        let hovered = dragging.is_some_and(|p| rect.contains(p));
        let style = if hovered {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else if dimmed {
            Style::default().fg(SECONDARY)
        } else {
            Style::default().fg(ACCENT)
        };
        let label = Paragraph::new(Line::from(Span::styled(letter.to_string(), style)))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(label, *rect);
    }
}

/// Render the details pane for the highlighted family
fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Preview ")
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let Some(preview) = app.list.selected_preview() else {
        let paragraph = Paragraph::new(Span::styled("Nothing selected", Style::default().fg(DIM)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let label =
        |name: &'static str| Span::styled(format!("{:<9}", name), Style::default().fg(DIM));

    let mut lines = vec![
        Line::from(Span::styled(
            preview.family.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("size"), Span::raw(format!("{} pt", preview.size))]),
        Line::from(""),
    ];

    match &app.details {
        Some(details) => {
            lines.push(Line::from(vec![
                label("faces"),
                Span::raw(details.faces.len().to_string()),
            ]));
            for face in &details.faces {
                lines.push(Line::from(Span::styled(
                    format!("  {}", face),
                    Style::default().fg(Color::Gray),
                )));
            }
            let weights: Vec<String> = details.weights.iter().map(u16::to_string).collect();
            lines.push(Line::from(vec![label("weights"), Span::raw(weights.join(", "))]));
            lines.push(Line::from(vec![
                label("italic"),
                Span::raw(if details.has_italic { "yes" } else { "no" }),
            ]));
            lines.push(Line::from(vec![
                label("mono"),
                Span::raw(if details.monospaced { "yes" } else { "no" }),
            ]));
            if let Some(path) = &details.path {
                lines.push(Line::from(vec![
                    label("file"),
                    Span::raw(path.display().to_string()),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Not resolvable; shown in the default typeface",
                Style::default().fg(DIM),
            )));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode() {
        Mode::Browse => Span::styled(" BROWSE ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
    };

    let help_text = match app.mode() {
        Mode::Browse => "j/k:nav  A-Z:jump  /:search  Esc:clear  p:preview  q:quit",
        Mode::Search => "Type to filter  Enter:done  Esc:cancel",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontshelf_core::{FontshelfConfig, StaticFontRegistry};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(config: &FontshelfConfig) -> App {
        let registry =
            StaticFontRegistry::new(["Helvetica", "Arial", "Avenir", "Bodoni Ornaments"]);
        App::new(Box::new(registry), config)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_title_sections_and_placeholder() {
        let mut app = app(&FontshelfConfig::default());
        let screen = draw(&mut app, 80, 16);

        assert!(screen.contains("Choose Font"));
        assert!(screen.contains("/ Search"));
        assert!(screen.contains("  Arial"));
        assert!(screen.contains("  Helvetica"));
        assert!(!screen.contains("Bodoni"));
        assert!(screen.contains("3 fonts in 2 sections"));
    }

    #[test]
    fn test_compact_title_sits_on_search_border() {
        let mut config = FontshelfConfig::default();
        config.chrome.large_title = false;
        config.chrome.title = "Fonts".to_string();
        let mut app = app(&config);
        let screen = draw(&mut app, 80, 16);

        let first_line = screen.lines().next().unwrap();
        assert!(first_line.contains(" Fonts "));
    }

    #[test]
    fn test_draw_measures_viewport() {
        let mut app = app(&FontshelfConfig::default());
        draw(&mut app, 80, 16);
        // 16 rows - 4 header - 1 status - 2 list borders
        assert_eq!(app.list.viewport(), 9);
        assert_eq!(app.index.labels().len(), 2);
    }

    #[test]
    fn test_drag_during_draw_is_applied_next_tick() {
        let mut app = app(&FontshelfConfig::default());
        draw(&mut app, 80, 16);

        let (_, h_rect) = app.index.labels()[1];
        app.index.press(ratatui::layout::Position::new(h_rect.x, h_rect.y));
        draw(&mut app, 80, 16);

        assert_eq!(app.scroll_queue.len(), 1);
        app.flush_scroll_requests();
        assert_eq!(app.list.selected_family(), Some("Helvetica"));
    }

    #[test]
    fn test_filtered_list_shows_matches_only() {
        let mut app = app(&FontshelfConfig::default());
        app.dispatch_search(crate::search::SearchEvent::TextChanged("orn".to_string()));
        let screen = draw(&mut app, 80, 16);

        assert!(screen.contains("Bodoni Ornaments"));
        assert!(screen.contains("'orn' (1 matches)"));
        assert!(!screen.contains("  Arial"));
    }

    #[test]
    fn test_details_show_selected_row_preview_size() {
        let mut config = FontshelfConfig::default();
        config.preview.size = 24;
        let mut app = app(&config);
        app.update_details();
        let screen = draw(&mut app, 100, 16);

        assert!(screen.contains("24 pt"));
        assert!(screen.contains("weights  400"));
    }
}
