//! The font list: sectioned catalog or filtered flat list.

use fontshelf_core::{Catalog, Letter};

use crate::index_strip::ScrollAnchor;

/// A row's request to be drawn in its own family at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPreview {
    pub family: String,
    pub size: u16,
}

/// One line of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Section header showing the letter.
    Header(Letter),
    Font(FontPreview),
}

impl Row {
    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header(_))
    }

    pub fn family(&self) -> Option<&str> {
        match self {
            Row::Header(_) => None,
            Row::Font(preview) => Some(&preview.family),
        }
    }
}

/// Something that can bring a section into view.
pub trait ScrollContainer {
    fn scroll_to(&mut self, section: Letter, anchor: ScrollAnchor);
}

/// Scrollable list state.
#[derive(Debug, Clone)]
pub struct ListView {
    rows: Vec<Row>,
    preview_size: u16,
    /// First visible row.
    offset: usize,
    /// Highlighted row; always a font row while any exist.
    cursor: usize,
    /// Rows that fit in the list area, as measured on the last draw.
    viewport: usize,
}

impl ListView {
    pub fn new(preview_size: u16) -> Self {
        Self {
            rows: Vec::new(),
            preview_size,
            offset: 0,
            cursor: 0,
            viewport: 0,
        }
    }

    /// Rows for the grouped catalog, or for `filtered` when a search is active.
    ///
    /// Sections come out in ascending letter order and fonts inside a
    /// section are re-sorted, whatever order the catalog collected them in.
    pub fn build_rows(
        catalog: &Catalog,
        filtered: Option<&[String]>,
        preview_size: u16,
    ) -> Vec<Row> {
        let font_row = |family: &str| {
            Row::Font(FontPreview {
                family: family.to_string(),
                size: preview_size,
            })
        };

        match filtered {
            Some(results) => {
                let mut sorted: Vec<&str> = results.iter().map(String::as_str).collect();
                sorted.sort_unstable();
                sorted.into_iter().map(font_row).collect()
            }
            None => catalog
                .buckets()
                .flat_map(|bucket| {
                    std::iter::once(Row::Header(bucket.letter))
                        .chain(bucket.sorted_fonts().into_iter().map(font_row))
                })
                .collect(),
        }
    }

    /// Replace the rows and go back to the top.
    pub fn refresh(&mut self, catalog: &Catalog, filtered: Option<&[String]>) {
        self.rows = Self::build_rows(catalog, filtered, self.preview_size);
        self.offset = 0;
        self.cursor = self.first_font_at_or_after(0).unwrap_or(0);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Preview request of the highlighted row.
    pub fn selected_preview(&self) -> Option<&FontPreview> {
        match self.rows.get(self.cursor) {
            Some(Row::Font(preview)) => Some(preview),
            _ => None,
        }
    }

    pub fn font_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_header()).count()
    }

    /// Rows currently on screen, paired with their absolute index.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.viewport)
    }

    /// Record the list height measured during layout.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn selected_family(&self) -> Option<&str> {
        self.rows.get(self.cursor).and_then(Row::family)
    }

    /// Row index of `letter`'s header, if that section is shown.
    pub fn section_row(&self, letter: Letter) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, Row::Header(l) if *l == letter))
    }

    /// Move the highlight by `delta` font rows, skipping headers.
    pub fn move_cursor(&mut self, delta: isize) {
        let fonts: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_header())
            .map(|(i, _)| i)
            .collect();
        if fonts.is_empty() {
            return;
        }

        let current = fonts.iter().position(|&i| i >= self.cursor).unwrap_or(0);
        let target = (current as isize + delta).clamp(0, fonts.len() as isize - 1) as usize;
        self.cursor = fonts[target];
        self.ensure_cursor_visible();
    }

    pub fn page_down(&mut self) {
        self.move_cursor(self.page_len());
    }

    pub fn page_up(&mut self) {
        self.move_cursor(-self.page_len());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
        self.cursor = self.first_font_at_or_after(0).unwrap_or(0);
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
        if let Some(last) = self.rows.iter().rposition(|row| !row.is_header()) {
            self.cursor = last;
        }
    }

    /// Scroll the view by `delta` rows without moving the highlight, unless
    /// it would leave the screen.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = (self.offset as isize + delta).max(0) as usize;
        self.offset = target.min(self.max_offset());

        let last_visible = self.offset + self.viewport.saturating_sub(1);
        if self.cursor < self.offset || self.cursor > last_visible {
            if let Some(row) = self.first_font_at_or_after(self.offset) {
                self.cursor = row;
            }
        }
    }

    fn page_len(&self) -> isize {
        self.viewport.saturating_sub(1).max(1) as isize
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport)
    }

    fn first_font_at_or_after(&self, from: usize) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, row)| !row.is_header())
            .map(|(i, _)| i)
    }

    fn ensure_cursor_visible(&mut self) {
        if self.viewport == 0 {
            return;
        }
        if self.cursor < self.offset {
            // Keep the section header in view when moving onto its first font
            let header_above = self.cursor > 0 && self.rows[self.cursor - 1].is_header();
            self.offset = if header_above { self.cursor - 1 } else { self.cursor };
        } else if self.cursor >= self.offset + self.viewport {
            self.offset = self.cursor + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }
}

impl ScrollContainer for ListView {
    fn scroll_to(&mut self, section: Letter, anchor: ScrollAnchor) {
        let Some(row) = self.section_row(section) else {
            return;
        };

        let target = match anchor {
            ScrollAnchor::Top => row,
            ScrollAnchor::Center => row.saturating_sub(self.viewport / 2),
        };
        self.offset = target.min(self.max_offset());
        if let Some(first) = self.first_font_at_or_after(row) {
            self.cursor = first;
        }
    }
}
