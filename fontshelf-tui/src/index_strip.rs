//! Jump-to-letter strip along the right edge of the list.
//!
//! The strip never touches the list's scroll offset. During each geometry
//! pass it hit-tests the current drag location against every label and
//! queues a [`ScrollRequest`]; the event loop applies queued requests on the
//! next tick, after layout is done.

use std::collections::VecDeque;

use fontshelf_core::Letter;
use ratatui::layout::{Position, Rect};
use tracing::trace;

/// Where the target section should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAnchor {
    Top,
    Center,
}

/// Request for the list to bring a section into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: Letter,
    pub anchor: ScrollAnchor,
}

/// Requests deferred to the next turn of the event loop.
#[derive(Debug, Default)]
pub struct ScrollQueue {
    pending: VecDeque<ScrollRequest>,
}

impl ScrollQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, request: ScrollRequest) {
        self.pending.push_back(request);
    }

    /// Take every pending request, oldest first.
    pub fn drain(&mut self) -> Vec<ScrollRequest> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Width of the strip in columns, borders included.
pub const STRIP_WIDTH: u16 = 3;

/// Vertical stack of section letters with drag tracking.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex {
    letters: Vec<Letter>,
    /// Active drag location in frame coordinates. `None` when idle.
    drag: Option<Position>,
    /// Area covered by the strip on the last geometry pass.
    area: Rect,
    labels: Vec<(Letter, Rect)>,
}

impl SectionIndex {
    /// `letters` should be the catalog's letters, ascending.
    pub fn new(letters: Vec<Letter>) -> Self {
        Self {
            letters,
            ..Self::default()
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn drag_location(&self) -> Option<Position> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Label rects from the last geometry pass.
    pub fn labels(&self) -> &[(Letter, Rect)] {
        &self.labels
    }

    /// Pointer pressed. Starts a drag only when the press lands on the strip.
    pub fn press(&mut self, position: Position) {
        if self.area.contains(position) {
            self.drag = Some(position);
        }
    }

    /// Pointer moved while pressed. The drag may leave the strip.
    pub fn drag_to(&mut self, position: Position) {
        if self.drag.is_some() {
            self.drag = Some(position);
        }
    }

    /// Pointer released; back to idle.
    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Geometry pass: lay the labels out inside `area` and queue a request
    /// for every label containing the drag location.
    ///
    /// Labels are one row each, stacked and centred vertically. When there
    /// are more letters than rows, neighbouring letters share a row so every
    /// section stays reachable.
    pub fn layout(&mut self, area: Rect, queue: &mut ScrollQueue) {
        self.area = area;
        self.labels.clear();

        if area.width == 0 || area.height == 0 {
            return;
        }

        let count = self.letters.len();
        let rows = area.height as usize;
        let top = if count <= rows {
            area.y + (area.height - count as u16) / 2
        } else {
            area.y
        };

        for (i, letter) in self.letters.iter().enumerate() {
            let row = if count <= rows { i } else { i * rows / count };
            let rect = Rect {
                x: area.x,
                y: top + row as u16,
                width: area.width,
                height: 1,
            };
            self.labels.push((*letter, rect));
        }

        let Some(drag) = self.drag else {
            return;
        };

        for (letter, rect) in &self.labels {
            if rect.contains(drag) {
                trace!(section = %letter, "queueing scroll to section");
                queue.defer(ScrollRequest {
                    section: *letter,
                    anchor: ScrollAnchor::Center,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().filter_map(Letter::from_char).collect()
    }

    fn strip() -> (SectionIndex, ScrollQueue, Rect) {
        let index = SectionIndex::new(letters("ACHM"));
        let area = Rect::new(40, 2, STRIP_WIDTH, 10);
        (index, ScrollQueue::new(), area)
    }

    #[test]
    fn test_labels_stack_vertically_centred() {
        let (mut index, mut queue, area) = strip();
        index.layout(area, &mut queue);

        let ys: Vec<u16> = index.labels().iter().map(|(_, r)| r.y).collect();
        assert_eq!(ys, vec![5, 6, 7, 8]);
        let order: Vec<char> = index.labels().iter().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, vec!['A', 'C', 'H', 'M']);
    }

    #[test]
    fn test_idle_strip_queues_nothing() {
        let (mut index, mut queue, area) = strip();
        index.layout(area, &mut queue);
        assert!(queue.is_empty());
        assert!(!index.is_dragging());
    }

    #[test]
    fn test_press_outside_strip_does_not_start_drag() {
        let (mut index, mut queue, area) = strip();
        index.layout(area, &mut queue);

        index.press(Position::new(0, 6));
        assert!(!index.is_dragging());
    }

    #[test]
    fn test_drag_over_label_queues_center_request_on_next_layout() {
        let (mut index, mut queue, area) = strip();
        index.layout(area, &mut queue);

        index.press(Position::new(41, 7));
        assert!(queue.is_empty(), "press alone must not scroll");

        index.layout(area, &mut queue);
        assert_eq!(
            queue.drain(),
            vec![ScrollRequest {
                section: Letter::from_char('H').unwrap(),
                anchor: ScrollAnchor::Center,
            }]
        );
    }

    #[test]
    fn test_drag_follows_pointer_until_release() {
        let (mut index, mut queue, area) = strip();
        index.layout(area, &mut queue);

        index.press(Position::new(41, 5));
        index.drag_to(Position::new(30, 8));
        index.layout(area, &mut queue);
        assert!(queue.is_empty(), "x outside the strip hits no label");

        index.drag_to(Position::new(42, 8));
        index.layout(area, &mut queue);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain()[0].section.as_char(), 'M');

        index.release();
        index.layout(area, &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_too_many_letters_share_rows() {
        let mut index = SectionIndex::new(letters("ABCDEFGHIJ"));
        let mut queue = ScrollQueue::new();
        index.layout(Rect::new(0, 0, 3, 4), &mut queue);

        assert_eq!(index.labels().len(), 10);
        let ys: Vec<u16> = index.labels().iter().map(|(_, r)| r.y).collect();
        assert_eq!(ys, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);

        // I and J share the last row; both are queued, J last
        index.press(Position::new(1, 3));
        index.layout(Rect::new(0, 0, 3, 4), &mut queue);
        let sections: Vec<char> = queue.drain().iter().map(|r| r.section.as_char()).collect();
        assert_eq!(sections, vec!['I', 'J']);
    }

    #[test]
    fn test_zero_area_has_no_labels() {
        let (mut index, mut queue, _) = strip();
        index.layout(Rect::new(0, 0, 0, 0), &mut queue);
        assert!(index.labels().is_empty());
    }
}
