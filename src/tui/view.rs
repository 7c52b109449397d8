//! ListingView — one row per visible entry.
//!
//! Owns the `RowView`s for the current entry sequence, assigns nesting
//! indents, maps mouse input to rows, and raises `ViewEvent`s. The
//! listing data itself stays with the caller; the view is rebuilt from
//! entries whenever collapse state changes.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::model::Entry;

use super::event::{DoubleClick, ViewEvent};
use super::row::{draw_row, Column, RowView};
use super::theme::Theme;

pub struct ListingView {
    rows: Vec<RowView>,
    double_click: DoubleClick,
    scroll: usize,
    indent_unit: u16,
    address_visible: bool,
    chunks_visible: bool,
}

impl ListingView {
    pub fn new(indent_unit: u16) -> Self {
        Self {
            rows: Vec::new(),
            double_click: DoubleClick::default(),
            scroll: 0,
            indent_unit,
            address_visible: true,
            chunks_visible: true,
        }
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    /// Rebuild rows from a flat entry sequence. Indent follows chunk
    /// nesting: deeper after each begin marker, back out at the matching
    /// end marker (which renders at its begin's depth).
    pub fn set_entries(&mut self, entries: &[Entry]) {
        let mut depth: u16 = 0;
        self.rows.clear();
        for entry in entries {
            if matches!(entry, Entry::ChunkEnd { .. }) {
                depth = depth.saturating_sub(1);
            }
            let mut row = RowView::new(entry.id());
            row.set_entry(entry);
            row.set_indent(depth);
            if !self.address_visible {
                row.toggle_column(Column::Address);
            }
            if !self.chunks_visible {
                row.toggle_column(Column::Chunks);
            }
            self.rows.push(row);
            if matches!(entry, Entry::ChunkBegin { .. }) {
                depth += 1;
            }
        }
        let max = self.rows.len().saturating_sub(1);
        self.scroll = self.scroll.min(max);
    }

    /// Flip a column across every row, persisting across rebuilds.
    pub fn toggle_column(&mut self, column: Column) {
        match column {
            Column::Address => self.address_visible = !self.address_visible,
            Column::Chunks => self.chunks_visible = !self.chunks_visible,
            Column::Comments => {}
        }
        for row in &mut self.rows {
            row.toggle_column(column);
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.rows.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    /// Route a mouse event that occurred while the view covered `area`.
    pub fn handle_mouse(&mut self, ev: MouseEvent, area: Rect) -> Option<ViewEvent> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click_at(ev.column, ev.row, area, Instant::now())
            }
            MouseEventKind::ScrollUp => {
                self.scroll_up(3);
                None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_down(3);
                None
            }
            _ => None,
        }
    }

    /// Click-to-row mapping with an injected timestamp.
    pub fn handle_click_at(
        &mut self,
        column: u16,
        screen_row: u16,
        area: Rect,
        at: Instant,
    ) -> Option<ViewEvent> {
        if !area.contains((column, screen_row).into()) {
            return None;
        }
        let index = (screen_row - area.y) as usize + self.scroll;
        let id = self.rows.get(index)?.id();
        if self.double_click.observe(id, at) {
            Some(ViewEvent::ChunkCollapse(id))
        } else {
            None
        }
    }

    /// Render visible rows top to bottom, one terminal line each.
    pub fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        for (i, row) in self.rows.iter().skip(self.scroll).enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let line = Rect::new(area.x, area.y + i as u16, area.width, 1);
            draw_row(f, line, row, theme, self.indent_unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{text_repr::TextRepr, Block, Chunk, Listing};
    use std::time::Duration;

    fn chunk(id: u64, begin: u64, end: u64) -> Chunk {
        Chunk {
            id,
            addr_begin: begin,
            addr_end: end,
            display_name: format!("f{id}"),
            kind: "Block".into(),
            comment: String::new(),
            text: Some(TextRepr::opcode("nop")),
        }
    }

    fn expanded_listing() -> Listing {
        Listing::new(vec![Block {
            chunk: chunk(1, 0x100, 0x110),
            body: vec![
                Entry::ChunkCollapsed {
                    chunk: chunk(2, 0x100, 0x104),
                },
                Entry::ChunkCollapsed {
                    chunk: chunk(3, 0x104, 0x108),
                },
            ],
            collapsed: false,
        }])
    }

    #[test]
    fn body_rows_are_indented_one_level() {
        let mut view = ListingView::new(2);
        view.set_entries(&expanded_listing().entries());
        let indents: Vec<u16> = view.rows().iter().map(|r| r.indent()).collect();
        // begin, two body rows, end
        assert_eq!(indents, [0, 1, 1, 0]);
    }

    #[test]
    fn end_marker_aligns_with_its_begin() {
        let mut view = ListingView::new(2);
        view.set_entries(&expanded_listing().entries());
        let rows = view.rows();
        assert_eq!(rows.first().unwrap().indent(), rows.last().unwrap().indent());
    }

    #[test]
    fn double_click_on_row_emits_collapse_with_its_id() {
        let mut view = ListingView::new(2);
        view.set_entries(&[Entry::ChunkCollapsed {
            chunk: chunk(42, 0, 4),
        }]);
        let area = Rect::new(0, 0, 80, 24);
        let t0 = Instant::now();
        assert_eq!(view.handle_click_at(5, 0, area, t0), None);
        assert_eq!(
            view.handle_click_at(5, 0, area, t0 + Duration::from_millis(80)),
            Some(ViewEvent::ChunkCollapse(42))
        );
        // tracker reset: the next pair starts from scratch
        assert_eq!(
            view.handle_click_at(5, 0, area, t0 + Duration::from_millis(160)),
            None
        );
    }

    #[test]
    fn click_outside_area_is_ignored() {
        let mut view = ListingView::new(2);
        view.set_entries(&[Entry::ChunkCollapsed {
            chunk: chunk(1, 0, 4),
        }]);
        let area = Rect::new(0, 0, 80, 10);
        let t0 = Instant::now();
        assert_eq!(view.handle_click_at(5, 15, area, t0), None);
        assert_eq!(view.handle_click_at(5, 15, area, t0), None);
    }

    #[test]
    fn click_below_last_row_is_ignored() {
        let mut view = ListingView::new(2);
        view.set_entries(&[Entry::ChunkCollapsed {
            chunk: chunk(1, 0, 4),
        }]);
        let area = Rect::new(0, 0, 80, 24);
        let t0 = Instant::now();
        assert_eq!(view.handle_click_at(0, 7, area, t0), None);
    }

    #[test]
    fn scroll_shifts_click_mapping() {
        let mut view = ListingView::new(2);
        let entries: Vec<Entry> = (0..10)
            .map(|i| Entry::ChunkCollapsed {
                chunk: chunk(i, i * 4, i * 4 + 4),
            })
            .collect();
        view.set_entries(&entries);
        view.scroll_down(3);
        let area = Rect::new(0, 0, 80, 5);
        let t0 = Instant::now();
        view.handle_click_at(0, 0, area, t0);
        assert_eq!(
            view.handle_click_at(0, 0, area, t0 + Duration::from_millis(50)),
            Some(ViewEvent::ChunkCollapse(3))
        );
    }

    #[test]
    fn scroll_is_clamped() {
        let mut view = ListingView::new(2);
        view.set_entries(&[Entry::ChunkCollapsed {
            chunk: chunk(1, 0, 4),
        }]);
        view.scroll_down(100);
        view.scroll_up(200);
        // still usable: row 0 reachable
        let area = Rect::new(0, 0, 80, 24);
        let t0 = Instant::now();
        view.handle_click_at(0, 0, area, t0);
        assert_eq!(
            view.handle_click_at(0, 0, area, t0 + Duration::from_millis(50)),
            Some(ViewEvent::ChunkCollapse(1))
        );
    }

    #[test]
    fn column_toggle_survives_rebuild() {
        let mut view = ListingView::new(2);
        let entries = expanded_listing().entries();
        view.set_entries(&entries);
        view.toggle_column(Column::Address);
        view.set_entries(&entries);
        assert!(view.rows().iter().all(|r| !r.address_visible()));
    }
}
