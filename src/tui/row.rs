//! A single listing row — address cell, styled text segments, trailing
//! comment.
//!
//! `RowView` holds display state only: the strings and style roles to
//! paint, plus per-column visibility. Repopulated in place via
//! `set_entry` as entries scroll through; drawing is a pure read in
//! `draw_row`.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::warn;

use crate::model::text_repr::{KeywordKind, TextRepr};
use crate::model::{ChunkId, Entry};

use super::theme::{SegmentRole, Theme};

/// Columns that can be shown or hidden independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Address,
    /// The first rendered segment of the text region.
    Chunks,
    Comments,
}

/// One styled, non-divisible piece of rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub role: SegmentRole,
}

/// Display state of one row.
#[derive(Debug, Clone)]
pub struct RowView {
    id: ChunkId,
    address: String,
    comment: Option<String>,
    segments: Vec<Segment>,
    indent: u16,
    address_visible: bool,
    first_segment_visible: bool,
}

impl RowView {
    pub fn new(id: ChunkId) -> Self {
        Self {
            id,
            address: String::new(),
            comment: None,
            segments: Vec::new(),
            indent: 0,
            address_visible: true,
            first_segment_visible: true,
        }
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_visible(&self) -> bool {
        self.address_visible
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn indent(&self) -> u16 {
        self.indent
    }

    /// Nesting level of the text region. The left margin is
    /// `level * indent_unit` cells at draw time.
    pub fn set_indent(&mut self, level: u16) {
        self.indent = level;
    }

    /// Drop every segment and reset the indent. Leaves address and
    /// comment untouched.
    pub fn clear_text(&mut self) {
        self.segments.clear();
        self.set_indent(0);
    }

    /// Translate a text tree into segments, appending in depth-first
    /// order. An absent tree is a producer bug: one diagnostic, zero
    /// segments, no panic.
    pub fn render_text_tree(&mut self, repr: Option<&TextRepr>) {
        match repr {
            Some(repr) => self.push_leaves(repr),
            None => warn!(row = self.id, "missing text tree, rendering nothing"),
        }
    }

    fn push_leaves(&mut self, repr: &TextRepr) {
        let (text, role) = match repr {
            TextRepr::Sublist(children) => {
                for child in children {
                    self.push_leaves(child);
                }
                return;
            }
            TextRepr::Keyword { kind, text } => {
                let role = match kind {
                    KeywordKind::Opcode => SegmentRole::Opcode,
                    KeywordKind::Modifier => SegmentRole::Modifier,
                    KeywordKind::Label => SegmentRole::Label,
                    KeywordKind::Register => SegmentRole::Register,
                };
                (text.clone(), role)
            }
            TextRepr::Text { text, highlight } => {
                let role = if *highlight {
                    SegmentRole::TextHighlighted
                } else {
                    SegmentRole::Text
                };
                (text.clone(), role)
            }
            TextRepr::Blank(text) => (text.clone(), SegmentRole::Blank),
            TextRepr::Number(text) => (text.clone(), SegmentRole::Number),
            TextRepr::Str(text) => (text.clone(), SegmentRole::Str),
        };
        self.segments.push(Segment { text, role });
    }

    /// Repopulate the row from an entry. Overlap and field entries have
    /// no rendering policy yet and leave the row unchanged.
    pub fn set_entry(&mut self, entry: &Entry) {
        match entry {
            Entry::ChunkCollapsed { chunk } => {
                self.address = format_address(chunk.addr_begin);
                self.comment = Some(format!("; {}", chunk.comment));
                self.clear_text();
                self.render_text_tree(chunk.text.as_ref());
            }
            Entry::ChunkBegin { chunk } => {
                self.clear_text();
                self.address = format_address(chunk.addr_begin);
                self.comment = Some(format!("; {}", chunk.comment));
                self.segments.push(Segment {
                    text: format!("{}::{} {{", chunk.display_name, chunk.kind),
                    role: SegmentRole::Text,
                });
            }
            Entry::ChunkEnd { chunk } => {
                self.address = format_address(chunk.addr_end);
                self.comment = None;
                self.clear_text();
                self.segments.push(Segment {
                    text: "}".into(),
                    role: SegmentRole::Text,
                });
            }
            Entry::Overlap { .. } | Entry::Field { .. } => {}
        }
    }

    /// Flip visibility of one column. Comment toggling is wired but
    /// disabled until the layout reserves it a fixed slot.
    pub fn toggle_column(&mut self, column: Column) {
        match column {
            Column::Address => self.address_visible = !self.address_visible,
            Column::Chunks => self.first_segment_visible = !self.first_segment_visible,
            Column::Comments => {}
        }
    }

    fn visible_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != 0 || self.first_segment_visible)
            .map(|(_, seg)| seg)
    }
}

/// 8 hex digits, zero-padded, lowercase.
pub fn format_address(addr: u64) -> String {
    format!("{addr:08x}")
}

/// 8 hex digits plus 2 cells of gap.
const ADDRESS_CELL_WIDTH: u16 = 10;

/// Paint one row into `area` (one terminal line): fixed-width address
/// cell, indented segments, comment flush right.
pub fn draw_row(f: &mut Frame, area: Rect, row: &RowView, theme: &Theme, indent_unit: u16) {
    let address_width = if row.address_visible() {
        ADDRESS_CELL_WIDTH
    } else {
        0
    };
    let comment = row.comment().unwrap_or("");
    let comment_width = if comment.is_empty() {
        0
    } else {
        (comment.chars().count() as u16).min(area.width / 2)
    };
    let cells = Layout::horizontal([
        Constraint::Length(address_width),
        Constraint::Min(0),
        Constraint::Length(comment_width),
    ])
    .split(area);

    if row.address_visible() {
        f.render_widget(Paragraph::new(row.address()).style(theme.address), cells[0]);
    }

    let mut spans = vec![Span::raw(" ".repeat((row.indent() * indent_unit) as usize))];
    spans.extend(
        row.visible_segments()
            .map(|seg| Span::styled(seg.text.clone(), theme.segment(seg.role))),
    );
    f.render_widget(Paragraph::new(Line::from(spans)), cells[1]);

    if comment_width > 0 {
        f.render_widget(
            Paragraph::new(comment)
                .style(theme.comment)
                .alignment(Alignment::Right),
            cells[2],
        );
    }
}
