//! TUI messages and double-click tracking.
//!
//! All terminal input reaches the update loop as `TuiMessage`s. The
//! listing view turns a double click on a row into a `ViewEvent` for
//! whoever owns the listing data.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseEvent};

use crate::model::ChunkId;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Mouse input (clicks, scroll).
    Mouse(MouseEvent),
    /// Render: draw a frame.
    Render,
    /// Quit the TUI.
    Quit,
}

/// Notifications the listing view raises toward its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A row was double-clicked: toggle collapse of this chunk.
    ChunkCollapse(ChunkId),
}

/// Two presses on the same row within this window count as one double
/// click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

/// Tracks the previous press to recognize double clicks. Timestamps are
/// passed in, so tests need no sleeping.
#[derive(Debug, Default)]
pub struct DoubleClick {
    last: Option<(ChunkId, Instant)>,
}

impl DoubleClick {
    /// Record a press on `id`. Returns true when it completes a double
    /// click, which also resets the tracker (a third press starts over).
    pub fn observe(&mut self, id: ChunkId, at: Instant) -> bool {
        match self.last.take() {
            Some((prev, then)) if prev == id && at.duration_since(then) <= DOUBLE_CLICK_WINDOW => {
                true
            }
            _ => {
                self.last = Some((id, at));
                false
            }
        }
    }
}
