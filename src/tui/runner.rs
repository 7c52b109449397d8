//! TUI runner — terminal setup and the main loop.
//!
//! Raw mode + alternate screen + mouse capture, then a tokio select
//! loop: render interval (~30fps) and polled crossterm input. Input is
//! translated to `TuiMessage`s and applied to the view; a collapse
//! event flips the listing and rebuilds the rows.

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::time::interval;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::model::Listing;

use super::event::{TuiMessage, ViewEvent};
use super::row::Column;
use super::view::ListingView;

const PAGE_SCROLL: usize = 20;

/// Apply one message. Returns true when the loop should exit.
fn handle_message(
    msg: TuiMessage,
    listing: &mut Listing,
    view: &mut ListingView,
    area: Rect,
) -> bool {
    match msg {
        TuiMessage::Input(key) => handle_key(key, view),
        TuiMessage::Mouse(mouse) => {
            if let Some(ViewEvent::ChunkCollapse(id)) = view.handle_mouse(mouse, area) {
                if listing.toggle_collapse(id) {
                    view.set_entries(&listing.entries());
                } else {
                    debug!(id, "collapse requested for a row that is not a block");
                }
            }
            false
        }
        TuiMessage::Render => false,
        TuiMessage::Quit => true,
    }
}

fn handle_key(key: KeyEvent, view: &mut ListingView) -> bool {
    match key.code {
        KeyCode::Char('a') => view.toggle_column(Column::Address),
        KeyCode::Char('c') => view.toggle_column(Column::Chunks),
        KeyCode::Char('m') => view.toggle_column(Column::Comments),
        KeyCode::Up => view.scroll_up(1),
        KeyCode::Down => view.scroll_down(1),
        KeyCode::PageUp => view.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => view.scroll_down(PAGE_SCROLL),
        _ => {}
    }
    false
}

fn translate(ev: Event) -> Option<TuiMessage> {
    match ev {
        Event::Key(key) => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(TuiMessage::Quit),
            _ => Some(TuiMessage::Input(key)),
        },
        Event::Mouse(mouse) => Some(TuiMessage::Mouse(mouse)),
        _ => None,
    }
}

/// Run the viewer main loop. Blocks until quit.
pub async fn run_tui(mut listing: Listing, config: ViewerConfig) -> anyhow::Result<()> {
    let theme = config.theme()?;
    let mut view = ListingView::new(config.indent_unit);
    view.set_entries(&listing.entries());

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps
    let mut view_area = Rect::default();

    loop {
        let mut quit = false;
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| {
                    view_area = f.area();
                    view.draw(f, view_area, &theme);
                })?;
            }
            // Poll crossterm events (non-blocking via tokio::task::spawn_blocking)
            result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            }) => {
                if let Ok(Some(ev)) = result {
                    if let Some(msg) = translate(ev) {
                        quit = handle_message(msg, &mut listing, &mut view, view_area);
                    }
                }
            }
        }

        if quit {
            break;
        }
    }

    // Restore terminal
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
