//! ratatui presentation layer for the listing.
//!
//! Immediate mode: `RowView`s are lightweight display-state copies
//! rebuilt from entries, drawn fresh every frame. The view never
//! mutates the listing data — collapse requests flow back to the owner
//! as `ViewEvent`s.

pub mod event;
pub mod row;
pub mod runner;
pub mod theme;
pub mod view;
