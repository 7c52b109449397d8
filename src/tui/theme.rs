//! Per-role styles for listing rows.
//!
//! Colors come from config as names or hex values (`"magenta"`,
//! `"#dd0000"`), parsed through ratatui's `Color::from_str`. Emphasis
//! (bold address, italic comment, bold highlighted text) is fixed.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style slot a segment is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Opcode,
    Modifier,
    Label,
    Register,
    Text,
    TextHighlighted,
    Blank,
    Number,
    Str,
}

/// Resolved styles, ready for rendering.
#[derive(Debug, Clone)]
pub struct Theme {
    pub address: Style,
    pub comment: Style,
    pub opcode: Style,
    pub modifier: Style,
    pub label: Style,
    pub register: Style,
    pub text: Style,
    pub text_highlighted: Style,
    pub blank: Style,
    pub number: Style,
    pub string: Style,
}

impl Theme {
    pub fn segment(&self, role: SegmentRole) -> Style {
        match role {
            SegmentRole::Opcode => self.opcode,
            SegmentRole::Modifier => self.modifier,
            SegmentRole::Label => self.label,
            SegmentRole::Register => self.register,
            SegmentRole::Text => self.text,
            SegmentRole::TextHighlighted => self.text_highlighted,
            SegmentRole::Blank => self.blank,
            SegmentRole::Number => self.number,
            SegmentRole::Str => self.string,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeConfig::default().build().expect("default colors parse")
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// Color assignments as read from the config file. Values are ratatui
/// color names or `#rrggbb`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub address: String,
    pub comment: String,
    pub opcode: String,
    pub modifier: String,
    pub label: String,
    pub register: String,
    pub text: String,
    pub blank: String,
    pub number: String,
    pub string: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            address: "magenta".into(),
            comment: "blue".into(),
            opcode: "green".into(),
            modifier: "cyan".into(),
            label: "magenta".into(),
            register: "red".into(),
            text: "cyan".into(),
            blank: "white".into(),
            number: "yellow".into(),
            string: "yellow".into(),
        }
    }
}

impl ThemeConfig {
    /// Resolve color names into concrete styles.
    pub fn build(&self) -> Result<Theme, ThemeError> {
        let fg = |name: &str| -> Result<Style, ThemeError> {
            Color::from_str(name)
                .map(|c| Style::default().fg(c))
                .map_err(|_| ThemeError::UnknownColor(name.to_string()))
        };
        let text = fg(&self.text)?;
        Ok(Theme {
            address: fg(&self.address)?.add_modifier(Modifier::BOLD),
            comment: fg(&self.comment)?.add_modifier(Modifier::ITALIC | Modifier::BOLD),
            opcode: fg(&self.opcode)?,
            modifier: fg(&self.modifier)?,
            label: fg(&self.label)?,
            register: fg(&self.register)?,
            text,
            text_highlighted: text.add_modifier(Modifier::BOLD),
            blank: fg(&self.blank)?,
            number: fg(&self.number)?,
            string: fg(&self.string)?,
        })
    }
}
