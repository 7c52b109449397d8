//! Tagged text tree — pre-styled disassembly text.
//!
//! Producers hand the view a finite tree: `Sublist` nodes group children
//! in display order, leaves carry rendered strings. The view walks it
//! depth-first and never mutates it.

/// Flavor of a keyword leaf, selects its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Opcode,
    Modifier,
    Label,
    Register,
}

/// One node of the text tree. Leaves carry the exact string to display;
/// `Str` payloads arrive already quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRepr {
    /// Ordered children, each uniquely owned. Contributes no text itself.
    Sublist(Vec<TextRepr>),
    Keyword { kind: KeywordKind, text: String },
    Text { text: String, highlight: bool },
    Blank(String),
    Number(String),
    Str(String),
}

impl TextRepr {
    /// Number of leaves in depth-first order. A `Sublist` counts only
    /// its descendants.
    pub fn leaf_count(&self) -> usize {
        match self {
            TextRepr::Sublist(children) => children.iter().map(TextRepr::leaf_count).sum(),
            _ => 1,
        }
    }

    pub fn keyword(kind: KeywordKind, text: impl Into<String>) -> Self {
        TextRepr::Keyword {
            kind,
            text: text.into(),
        }
    }

    pub fn opcode(text: impl Into<String>) -> Self {
        Self::keyword(KeywordKind::Opcode, text)
    }

    pub fn register(text: impl Into<String>) -> Self {
        Self::keyword(KeywordKind::Register, text)
    }

    pub fn text(text: impl Into<String>, highlight: bool) -> Self {
        TextRepr::Text {
            text: text.into(),
            highlight,
        }
    }

    /// A run of `width` spaces.
    pub fn blank(width: usize) -> Self {
        TextRepr::Blank(" ".repeat(width))
    }
}
