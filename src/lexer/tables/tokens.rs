// src/lexer/tables/tokens.rs

use serde::{Deserialize, Serialize};

/// Token kinds a span can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum TokenKind {
    Comment = 1,
    String = 2,
    Number = 3,

    // bracket-like delimiters: `[ ( {` and `] ) }`
    DelimiterOpen = 4,
    DelimiterClose = 5,

    Keyword = 6,
    // identifiers, operators, whitespace and anything no rule covers
    Text = 7,
}

pub const ALL_KINDS: &[TokenKind] = &[
    TokenKind::Comment,
    TokenKind::String,
    TokenKind::Number,
    TokenKind::DelimiterOpen,
    TokenKind::DelimiterClose,
    TokenKind::Keyword,
    TokenKind::Text,
];

impl TokenKind {
    /// Style name handed to the host editor's renderer.
    pub fn style(self) -> &'static str {
        use TokenKind::*;
        match self {
            Comment => "comment",
            String => "string",
            Number => "constant.numeric",
            DelimiterOpen => "lparen",
            DelimiterClose => "rparen",
            Keyword => "keyword",
            Text => "text",
        }
    }

    pub fn from_style(s: &str) -> Option<TokenKind> {
        ALL_KINDS.iter().copied().find(|k| k.style() == s)
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.style())
    }
}
