// src/lexer/mod.rs
pub mod document;
pub mod scanner;
pub mod tables;

pub use document::Document;
pub use scanner::{Span, check_tiling, tokenize, tokenize_lines};
pub use tables::{State, TokenKind};
