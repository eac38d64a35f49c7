// src/mode/mod.rs
//! Named lexical modes as a host editor registers them.

pub mod config;
pub mod io;
pub mod registry;

use anyhow::{Context, Result};

pub use config::ModeConfig;
pub use io::{load_mode_json, load_mode_json_bytes, save_mode_json};
pub use registry::ModeRegistry;

use crate::lexer::{
    scanner::{Span, tokenize},
    tables::{RuleTable, START, State, build_rule_table},
};

/// A completion candidate offered to the host. Modes currently offer none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub caption: String,
    pub value: String,
    pub score: i32,
}

/// A compiled mode: the rule table plus the editor metadata that goes with it.
#[derive(Debug, Clone)]
pub struct Mode {
    id: String,
    table: RuleTable,
    line_comment: Option<String>,
    dont_indent_states: Vec<State>,
}

impl Mode {
    pub fn new(config: &ModeConfig) -> Result<Self> {
        let table = build_rule_table(config.keywords.iter().cloned(), &config.extra_rules)
            .with_context(|| format!("building rule table for mode {}", config.id))?;
        Ok(Self {
            id: config.id.clone(),
            table,
            line_comment: config.line_comment.clone(),
            dont_indent_states: config.dont_indent_states.clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_state(&self) -> State {
        START
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// See [`crate::lexer::scanner::tokenize`].
    pub fn tokenize(&self, line: &str, state: State) -> (Vec<Span>, State) {
        tokenize(&self.table, line, state)
    }

    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    /// Whether the host may auto-indent a line that starts in `state`.
    pub fn indents_in(&self, state: State) -> bool {
        !self.dont_indent_states.contains(&state)
    }

    /// Completion hook for the host. Always empty: these modes provide
    /// highlighting only.
    pub fn completions(
        &self,
        _state: State,
        _line: &str,
        _pos: usize,
        _prefix: &str,
    ) -> Vec<Completion> {
        Vec::new()
    }
}
