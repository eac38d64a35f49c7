// src/lexer/tables/mod.rs
pub mod build;
pub mod states;
pub mod tokens;

use hashbrown::HashSet;
use regex::Regex;

pub use build::{ExtraRule, build_rule_table};
pub use states::{ALL_STATES, N_STATES, START, State};
pub use tokens::{ALL_KINDS, TokenKind};

/// How a rule's match is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classify {
    Kind(TokenKind),
    /// Keyword if the matched word is in the table's keyword set, else text.
    Word,
}

/// One lexical rule: a pattern tried at the cursor, its classification and
/// an optional state to switch to after it matches.
///
/// `regex` is anchored with `^` and run against the rest of the line, so it
/// only ever matches at the cursor.
#[derive(Debug, Clone)]
pub struct Rule {
    pub classify: Classify,
    pub regex: Regex,
    pub next: Option<State>,
}

impl Rule {
    /// Length of the match starting exactly at `at`, if any.
    /// Empty matches never count so the cursor always advances.
    #[inline]
    pub fn match_len(&self, line: &str, at: usize) -> Option<usize> {
        self.regex
            .find(&line[at..])
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Immutable per-mode rule table: one ordered rule list per state plus the
/// keyword set consulted by [`Classify::Word`] rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub rules: [Vec<Rule>; N_STATES],
    pub keywords: HashSet<String>,
}

impl RuleTable {
    #[inline]
    pub fn rules_for(&self, state: State) -> &[Rule] {
        &self.rules[state.idx()]
    }

    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn classify(&self, rule: &Rule, text: &str) -> TokenKind {
        match rule.classify {
            Classify::Kind(k) => k,
            Classify::Word if self.is_keyword(text) => TokenKind::Keyword,
            Classify::Word => TokenKind::Text,
        }
    }
}
