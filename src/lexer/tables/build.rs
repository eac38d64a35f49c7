// src/lexer/tables/build.rs
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use hashbrown::HashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Classify, Rule, RuleTable, State, TokenKind};

/// Rules shared by every mode, as `(classification, pattern, next state)`.
///
/// Order matters: within a state the first rule that matches at the cursor
/// wins, so comments and strings must come before numbers and words.
const START_PATTERNS: &[(Classify, &str, Option<State>)] = &[
    (Classify::Kind(TokenKind::Comment), r"//.*", None),
    (
        Classify::Kind(TokenKind::Comment),
        r"/\*",
        Some(State::InBlockComment),
    ),
    (
        Classify::Kind(TokenKind::String),
        r#""(?:\\.|[^"\\])*?""#,
        None,
    ),
    (Classify::Kind(TokenKind::String), r"'(?:\\.|[^'\\])*?'", None),
    (
        Classify::Kind(TokenKind::Number),
        r"[+-]?[0-9]+(?:(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?)?\b",
        None,
    ),
    (Classify::Kind(TokenKind::DelimiterOpen), r"[\[({]", None),
    (Classify::Kind(TokenKind::DelimiterClose), r"[\])}]", None),
];

// Tried after START_PATTERNS and any configured extra rules.
const WORD_PATTERN: &str = r"\w+";

const BLOCK_COMMENT_PATTERNS: &[(Classify, &str, Option<State>)] = &[
    (Classify::Kind(TokenKind::Comment), r".*?\*/", Some(State::Start)),
    (Classify::Kind(TokenKind::Comment), r".+", None),
];

fn anchored(pat: &str) -> String {
    format!("^(?:{pat})")
}

fn compile(patterns: &[(Classify, &str, Option<State>)]) -> Vec<Rule> {
    patterns
        .iter()
        .map(|&(classify, pat, next)| Rule {
            classify,
            // Built-in patterns are constants; a failure here is a typo in this file.
            regex: Regex::new(&anchored(pat)).expect("built-in lexer pattern must compile"),
            next,
        })
        .collect()
}

static START_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(START_PATTERNS));
static WORD_RULE: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile(&[(Classify::Word, WORD_PATTERN, None)]));
static BLOCK_COMMENT_RULES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| compile(BLOCK_COMMENT_PATTERNS));

/// An additional start-state rule supplied by a mode configuration.
///
/// The pattern is matched against the remainder of the line, so `^` and `\b`
/// treat the cursor as the start of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRule {
    pub kind: TokenKind,
    pub pattern: String,
}

fn compile_extra(extra: &ExtraRule) -> Result<Rule> {
    let regex = Regex::new(&anchored(&extra.pattern))
        .with_context(|| format!("invalid pattern for {} rule: {:?}", extra.kind, extra.pattern))?;
    if regex.is_match("") {
        return Err(anyhow!(
            "pattern for {} rule matches the empty string: {:?}",
            extra.kind,
            extra.pattern
        ));
    }
    Ok(Rule {
        classify: Classify::Kind(extra.kind),
        regex,
        next: None,
    })
}

/// Build the rule table for one mode from its keyword set and extra rules.
pub fn build_rule_table<I, S>(keywords: I, extra_rules: &[ExtraRule]) -> Result<RuleTable>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keywords: HashSet<String> = keywords.into_iter().map(Into::into).collect();

    let mut start = START_RULES.clone();
    for extra in extra_rules {
        start.push(compile_extra(extra)?);
    }
    start.extend(WORD_RULE.iter().cloned());

    log::debug!(
        "[tables] built rule table: {} start rules ({} extra), {} keywords",
        start.len(),
        extra_rules.len(),
        keywords.len()
    );

    Ok(RuleTable {
        rules: [start, BLOCK_COMMENT_RULES.clone()],
        keywords,
    })
}
