// src/lexer/scanner.rs
// Line-at-a-time scanner. The only memory between lines is the `State`
// returned by `tokenize` and fed back in for the next line.

use serde::Serialize;

use crate::lexer::tables::{RuleTable, State, TokenKind};

/// A classified byte range `[start, end)` of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `line` this span covers.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Split `line` into spans, starting in `state`.
///
/// Returns the spans (which tile the whole line) and the state the next line
/// should be scanned in. Never fails: a character no rule matches becomes a
/// one-character [`TokenKind::Text`] span. Offsets are byte offsets and always
/// fall on char boundaries.
pub fn tokenize(table: &RuleTable, line: &str, state: State) -> (Vec<Span>, State) {
    let n = line.len();
    let mut out: Vec<Span> = Vec::new();
    let mut state = state;
    let mut cursor = 0usize;

    while cursor < n {
        let hit = table
            .rules_for(state)
            .iter()
            .find_map(|rule| rule.match_len(line, cursor).map(|len| (rule, len)));

        match hit {
            Some((rule, len)) => {
                let end = cursor + len;
                out.push(Span {
                    kind: table.classify(rule, &line[cursor..end]),
                    start: cursor,
                    end,
                });
                if let Some(next) = rule.next {
                    state = next;
                }
                cursor = end;
            }
            None => {
                // `cursor < n` and always on a boundary, so there is a char here.
                let width = line[cursor..].chars().next().map_or(1, char::len_utf8);
                out.push(Span {
                    kind: TokenKind::Text,
                    start: cursor,
                    end: cursor + width,
                });
                cursor += width;
            }
        }
    }

    (out, state)
}

/// Scan consecutive lines, threading the state from each line into the next.
/// Returns the spans of every line and the state after the last one.
pub fn tokenize_lines<'a, I>(table: &RuleTable, lines: I, state: State) -> (Vec<Vec<Span>>, State)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = state;
    let mut out = Vec::new();
    for line in lines {
        let (spans, next) = tokenize(table, line, state);
        out.push(spans);
        state = next;
    }
    (out, state)
}

/// Checks that `spans` exactly tile `[0, line.len())` in order.
/// On failure, describes the first gap or overlap.
pub fn check_tiling(line: &str, spans: &[Span]) -> Result<(), String> {
    let mut expect = 0usize;
    for (i, s) in spans.iter().enumerate() {
        if s.start != expect {
            return Err(format!(
                "span {i} starts at {} but previous span ended at {expect}",
                s.start
            ));
        }
        if s.is_empty() {
            return Err(format!("span {i} at {} is empty", s.start));
        }
        if s.end > line.len() || !line.is_char_boundary(s.end) {
            return Err(format!("span {i} ends at {} (not a char boundary)", s.end));
        }
        expect = s.end;
    }
    if expect != line.len() {
        return Err(format!(
            "spans cover [0, {expect}) but line has {} bytes",
            line.len()
        ));
    }
    Ok(())
}
