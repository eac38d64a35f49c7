// src/lexer/document.rs
// Host-side cache of per-line spans and end states. After an edit only the
// lines whose incoming state actually changed are scanned again.

use std::{ops::Range, sync::Arc};

use crate::{
    lexer::{scanner::Span, tables::State},
    mode::Mode,
};

#[derive(Debug, Clone)]
struct Line {
    text: String,
    spans: Vec<Span>,
    // None until the line has been scanned at least once.
    end: Option<State>,
}

impl Line {
    fn unscanned(text: String) -> Self {
        Self {
            text,
            spans: Vec::new(),
            end: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    mode: Arc<Mode>,
    lines: Vec<Line>,
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

impl Document {
    /// An empty document (a single empty line).
    pub fn new(mode: Arc<Mode>) -> Self {
        let mut doc = Self {
            mode,
            lines: Vec::new(),
        };
        doc.set_text("");
        doc
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Replace the whole text and scan every line.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text
            .split('\n')
            .map(|l| Line::unscanned(strip_cr(l).to_string()))
            .collect();
        self.rescan_from(0);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_text(&self, i: usize) -> Option<&str> {
        self.lines.get(i).map(|l| l.text.as_str())
    }

    pub fn line_spans(&self, i: usize) -> Option<&[Span]> {
        self.lines.get(i).map(|l| l.spans.as_slice())
    }

    pub fn line_end_state(&self, i: usize) -> Option<State> {
        self.lines.get(i).and_then(|l| l.end)
    }

    /// State line `i` is scanned in: the previous line's end state.
    pub fn line_start_state(&self, i: usize) -> State {
        match i.checked_sub(1) {
            None => self.mode.start_state(),
            Some(prev) => self
                .lines
                .get(prev)
                .and_then(|l| l.end)
                .unwrap_or_else(|| self.mode.start_state()),
        }
    }

    /// Iterate `(text, spans)` for every line in order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &[Span])> {
        self.lines
            .iter()
            .map(|l| (l.text.as_str(), l.spans.as_slice()))
    }

    /// Replace line `i`. Returns the range of lines that were re-scanned.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn edit_line(&mut self, i: usize, text: &str) -> Range<usize> {
        self.lines[i].text = strip_cr(text).to_string();
        self.rescan_from(i)
    }

    /// Insert a new line before line `i` (`i == line_count()` appends).
    ///
    /// # Panics
    /// If `i > line_count()`.
    pub fn insert_line(&mut self, i: usize, text: &str) -> Range<usize> {
        self.lines
            .insert(i, Line::unscanned(strip_cr(text).to_string()));
        self.rescan_from(i)
    }

    /// Remove line `i`. A document always keeps at least one line, so removing
    /// the last remaining line just empties it.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn remove_line(&mut self, i: usize) -> Range<usize> {
        if self.lines.len() == 1 {
            return self.edit_line(i, "");
        }
        self.lines.remove(i);
        if i < self.lines.len() {
            self.rescan_from(i)
        } else {
            i..i
        }
    }

    // Scan forward from `first` until a line ends in the same state it ended
    // in before; nothing after that line can change.
    fn rescan_from(&mut self, first: usize) -> Range<usize> {
        let mut state = self.line_start_state(first);
        let mut i = first;
        while i < self.lines.len() {
            let line = &mut self.lines[i];
            let (spans, end) = self.mode.tokenize(&line.text, state);
            let prev = line.end.replace(end);
            line.spans = spans;
            i += 1;
            if prev == Some(end) {
                break;
            }
            state = end;
        }
        log::debug!("[document] re-scanned lines {first}..{i}");
        first..i
    }
}
