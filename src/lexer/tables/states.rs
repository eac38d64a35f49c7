// src/lexer/tables/states.rs

use serde::{Deserialize, Serialize};

/// Scanner states carried from the end of one line into the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    #[default]
    #[serde(rename = "start")]
    Start,
    // inside `/* ... */`, waiting for the closing `*/`
    #[serde(rename = "comment")]
    InBlockComment,
}

impl State {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Host-facing state name (`start` / `comment`).
    pub fn name(self) -> &'static str {
        match self {
            State::Start => "start",
            State::InBlockComment => "comment",
        }
    }

    pub fn from_name(s: &str) -> Option<State> {
        ALL_STATES.iter().copied().find(|st| st.name() == s)
    }
}

impl core::fmt::Display for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

pub const N_STATES: usize = 2;
pub const START: State = State::Start;

pub const ALL_STATES: &[State] = &[State::Start, State::InBlockComment];
