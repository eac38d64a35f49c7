// src/dev/generator.rs
// Random source-line generator shared by the fuzz binary and the sweep tests.
// Output is not required to be valid Balzac: it mixes well-formed fragments
// with stray punctuation, unterminated strings and comment markers.

use rand::Rng;

const FRAGMENTS: &[&str] = &[
    "transaction",
    "versig",
    "versigx",
    "fees",
    "regtest",
    "int",
    "string",
    "x",
    "_",
    "T1",
    "k_alice",
    "42",
    "-12.5e3",
    "+7",
    "1.",
    "0xFF",
    "3e",
    "\"abc\"",
    "\"a\\\"b\"",
    "'sig'",
    "\"open",
    "'",
    "//",
    "// tail",
    "/*",
    "*/",
    "/* inline */",
    "*",
    "/",
    "(",
    ")",
    "[",
    "]",
    "{",
    "}",
    "=",
    ";",
    ",",
    ":",
    "@",
    "#",
    "\\",
    "é",
    "λ",
    "\t",
];

/// One line of at least `target_len` bytes (empty when `target_len == 0`).
pub fn gen_line<R: Rng>(rng: &mut R, target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 16);
    while s.len() < target_len {
        let frag = FRAGMENTS[rng.random_range(0..FRAGMENTS.len())];
        s.push_str(frag);
        if rng.random_bool(0.6) {
            s.push(' ');
        }
    }
    s
}

/// `lines` random lines with lengths in `0..=max_len`.
pub fn gen_document<R: Rng>(rng: &mut R, lines: usize, max_len: usize) -> Vec<String> {
    (0..lines)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            gen_line(rng, len)
        })
        .collect()
}
