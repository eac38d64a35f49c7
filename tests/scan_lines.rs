//! Line-level scanner behaviour on hand-written Balzac lines.

use balzac_mode::{
    lexer::{Span, State, TokenKind},
    mode::{Mode, ModeConfig},
};

fn balzac() -> Mode {
    Mode::new(&ModeConfig::balzac()).expect("balzac mode builds")
}

fn kinds_and_text<'a>(line: &'a str, spans: &[Span]) -> Vec<(TokenKind, &'a str)> {
    spans.iter().map(|s| (s.kind, s.text(line))).collect()
}

#[test]
fn block_comment_threads_across_lines() {
    use TokenKind::*;
    let mode = balzac();

    let line1 = "/* start";
    let (spans1, st1) = mode.tokenize(line1, State::Start);
    assert_eq!(st1, State::InBlockComment);
    assert!(spans1.iter().all(|s| s.kind == Comment));

    let line2 = "still comment */ int x";
    let (spans2, st2) = mode.tokenize(line2, st1);
    assert_eq!(st2, State::Start);
    assert_eq!(
        spans2[0],
        Span {
            kind: Comment,
            start: 0,
            end: line2.find("*/").unwrap() + 2,
        }
    );
    assert_eq!(
        kinds_and_text(line2, &spans2[1..]),
        vec![(Text, " "), (Keyword, "int"), (Text, " "), (Text, "x")]
    );
}

#[test]
fn signed_float_with_exponent_is_one_number() {
    let mode = balzac();
    let line = "value = -12.5e3;";
    let (spans, st) = mode.tokenize(line, State::Start);
    assert_eq!(st, State::Start);

    let nums: Vec<&Span> = spans.iter().filter(|s| s.kind == TokenKind::Number).collect();
    assert_eq!(nums.len(), 1);
    assert_eq!(nums[0].text(line), "-12.5e3");
    assert_eq!((nums[0].start, nums[0].end), (8, 15));
}

#[test]
fn escaped_quote_does_not_end_string() {
    let mode = balzac();
    let line = r#"string s = "a\"b";"#;
    let (spans, _) = mode.tokenize(line, State::Start);

    let strings: Vec<&Span> = spans.iter().filter(|s| s.kind == TokenKind::String).collect();
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].text(line), r#""a\"b""#);
    assert_eq!(spans[0].kind, TokenKind::Keyword, "`string` is a keyword");
    assert_eq!(spans.last().map(|s| s.text(line)), Some(";"));
}

#[test]
fn single_quoted_string_with_escape() {
    let mode = balzac();
    let line = r"'it\'s' x";
    let (spans, _) = mode.tokenize(line, State::Start);
    assert_eq!(spans[0].kind, TokenKind::String);
    assert_eq!(spans[0].text(line), r"'it\'s'");
}

#[test]
fn uncovered_character_is_single_text_span() {
    let mode = balzac();
    let (spans, st) = mode.tokenize("@", State::Start);
    assert_eq!(
        spans,
        vec![Span {
            kind: TokenKind::Text,
            start: 0,
            end: 1
        }]
    );
    assert_eq!(st, State::Start);
}

#[test]
fn keyword_requires_whole_word() {
    let mode = balzac();

    let (spans, _) = mode.tokenize("versigx", State::Start);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, TokenKind::Text);

    let line = "versig(k; x)";
    let (spans, _) = mode.tokenize(line, State::Start);
    assert_eq!(spans[0].kind, TokenKind::Keyword);
    assert_eq!(spans[0].text(line), "versig");
    assert_eq!(spans[1].kind, TokenKind::DelimiterOpen);
    assert_eq!(spans.last().map(|s| s.kind), Some(TokenKind::DelimiterClose));

    // case-sensitive
    let (spans, _) = mode.tokenize("Versig", State::Start);
    assert_eq!(spans[0].kind, TokenKind::Text);
}

#[test]
fn keywords_inside_strings_and_comments_stay_put() {
    let mode = balzac();

    let line = r#""int transaction""#;
    let (spans, _) = mode.tokenize(line, State::Start);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, TokenKind::String);

    let line = "x // int versig";
    let (spans, st) = mode.tokenize(line, State::Start);
    assert_eq!(st, State::Start);
    let last = spans.last().unwrap();
    assert_eq!(last.kind, TokenKind::Comment);
    assert_eq!(last.text(line), "// int versig");
}

#[test]
fn block_comment_closed_on_same_line() {
    use TokenKind::*;
    let mode = balzac();
    let line = "a /* b */ int";
    let (spans, st) = mode.tokenize(line, State::Start);
    assert_eq!(st, State::Start);
    assert_eq!(
        kinds_and_text(line, &spans),
        vec![
            (Text, "a"),
            (Text, " "),
            (Comment, "/*"),
            (Comment, " b */"),
            (Text, " "),
            (Keyword, "int"),
        ]
    );
}

#[test]
fn line_comment_hides_block_open() {
    let mode = balzac();
    let (spans, st) = mode.tokenize("// not /* a block", State::Start);
    assert_eq!(st, State::Start);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, TokenKind::Comment);
}

#[test]
fn number_edges() {
    use TokenKind::*;
    let mode = balzac();

    let (spans, _) = mode.tokenize("1.", State::Start);
    assert_eq!(
        kinds_and_text("1.", &spans),
        vec![(Number, "1"), (Text, ".")]
    );

    // digits running into letters are an identifier, not a number
    let (spans, _) = mode.tokenize("12abc", State::Start);
    assert_eq!(kinds_and_text("12abc", &spans), vec![(Text, "12abc")]);

    let (spans, _) = mode.tokenize("x-1", State::Start);
    assert_eq!(
        kinds_and_text("x-1", &spans),
        vec![(Text, "x"), (Number, "-1")]
    );

    let (spans, _) = mode.tokenize("+7 3E-2", State::Start);
    assert_eq!(
        kinds_and_text("+7 3E-2", &spans),
        vec![(Number, "+7"), (Text, " "), (Number, "3E-2")]
    );
}

#[test]
fn delimiters_open_and_close() {
    use TokenKind::*;
    let mode = balzac();
    let line = "{[(x)]}";
    let (spans, _) = mode.tokenize(line, State::Start);
    let kinds: Vec<TokenKind> = spans.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DelimiterOpen,
            DelimiterOpen,
            DelimiterOpen,
            Text,
            DelimiterClose,
            DelimiterClose,
            DelimiterClose
        ]
    );
}

#[test]
fn closing_marker_mid_line_returns_to_start() {
    let mode = balzac();
    let line = "   still */ 5";
    let (spans, st) = mode.tokenize(line, State::InBlockComment);
    assert_eq!(st, State::Start);
    assert_eq!(spans[0].text(line), "   still */");
    assert_eq!(spans.last().map(|s| s.kind), Some(TokenKind::Number));
}

#[test]
fn repeated_calls_agree() {
    let mode = balzac();
    for line in [
        "transaction T { input = _ output = 1 BTC: fun(x) . versig(k; x) }",
        "/* half",
        "done */ \"s\" 'c' 0.5",
        "",
    ] {
        for st in [State::Start, State::InBlockComment] {
            assert_eq!(mode.tokenize(line, st), mode.tokenize(line, st));
        }
    }
}

#[test]
fn host_facing_names() {
    use balzac_mode::lexer::tables::ALL_KINDS;

    assert_eq!(TokenKind::Number.style(), "constant.numeric");
    assert_eq!(TokenKind::DelimiterOpen.style(), "lparen");
    for &k in ALL_KINDS {
        assert_eq!(TokenKind::from_style(k.style()), Some(k));
    }
    assert_eq!(TokenKind::from_style("bogus"), None);

    assert_eq!(State::from_name("comment"), Some(State::InBlockComment));
    assert_eq!(State::from_name("start"), Some(State::Start));
    assert_eq!(State::default(), State::Start);
}
