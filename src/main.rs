// src/main.rs
// Highlight Balzac sources from the command line.
// Usage:
//   balzac-mode [--mode ID|PATH.json] [--json] [FILE...]
// With no files, a built-in sample is highlighted.

use std::{env, fs, path::Path, process, sync::Arc};

use anyhow::{Context, Result, anyhow};
use balzac_mode::{
    lexer::{Span, State},
    mode::{Mode, ModeRegistry, load_mode_json},
};
use rayon::prelude::*;
use serde::Serialize;

const SAMPLE: &str = r#"package sample
/* a multi-line
   comment */ const fee = 0.5e-3 // trailing
transaction T1 {
    input = _
    output = 10 BTC: fun(x) . versig(k_alice; x)
}
eval T1, "a\"b", versigx
"#;

#[derive(Serialize)]
struct JsonSpan<'a> {
    kind: &'static str,
    start: usize,
    end: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    spans: Vec<JsonSpan<'a>>,
    end_state: State,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: &'a str,
    mode: &'a str,
    lines: Vec<JsonLine<'a>>,
}

struct Args {
    mode: String,
    json: bool,
    files: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        mode: "xtext/balzac".to_string(),
        json: false,
        files: Vec::new(),
    };
    let mut it = env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--json" => args.json = true,
            "--mode" => {
                args.mode = it.next().ok_or_else(|| anyhow!("--mode needs a value"))?;
            }
            "-h" | "--help" => {
                println!("usage: balzac-mode [--mode ID|PATH.json] [--json] [FILE...]");
                process::exit(0);
            }
            _ => args.files.push(a),
        }
    }
    Ok(args)
}

fn resolve_mode(registry: &ModeRegistry, spec: &str) -> Result<Arc<Mode>> {
    if let Some(mode) = registry.get(spec) {
        return Ok(mode);
    }
    let path = Path::new(spec);
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let config = load_mode_json(path)?;
        return Ok(Arc::new(Mode::new(&config)?));
    }
    Err(anyhow!(
        "unknown mode {spec:?} (known: {})",
        registry.ids().join(", ")
    ))
}

fn split_lines(src: &str) -> impl Iterator<Item = &str> {
    src.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

fn render_plain(mode: &Mode, label: &str, src: &str) -> String {
    let mut out = format!("== {label} ({})\n", mode.id());
    let mut state = mode.start_state();
    for (i, line) in split_lines(src).enumerate() {
        let (spans, next) = mode.tokenize(line, state);
        out.push_str(&format!("{:>4} {:<7}|", i + 1, next.name()));
        for s in spans.iter().filter(|s| !s.text(line).trim().is_empty()) {
            out.push_str(&format!(" {}:{:?}", s.kind.style(), s.text(line)));
        }
        out.push('\n');
        state = next;
    }
    out
}

fn render_json(mode: &Mode, label: &str, src: &str) -> Result<String> {
    let mut state = mode.start_state();
    let mut lines = Vec::new();
    for line in split_lines(src) {
        let (spans, next) = mode.tokenize(line, state);
        lines.push(JsonLine {
            spans: spans
                .iter()
                .map(|s: &Span| JsonSpan {
                    kind: s.kind.style(),
                    start: s.start,
                    end: s.end,
                    text: s.text(line),
                })
                .collect(),
            end_state: next,
        });
        state = next;
    }
    let file = JsonFile {
        file: label,
        mode: mode.id(),
        lines,
    };
    serde_json::to_string(&file).context("serialize spans")
}

fn highlight(mode: &Mode, label: &str, src: &str, json: bool) -> Result<String> {
    if json {
        render_json(mode, label, src)
    } else {
        Ok(render_plain(mode, label, src))
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let registry = ModeRegistry::with_builtin_modes()?;
    let mode = resolve_mode(&registry, &args.mode)?;

    if args.files.is_empty() {
        println!("{}", highlight(&mode, "<sample>", SAMPLE, args.json)?);
        return Ok(());
    }

    // Files are independent documents, so they can be scanned in parallel.
    let rendered: Vec<Result<String>> = args
        .files
        .par_iter()
        .map(|path| {
            let src = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
            highlight(&mode, path, &src, args.json)
        })
        .collect();

    let mut failed = 0usize;
    for r in rendered {
        match r {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e:#}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(anyhow!("{failed} file(s) failed"));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
