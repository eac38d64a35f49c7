// src/bin/fuzz_scan.rs
// Generate random documents and check the scanner invariants on every line:
// spans tile the line, repeated scans agree, and incremental re-scans in a
// `Document` agree with a full scan after random edits.
//
//   - FUZZ_SEED=<u64>     rng seed (default 42)
//   - FUZZ_ITERS=<n>      documents per mode (default 200)
//   - FUZZ_LEN=<n>        max line length in bytes (default 120)
//   - FUZZ_INPUT=path     replay a saved case instead of fuzzing
//   - FUZZ_DIR=dir        where failing cases are saved (default "fuzz-cases")

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use balzac_mode::{
    dev::generator::gen_document,
    lexer::{Document, check_tiling, tokenize_lines},
    mode::{Mode, ModeRegistry},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn save_case(dir: &str, mode: &str, seed: u64, iter: usize, src: &str) -> PathBuf {
    let _ = fs::create_dir_all(dir);
    let name = mode.rsplit('/').next().unwrap_or(mode);
    let path = Path::new(dir).join(format!("{name}_seed{seed}_iter{iter}.balzac"));
    fs::write(&path, src.as_bytes()).ok();

    let meta = serde_json::json!({
        "mode": mode,
        "seed": seed,
        "iter": iter,
        "bytes": src.len(),
        "replay": format!("FUZZ_INPUT={} cargo run --bin fuzz_scan", path.display()),
    });
    if let Ok(mut f) = fs::File::create(path.with_extension("json")) {
        let _ = writeln!(f, "{}", serde_json::to_string_pretty(&meta).unwrap_or_default());
    }
    path
}

/// Returns a description of the first violated invariant, if any.
fn check_document<R: Rng>(mode: &Arc<Mode>, lines: &[String], rng: &mut R) -> Result<(), String> {
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let (spans, end) = tokenize_lines(mode.table(), refs.iter().copied(), mode.start_state());
    let (again, end_again) = tokenize_lines(mode.table(), refs.iter().copied(), mode.start_state());

    if spans != again || end != end_again {
        return Err("two scans of the same document disagree".into());
    }
    for (i, (line, s)) in refs.iter().zip(spans.iter()).enumerate() {
        check_tiling(line, s).map_err(|e| format!("line {i} {line:?}: {e}"))?;
    }

    // Random edits through the incremental path, then compare with a fresh scan.
    let mut doc = Document::new(mode.clone());
    doc.set_text(&lines.join("\n"));
    let mut current: Vec<String> = lines.to_vec();
    for _ in 0..8 {
        let at = rng.random_range(0..current.len());
        let donor = lines[rng.random_range(0..lines.len())].clone();
        match rng.random_range(0..3) {
            0 => {
                doc.edit_line(at, &donor);
                current[at] = donor;
            }
            1 => {
                doc.insert_line(at, &donor);
                current.insert(at, donor);
            }
            _ if current.len() > 1 => {
                doc.remove_line(at);
                current.remove(at);
            }
            _ => {}
        }
    }

    let mut fresh = Document::new(mode.clone());
    fresh.set_text(&current.join("\n"));
    if doc.line_count() != fresh.line_count() {
        return Err(format!(
            "line count after edits: incremental={} fresh={}",
            doc.line_count(),
            fresh.line_count()
        ));
    }
    for i in 0..doc.line_count() {
        if doc.line_spans(i) != fresh.line_spans(i)
            || doc.line_end_state(i) != fresh.line_end_state(i)
        {
            return Err(format!(
                "line {i} differs after incremental edits: {:?}",
                doc.line_text(i)
            ));
        }
    }
    Ok(())
}

fn main() {
    let registry = match ModeRegistry::with_builtin_modes() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };
    let modes: Vec<Arc<Mode>> = registry.ids().iter().filter_map(|id| registry.get(id)).collect();

    let seed: u64 = env_parse("FUZZ_SEED", 42);
    let iters: usize = env_parse("FUZZ_ITERS", 200);
    let max_len: usize = env_parse("FUZZ_LEN", 120);
    let out_dir = std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".to_string());

    // --- REPLAY A SINGLE CASE ---
    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        eprintln!("[replay] reading {path}");
        let src = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: failed to read {path}: {e}");
                std::process::exit(1);
            }
        };
        let lines: Vec<String> = src.split('\n').map(str::to_owned).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        for mode in &modes {
            if let Err(e) = check_document(mode, &lines, &mut rng) {
                eprintln!("[replay:{}] {e}", mode.id());
                std::process::exit(1);
            }
        }
        eprintln!("[replay] ok");
        return;
    }

    // --- FUZZ MODE ---
    eprintln!("[fuzz] iters={iters} max_len={max_len} seed={seed}");
    for mode in &modes {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(seed);
        for i in 0..iters {
            let n_lines = rng.random_range(1..=24);
            let lines = gen_document(&mut rng, n_lines, max_len);
            if let Err(e) = check_document(mode, &lines, &mut rng) {
                let path = save_case(&out_dir, mode.id(), seed, i, &lines.join("\n"));
                eprintln!("[fuzz:{}] iter {i}: {e}\n  saved: {}", mode.id(), path.display());
                std::process::exit(1);
            }
        }
        eprintln!(
            "[fuzz:{}] {iters} documents ok in {} ms",
            mode.id(),
            t0.elapsed().as_millis()
        );
    }
    eprintln!("[fuzz] all invariants held ✅");
}
