// src/bin/gen_modes.rs
// Write the built-in mode configurations to JSON so hosts can load or tweak them.
// Usage:
//   cargo run --bin gen_modes                # writes modes/<name>.json
//   cargo run --bin gen_modes -- /path/dir

use std::{env, fs, path::Path};

use balzac_mode::mode::{Mode, ModeConfig, load_mode_json, save_mode_json};

fn main() {
    let out = env::args().nth(1).unwrap_or_else(|| "modes".to_string());
    let out_dir = Path::new(&out);

    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("error: failed to create {}: {e}", out_dir.display());
        std::process::exit(1);
    }

    for config in ModeConfig::builtin() {
        // `xtext/balzac` -> balzac.json
        let name = config.id.rsplit('/').next().unwrap_or(&config.id);
        let path = out_dir.join(format!("{name}.json"));

        if let Err(e) = save_mode_json(&path, &config) {
            eprintln!("error: failed to write {}: {e:#}", path.display());
            std::process::exit(1);
        }

        // Read it back and compile it, so a broken file never ships.
        match load_mode_json(&path).and_then(|c| Mode::new(&c).map(|m| (c, m))) {
            Ok((reloaded, _)) if reloaded == config => {}
            Ok(_) => {
                eprintln!("error: {} did not round-trip", path.display());
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("error: {} does not load: {e:#}", path.display());
                std::process::exit(1);
            }
        }

        println!(
            "[gen_modes] wrote {} ({} keywords, {} extra rules)",
            path.display(),
            config.keywords.len(),
            config.extra_rules.len()
        );
    }
}
