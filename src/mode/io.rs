// src/mode/io.rs
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::ModeConfig;

pub fn save_mode_json(path: &Path, config: &ModeConfig) -> Result<()> {
    let f = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, config)
        .with_context(|| format!("write mode {} to {}", config.id, path.display()))?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

pub fn load_mode_json_bytes(data: &[u8]) -> Result<ModeConfig> {
    serde_json::from_slice::<ModeConfig>(data).context("Failed to parse mode config JSON")
}

pub fn load_mode_json(path: &Path) -> Result<ModeConfig> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    load_mode_json_bytes(&data).with_context(|| format!("in {}", path.display()))
}
