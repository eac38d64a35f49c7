// src/mode/registry.rs
use std::sync::Arc;

use anyhow::Result;
use hashbrown::HashMap;

use super::{Mode, ModeConfig};

/// Modes keyed by id, as exposed to a host editor.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    modes: HashMap<String, Arc<Mode>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the Balzac and BitcoinTM modes.
    pub fn with_builtin_modes() -> Result<Self> {
        let mut reg = Self::new();
        for config in ModeConfig::builtin() {
            reg.register(Mode::new(&config)?);
        }
        Ok(reg)
    }

    /// Register `mode` under its id, returning the mode it replaced.
    pub fn register(&mut self, mode: Mode) -> Option<Arc<Mode>> {
        let id = mode.id().to_string();
        let prev = self.modes.insert(id.clone(), Arc::new(mode));
        if prev.is_some() {
            log::warn!("[modes] replaced existing mode {id}");
        } else {
            log::debug!("[modes] registered mode {id}");
        }
        prev
    }

    pub fn get(&self, id: &str) -> Option<Arc<Mode>> {
        self.modes.get(id).cloned()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.modes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
