//! Persisted player preferences
//!
//! Two settings survive between sessions: whether sound is on and the
//! chosen difficulty. Storage is abstracted as a string key/value store so
//! the browser's `localStorage` and an in-memory map look the same.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use crate::strategy::Difficulty;

pub const SOUND_KEY: &str = "rpsSoundPref";
pub const DIFFICULTY_KEY: &str = "rpsDifficulty";

/// String key/value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub sound_enabled: bool,
    pub difficulty: Difficulty,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { sound_enabled: true, difficulty: Difficulty::default() }
    }
}

impl Preferences {
    /// Restore preferences, keeping defaults for anything missing or unreadable
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let mut prefs = Self::default();

        // only an explicit "false" turns sound off
        if store.get(SOUND_KEY).as_deref() == Some("false") {
            prefs.sound_enabled = false;
        }

        if let Some(raw) = store.get(DIFFICULTY_KEY) {
            match raw.parse::<Difficulty>() {
                Ok(level) => prefs.difficulty = level,
                Err(e) => warn!("ignoring stored difficulty: {}", e),
            }
        }

        prefs
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        store.set(SOUND_KEY, if self.sound_enabled { "true" } else { "false" });
        store.set(DIFFICULTY_KEY, self.difficulty.as_str());
    }

    /// Flip the sound setting, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
