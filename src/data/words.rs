//! RON word list loader
//!
//! Loads the word bank and tunables from assets/data/words.ron, with
//! fallback to hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::GameConfig;

/// The word list and tunables for a session, as loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSource {
    /// Round count and scoring tunables
    #[serde(default)]
    pub config: GameConfig,
    /// Candidate words for the bank
    pub words: Vec<String>,
}

impl WordSource {
    /// Load from the default assets path, or fall back to the built-in
    /// word list.
    pub fn new() -> Self {
        Self::load(Path::new("assets/data/words.ron"))
    }

    /// Load from a specific file, falling back to defaults on any
    /// read or parse failure.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(source) => return source,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e)
                    }
                },
                Err(e) => eprintln!("Warning: Failed to read {}: {}", path.display(), e),
            }
        }
        Self::default()
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            words: default_word_list(),
        }
    }
}

/// Built-in word list, used when no words.ron is present.
pub fn default_word_list() -> Vec<String> {
    [
        "animal",
        "alphabet",
        "awesome",
        "balloon",
        "basket",
        "bench",
        "birthday",
        "briefcase",
        "camera",
        "camping",
        "candle",
        "cauliflower",
        "children",
        "classroom",
        "coffee",
        "colorful",
        "doughnut",
        "elephant",
        "engineer",
        "fireplace",
        "grocery",
        "hospital",
        "keyboard",
        "lantern",
        "mountain",
        "notebook",
        "orchard",
        "penguin",
        "question",
        "railway",
        "sandwich",
        "telescope",
        "umbrella",
        "village",
        "whistle",
        "zeppelin",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
