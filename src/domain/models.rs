use crate::domain::constants::{
    DEFAULT_ACTION_DIR, DEFAULT_CHARACTER_DIR, DEFAULT_RECORD_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    Character,
    Action,
}

/// One record discovered by the walker.
#[derive(Debug, Clone)]
pub struct CardFile {
    pub path: PathBuf,
    /// Path relative to the cards root, used in reports.
    pub display: String,
    pub identifier: String,
    pub card_type: CardType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Updated,
    Removed,
    Skipped,
    Errored,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub file: String,
    pub status: OutcomeStatus,
    pub class: Option<u32>,
    pub name: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Tally {
    pub updated: usize,
    pub removed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub total: usize,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,
    pub tally: Tally,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Serialize)]
pub struct LookupReport {
    pub identifier: String,
    pub base_slug: String,
    pub class: Option<u32>,
}

/// Directory-shape contract for one cards tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub character_dir: String,
    pub action_dir: String,
    pub extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            character_dir: DEFAULT_CHARACTER_DIR.to_string(),
            action_dir: DEFAULT_ACTION_DIR.to_string(),
            extension: DEFAULT_RECORD_EXTENSION.to_string(),
        }
    }
}

impl Layout {
    pub fn dir_for(&self, card_type: CardType) -> &str {
        match card_type {
            CardType::Character => &self.character_dir,
            CardType::Action => &self.action_dir,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub layout: Layout,
    /// Extra slug -> class entries merged into the built-in table.
    #[serde(default)]
    pub classes: BTreeMap<String, u32>,
}
