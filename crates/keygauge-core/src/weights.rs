//! Stat weight files. A weight set is an optional per-language JSON file
//! mapping stat display names to weights; stats it does not mention are
//! flagged skip so the engine never iterates them. Without a weight file
//! every stat is evaluated with weight zero, which is what the analysis
//! API wants: raw values, custom weights applied per request.

use crate::consts::SKIP_SLOTS;
use crate::error::KgResult;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSet {
    pub mono: HashMap<String, f32>,
    pub bi: HashMap<String, f32>,
    pub tri: HashMap<String, f32>,
    pub quad: HashMap<String, f32>,
    /// Skip stats carry one weight per distance 1..=9.
    pub skip: HashMap<String, Vec<f32>>,
    pub meta: HashMap<String, f32>,
}

impl WeightSet {
    pub fn load(path: &Path) -> KgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads `<root>/<lang>/weights/<name>.json` when it exists.
    pub fn find(root: &Path, lang: &str, name: &str) -> KgResult<Option<Self>> {
        let path = root.join(lang).join("weights").join(format!("{name}.json"));
        if !path.exists() {
            return Ok(None);
        }
        info!("Loading weights from {:?}", path);
        Self::load(&path).map(Some)
    }

    /// Expands a skip entry into the 10-slot table the catalog stores,
    /// distance doubling as index and slot 0 left unused.
    pub fn skip_row(&self, name: &str) -> Option<[f32; SKIP_SLOTS]> {
        self.skip.get(name).map(|values| {
            let mut row = [0.0; SKIP_SLOTS];
            for (d, &w) in values.iter().take(SKIP_SLOTS - 1).enumerate() {
                row[d + 1] = w;
            }
            row
        })
    }
}
