use std::collections::HashMap;

use crate::error::EngineError;

/// Session storage key for the best score.
pub const BEST_SCORE_KEY: &str = "bestCircleScore";

/// String key/value storage that lives for one browsing session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError>;
}

/// In-process store. Used natively, in tests, and as the fallback when the
/// browser refuses access to its storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EngineError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best score of the current session. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    best: u32,
}

impl BestScore {
    /// Read the stored best score. Missing, unreadable or malformed values count as 0.
    pub fn load(store: &dyn SessionStore) -> Self {
        let best = match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => parse_stored(&raw),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("best score unavailable, starting from 0: {e}");
                0
            }
        };
        Self { best }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Record a new score. Returns true if it beat the previous best.
    ///
    /// The in-memory best is updated even when the write-through fails.
    pub fn record(&mut self, score: u32, store: &mut dyn SessionStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = store.set(BEST_SCORE_KEY, &score.to_string()) {
            log::warn!("could not persist best score {score}: {e}");
        }
        true
    }
}

/// Stored values are written by us as integers, but tolerate "87.0" and junk.
fn parse_stored(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u32>() {
        return v;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u32,
        _ => 0,
    }
}
