//! Units recognized in `<number> (<unit>)` entities.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry of `units.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitEntry {
    /// Spellings of the unit as found between parentheses.
    pub names: Vec<String>,
    /// Short form, used both as `5 m` and `5m`.
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Long forms. Defaults to the unit as written.
    #[serde(default)]
    pub words: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRule {
    abbreviation: Option<String>,
    words: Option<Vec<String>>,
}

impl UnitRule {
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Long forms of `unit`.
    pub fn words(&self, unit: &str) -> Vec<String> {
        match &self.words {
            Some(words) => words.clone(),
            None => vec![unit.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    rules: HashMap<String, UnitRule>,
}

impl UnitTable {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = UnitEntry>,
    {
        let mut rules = HashMap::new();
        for entry in entries {
            let rule = UnitRule {
                abbreviation: entry.abbreviation,
                words: entry.words,
            };
            for name in entry.names {
                rules.insert(name, rule.clone());
            }
        }
        Self { rules }
    }

    pub fn get(&self, unit: &str) -> Option<&UnitRule> {
        self.rules.get(unit)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
