//! Registry - lookup table of all grammars a provider knows about

use std::collections::BTreeMap;

use super::grammar::{Grammar, GrammarError};
use super::identifier::Identifier;

/// Read-only table of grammars keyed by name
///
/// Built once at startup; grammars are never added or removed afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    grammars: BTreeMap<&'static str, &'static Grammar>,
}

impl Registry {
    pub fn new(grammars: impl IntoIterator<Item = &'static Grammar>) -> Self {
        Self {
            grammars: grammars.into_iter().map(|g| (g.name(), g)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static Grammar> {
        self.grammars.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Grammar> + '_ {
        self.grammars.values().copied()
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Every grammar that accepts `input`, as parsed identifiers
    pub fn detect(&self, input: &str) -> Vec<Identifier> {
        self.iter().filter_map(|g| g.parse(input).ok()).collect()
    }

    /// Validate every registered grammar
    pub fn validate(&self) -> Result<(), Vec<GrammarError>> {
        let errors: Vec<GrammarError> = self.iter().filter_map(|g| g.validate().err()).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
