//! A calculation as a front end performs it.
//!
//! Validates the raw form input, runs the engine, and records the reading
//! in history.

use crate::error::{FlamesError, Result};
use crate::flames::{Outcome, compute_outcome};
use crate::history::{History, HistoryEntry, KeyValueStore};

/// A completed reading for two trimmed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub name1: String,
    pub name2: String,
    pub outcome: Outcome,
}

impl Reading {
    /// `"The relationship between <name1> and <name2> is: <label>"`
    pub fn message(&self) -> String {
        format!(
            "The relationship between {} and {} is: {}",
            self.name1,
            self.name2,
            self.outcome.relationship.label()
        )
    }
}

/// Trim both names and reject the pair if either is blank.
pub fn validate_names(name1: &str, name2: &str) -> Result<(String, String)> {
    let (a, b) = (name1.trim(), name2.trim());
    if a.is_empty() || b.is_empty() {
        return Err(FlamesError::MissingName);
    }
    Ok((a.to_string(), b.to_string()))
}

/// Runs readings and keeps their history.
#[derive(Debug)]
pub struct Session<S> {
    history: History<S>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(history: History<S>) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History<S> {
        &mut self.history
    }

    /// Validate, compute, and record one reading.
    ///
    /// Nothing is recorded when validation fails.
    pub fn calculate(&mut self, name1: &str, name2: &str, timestamp: &str) -> Result<Reading> {
        let (name1, name2) = validate_names(name1, name2)?;
        let outcome = compute_outcome(&name1, &name2);
        log::debug!(
            "{name1} & {name2}: count {} -> {}",
            outcome.count,
            outcome.relationship
        );

        self.history.record(HistoryEntry::new(
            name1.clone(),
            name2.clone(),
            outcome.relationship,
            timestamp,
        ))?;

        Ok(Reading {
            name1,
            name2,
            outcome,
        })
    }
}
