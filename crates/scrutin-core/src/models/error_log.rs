//! Append-only error accumulation for one run.

use crate::errors::StageError;

/// Ordered record of every error raised during a run.
///
/// Entries are never removed or reset; the length is the retry-budget
/// counter of the generation/verification loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorLog {
    entries: Vec<StageError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn record(&mut self, error: StageError) {
        self.entries.push(error);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&StageError> {
        self.entries.first()
    }

    /// Most recent entry; fed back to the generator as corrective feedback.
    pub fn last(&self) -> Option<&StageError> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageError> {
        self.entries.iter()
    }

    /// Display strings in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
