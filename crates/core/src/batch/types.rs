//! Batch runner types.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::DuplicateMode;
use crate::portal::FetchError;
use crate::records::{CaseIdentifier, WriteError};

/// Fatal errors that stop a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Lookup of {identifier} (line {line}) failed: {source}")]
    Fetch {
        identifier: CaseIdentifier,
        line: usize,
        #[source]
        source: FetchError,
    },

    #[error("Writing result for {identifier} (line {line}) failed: {source}")]
    Write {
        identifier: CaseIdentifier,
        line: usize,
        #[source]
        source: WriteError,
    },
}

/// Counts for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records written.
    pub processed: usize,
    /// Pages with a status headline.
    pub found: usize,
    /// Pages with the error banner or no recognizable status.
    pub not_found: usize,
    /// Repeats written without a lookup.
    pub duplicates: usize,
}

/// Identifiers already looked up in this run.
#[derive(Debug)]
pub struct SeenSet {
    mode: DuplicateMode,
    seen: HashSet<CaseIdentifier>,
}

impl SeenSet {
    pub fn new(mode: DuplicateMode) -> Self {
        Self {
            mode,
            seen: HashSet::new(),
        }
    }

    pub fn contains(&self, identifier: &CaseIdentifier) -> bool {
        self.seen.contains(identifier)
    }

    /// Mark an identifier whose lookup found a status. No-op in refetch mode.
    ///
    /// Identifiers that hit the error banner or no status stay unrecorded,
    /// so a later repeat is looked up again.
    pub fn record(&mut self, identifier: &CaseIdentifier) {
        if self.mode == DuplicateMode::Skip {
            self.seen.insert(identifier.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_mode_remembers() {
        let mut seen = SeenSet::new(DuplicateMode::Skip);
        let id = CaseIdentifier::new("EAC1");
        assert!(!seen.contains(&id));
        seen.record(&id);
        assert!(seen.contains(&id));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_refetch_mode_never_remembers() {
        let mut seen = SeenSet::new(DuplicateMode::Refetch);
        let id = CaseIdentifier::new("EAC1");
        seen.record(&id);
        assert!(!seen.contains(&id));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_fetch_error_names_identifier() {
        let err = BatchError::Fetch {
            identifier: "WAC9".into(),
            line: 3,
            source: FetchError::Timeout,
        };
        assert_eq!(
            err.to_string(),
            "Lookup of WAC9 (line 3) failed: Request timeout"
        );
    }
}
