//! Types shared by the reader, writer and batch runner.

use std::fmt;

/// A case receipt number as read from the input file.
///
/// Opaque and unvalidated; an empty identifier is kept for a blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseIdentifier(String);

impl CaseIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CaseIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Message written for a repeated identifier.
pub const ALREADY_SEEN_MESSAGE: &str = "already in dictionary";

/// Outcome of one lookup, written as a single output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub identifier: CaseIdentifier,
    /// Status headline or error label.
    pub message: String,
    /// Free-form status description, possibly empty.
    pub details: String,
}

impl LookupResult {
    pub fn new(
        identifier: CaseIdentifier,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Record for an identifier that was already looked up in this run.
    pub fn already_seen(identifier: CaseIdentifier) -> Self {
        Self::new(identifier, ALREADY_SEEN_MESSAGE, "")
    }

    /// Pipe-delimited record, without a line terminator.
    pub fn to_record(&self) -> String {
        format!("{}|{}|{}", self.identifier, self.message, self.details)
    }
}
