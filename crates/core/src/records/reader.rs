use std::fs;
use std::path::Path;

use tracing::debug;

use super::CaseIdentifier;
use crate::config::ConfigError;

/// Read case identifiers from a line-oriented text file.
///
/// Every line yields one identifier with surrounding whitespace trimmed.
/// Blank lines are kept as empty identifiers so output lines up with input.
pub fn read_identifiers(path: &Path) -> Result<Vec<CaseIdentifier>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::InputNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let identifiers: Vec<CaseIdentifier> = content
        .lines()
        .map(|line| CaseIdentifier::new(line.trim()))
        .collect();

    debug!(
        path = %path.display(),
        count = identifiers.len(),
        "Read case identifiers"
    );

    Ok(identifiers)
}
