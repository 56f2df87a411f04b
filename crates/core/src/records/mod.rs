//! Line-oriented input of case identifiers and append-only output of results.

mod reader;
mod types;
mod writer;

pub use reader::read_identifiers;
pub use types::*;
pub use writer::{ResultWriter, WriteError};
