//! Sequential batch lookup.
//!
//! For each identifier, in input order:
//! - skip repeats (per [`DuplicateMode`](crate::config::DuplicateMode))
//! - fetch the status page and extract the result
//! - append the record, report progress, then pace before the next one

mod runner;
mod types;

pub use runner::BatchRunner;
pub use types::*;
