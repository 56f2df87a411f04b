//! Progress reporting for batch runs.
//!
//! [`ProgressReport`] is recomputed after every identifier; frontends
//! implement [`ProgressSink`] to surface it.

mod estimate;

use std::time::Duration;

use crate::records::CaseIdentifier;

pub use estimate::{format_estimate, ProgressReport};

/// Receives progress updates from the batch runner.
pub trait ProgressSink {
    /// Called once before the first identifier with the total count.
    fn begin(&mut self, _total: usize) {}

    /// Called after each identifier has been written.
    fn item_done(&mut self, _report: &ProgressReport) {}

    /// Called when an identifier is written as a repeat without a lookup.
    fn duplicate(&mut self, _identifier: &CaseIdentifier) {}

    /// Called before the pacing sleep with the chosen delay.
    fn waiting(&mut self, _delay: Duration) {}

    /// Called after the last identifier.
    fn finish(&mut self) {}
}

/// Prints progress lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn item_done(&mut self, report: &ProgressReport) {
        println!("{}", report);
    }

    fn duplicate(&mut self, identifier: &CaseIdentifier) {
        println!("{} is already in the dictionary.", identifier);
    }

    fn waiting(&mut self, delay: Duration) {
        println!(
            "Waiting {:.2} seconds before querying again...",
            delay.as_secs_f64()
        );
    }
}

/// A no-op progress sink.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}
