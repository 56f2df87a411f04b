use std::fmt;

use crate::config::PacingConfig;

/// Completion state after an identifier has been processed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// 1-indexed position of the identifier just processed.
    pub processed: usize,
    pub total: usize,
    /// Whole percent complete, ties rounded to even.
    pub percent: u32,
    /// Expected pacing time still ahead, from the midpoint of the pacing range.
    pub remaining_secs: f64,
}

impl ProgressReport {
    pub fn compute(processed: usize, total: usize, pacing: &PacingConfig) -> Self {
        let percent = if total == 0 {
            100
        } else {
            (processed as f64 / total as f64 * 100.0).round_ties_even() as u32
        };
        let remaining_secs = total.saturating_sub(processed) as f64 * pacing.average_wait_secs();

        Self {
            processed,
            total,
            percent,
            remaining_secs,
        }
    }

    pub fn estimate(&self) -> String {
        format_estimate(self.remaining_secs)
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% completed - at line {} of {}. Estimated {} remaining",
            self.percent,
            self.processed,
            self.total,
            self.estimate()
        )
    }
}

/// Human-readable duration using the largest applicable units.
///
/// Hours (with minutes when non-zero), else minutes, else seconds.
/// Leftover seconds are dropped once minutes are shown.
pub fn format_estimate(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let total_minutes = (seconds / 60.0).floor();
    let secs = seconds - total_minutes * 60.0;
    let hours = (total_minutes / 60.0).floor();
    let minutes = total_minutes - hours * 60.0;

    if hours > 0.0 {
        let mut est = unit(hours, "hour");
        if minutes > 0.0 {
            est.push_str(", ");
            est.push_str(&unit(minutes, "minute"));
        }
        est
    } else if minutes > 0.0 {
        unit(minutes, "minute")
    } else {
        unit(secs, "second")
    }
}

fn unit(value: f64, label: &str) -> String {
    let plural = if value != 1.0 { "s" } else { "" };
    format!("{} {}{}", value.round_ties_even() as u64, label, plural)
}
