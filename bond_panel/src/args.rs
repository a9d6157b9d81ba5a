//! Command-line arguments for the bond panel.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use std::path::PathBuf;

use bond_common::{PanelError, Result};
use bond_engine::BatchPlan;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the optional template data JSON. When missing or unreadable,
    /// the panel falls back to pure-random generation.
    #[clap(long)]
    pub templates: Option<PathBuf>,

    /// Maximum number of records retained in the panel buffer.
    #[clap(long, default_value_t = 5000)]
    pub max_records: usize,

    /// Update cadence in milliseconds.
    #[clap(long, default_value_t = 800)]
    pub interval_ms: u64,

    /// Fixed records per update push. Defaults to the template pool size, or
    /// 43 without a pool.
    #[clap(long)]
    pub batch_size: Option<usize>,

    /// Lower bound for a randomized per-push record count.
    /// Requires --batch-jitter-max.
    #[clap(long, requires = "batch_jitter_max")]
    pub batch_jitter_min: Option<usize>,

    /// Upper bound for a randomized per-push record count.
    /// Requires --batch-jitter-min.
    #[clap(long, requires = "batch_jitter_min")]
    pub batch_jitter_max: Option<usize>,

    /// Visible body rows in the console grid.
    #[clap(long, default_value_t = 20)]
    pub height_rows: usize,

    /// Leading columns pinned on the left of the console grid.
    #[clap(long, default_value_t = 3)]
    pub frozen_cols: usize,

    /// Disable ANSI colors in the console grid.
    #[clap(long, default_value_t = false)]
    pub no_color: bool,
}

impl Args {
    /// Resolve the batch plan: jitter bounds win over a fixed size, and the
    /// fixed size falls back to the generator's natural batch size.
    pub fn batch_plan(&self, default_size: usize) -> Result<BatchPlan> {
        match (self.batch_jitter_min, self.batch_jitter_max) {
            (Some(min), Some(max)) if min > max => Err(PanelError::Format(format!(
                "--batch-jitter-min ({}) exceeds --batch-jitter-max ({})",
                min, max
            ))),
            (Some(min), Some(max)) => Ok(BatchPlan::Jitter { min, max }),
            _ => Ok(BatchPlan::Fixed(self.batch_size.unwrap_or(default_size))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_plan_resolution() {
        let mut args = Args::parse_from(["bond_panel"]);
        assert_eq!(args.batch_plan(43).unwrap(), BatchPlan::Fixed(43));

        args.batch_size = Some(10);
        assert_eq!(args.batch_plan(43).unwrap(), BatchPlan::Fixed(10));

        args.batch_jitter_min = Some(5);
        args.batch_jitter_max = Some(9);
        assert_eq!(
            args.batch_plan(43).unwrap(),
            BatchPlan::Jitter { min: 5, max: 9 }
        );
    }

    #[test]
    fn test_inverted_jitter_bounds_rejected() {
        let mut args = Args::parse_from(["bond_panel"]);
        args.batch_jitter_min = Some(9);
        args.batch_jitter_max = Some(5);
        assert!(args.batch_plan(43).is_err());
    }
}
