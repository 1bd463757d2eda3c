//! Run configuration for the confsim binary.

/// Settings for one simulation run, after CLI/env overrides.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Threshold handed to every track's selection strategy. The default
    /// of 1 is legal for both strategies (a score of "good or better",
    /// or a 1% cut).
    pub threshold: i32,
    /// Base seed for simulated reviewers that do not pin their own.
    pub seed: u64,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threshold: 1,
            seed: 42,
            verbose: false,
        }
    }
}
