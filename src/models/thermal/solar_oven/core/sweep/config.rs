/// Execution settings for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Number of worker threads evaluating grid rows.
    ///
    /// Values below two evaluate the grid on the calling thread.
    pub threads: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl SweepConfig {
    /// Uses every core the platform reports, or a single thread if unknown.
    #[must_use]
    pub fn available_parallelism() -> Self {
        Self {
            threads: std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
        }
    }
}
