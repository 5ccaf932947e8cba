//! Minimax configuration parameters.

/// Search configuration.
///
/// Configuration only changes how the work is scheduled; the chosen action
/// and its value are the same for every setting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Score the root's children concurrently on the rayon thread pool.
    /// Results are reduced in enumeration order, so ties break the same way
    /// as the sequential search.
    pub parallel_root: bool,
}

impl SearchConfig {
    /// Score root children one after another (the default).
    pub fn sequential() -> Self {
        Self {
            parallel_root: false,
        }
    }

    /// Score root children in parallel.
    pub fn parallel() -> Self {
        Self {
            parallel_root: true,
        }
    }
}
