//! Fact probes
//!
//! One function per fact. Each tries its sources in priority order and falls
//! back to [`UNKNOWN`] (or `None` for the GPU) instead of returning an error.
//! OS state is reached only through the seams bundled in [`ProbeContext`].

pub mod cpu;
pub mod env;
pub mod gpu;
pub mod metrics;
pub mod os;
pub mod platform;
pub mod runner;
pub mod session;
pub mod usage;

use env::Environment;
use metrics::Metrics;
use platform::Platform;
use runner::CommandRunner;

/// Fallback value for any fact that could not be determined
pub const UNKNOWN: &str = "unknown";

/// Everything a probe may read from
pub struct ProbeContext<'a> {
    pub env: &'a dyn Environment,
    pub runner: &'a dyn CommandRunner,
    pub platform: &'a dyn Platform,
    pub metrics: &'a dyn Metrics,
}

/// One entry of a fallback chain
pub type Source<'a, T> = &'a dyn Fn() -> Option<T>;

/// Try each source in order and keep the first that yields a value
pub fn first_match<T>(sources: &[Source<'_, T>]) -> Option<T> {
    sources.iter().find_map(|source| source())
}

pub(crate) fn unknown() -> String {
    UNKNOWN.to_string()
}
