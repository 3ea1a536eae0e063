//! Memory and disk probes
//!
//! Both need the extended metrics capability; without it they report
//! "unknown".

use super::metrics::Usage;
use super::{unknown, ProbeContext};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn memory(ctx: &ProbeContext) -> String {
    ctx.metrics
        .memory()
        .map(format_usage)
        .unwrap_or_else(unknown)
}

pub fn disk(ctx: &ProbeContext) -> String {
    ctx.metrics
        .root_disk()
        .map(format_usage)
        .unwrap_or_else(unknown)
}

/// `{used}GiB / {total}GiB ({percent}%)` with one decimal place each
pub fn format_usage(usage: Usage) -> String {
    let used = usage.used as f64 / GIB;
    let total = usage.total as f64 / GIB;
    let percent = if usage.total == 0 {
        0.0
    } else {
        usage.used as f64 / usage.total as f64 * 100.0
    };
    format!("{used:.1}GiB / {total:.1}GiB ({percent:.1}%)")
}
