//! CPU probe
//!
//! Name from the platform processor API, then the first `model name` line of
//! `/proc/cpuinfo`. Core and thread counts are appended when the extended
//! metrics capability can report them.

use std::path::Path;

use super::{first_match, unknown, ProbeContext};

const CPUINFO: &str = "/proc/cpuinfo";

pub fn cpu(ctx: &ProbeContext) -> String {
    let name = first_match(&[&|| ctx.platform.processor_name(), &|| {
        cpuinfo_model(&ctx.env.read_file(Path::new(CPUINFO))?)
    }])
    .unwrap_or_else(unknown);

    match ctx.metrics.core_counts() {
        Some((cores, threads)) => format!("{name} ({cores}/{threads})"),
        None => name,
    }
}

fn cpuinfo_model(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
