//! User, host, OS, kernel and uptime probes

use std::path::Path;
use tracing::debug;

use super::{first_match, unknown, ProbeContext};

const OS_RELEASE: &str = "/etc/os-release";
const HOSTNAME_FILE: &str = "/etc/hostname";
const UPTIME_FILE: &str = "/proc/uptime";

pub fn user(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.env.var("USER"), &|| ctx.env.var("USERNAME")]).unwrap_or_else(unknown)
}

pub fn host(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.platform.host_name(), &|| {
        first_line(&ctx.env.read_file(Path::new(HOSTNAME_FILE))?)
    }])
    .unwrap_or_else(unknown)
}

pub fn os_name(ctx: &ProbeContext) -> String {
    first_match(&[
        &|| pretty_name(&ctx.env.read_file(Path::new(OS_RELEASE))?),
        &|| {
            debug!("no PRETTY_NAME in {OS_RELEASE}, using platform name");
            ctx.platform.os_name()
        },
    ])
    .unwrap_or_else(unknown)
}

pub fn kernel(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.platform.kernel_release(), &|| {
        ctx.runner
            .run("uname", &["-r"])
            .map_err(|err| debug!("uname: {err}"))
            .ok()
            .and_then(|out| first_line(&out))
    }])
    .unwrap_or_else(unknown)
}

pub fn uptime(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.metrics.uptime_seconds(), &|| {
        proc_uptime(&ctx.env.read_file(Path::new(UPTIME_FILE))?)
    }])
    .map(format_uptime)
    .unwrap_or_else(unknown)
}

/// Format seconds as `Xd Yh Zm`, dropping zero days and hours
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    parts.push(format!("{minutes}m"));
    parts.join(" ")
}

/// `PRETTY_NAME` from os-release content, quotes removed
fn pretty_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|value| !value.is_empty())
}

/// Leading float of `/proc/uptime`
fn proc_uptime(content: &str) -> Option<u64> {
    let seconds: f64 = content.split_whitespace().next()?.parse().ok()?;
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds as u64)
}

fn first_line(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToOwned::to_owned)
}
