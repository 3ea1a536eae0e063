//! Shell, desktop environment, window manager and terminal probes

use std::path::Path;
use tracing::debug;

use super::{first_match, unknown, ProbeContext};

/// Compositor signature variables, checked in order; presence alone matches
const WM_MARKERS: &[(&str, &str)] = &[
    ("HYPRLAND_INSTANCE_SIGNATURE", "Hyprland"),
    ("SWAYSOCK", "sway"),
    ("NIRI_SOCKET", "niri"),
    ("WAYFIRE_SOCKET", "Wayfire"),
    ("I3SOCK", "i3"),
    ("KDE_FULL_SESSION", "KWin"),
    ("GNOME_SETUP_DISPLAY", "Mutter"),
];

pub fn shell(ctx: &ProbeContext) -> String {
    ctx.env
        .var("SHELL")
        .and_then(|path| {
            Path::new(&path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(unknown)
}

pub fn desktop_environment(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.env.var("XDG_CURRENT_DESKTOP"), &|| {
        ctx.env.var("DESKTOP_SESSION")
    }])
    .unwrap_or_else(unknown)
}

pub fn window_manager(ctx: &ProbeContext) -> String {
    first_match(&[&|| marker_wm(ctx), &|| wmctrl_wm(ctx)]).unwrap_or_else(unknown)
}

pub fn terminal(ctx: &ProbeContext) -> String {
    first_match(&[&|| ctx.env.var("TERM_PROGRAM"), &|| ctx.env.var("TERM")])
        .unwrap_or_else(unknown)
}

fn marker_wm(ctx: &ProbeContext) -> Option<String> {
    WM_MARKERS
        .iter()
        .find(|(key, _)| ctx.env.contains(key))
        .map(|(_, name)| (*name).to_string())
}

fn wmctrl_wm(ctx: &ProbeContext) -> Option<String> {
    match ctx.runner.run("wmctrl", &["-m"]) {
        Ok(out) => parse_wmctrl_name(&out),
        Err(err) => {
            debug!("wmctrl: {err}");
            None
        }
    }
}

/// Value of the `Name:` line in `wmctrl -m` output
fn parse_wmctrl_name(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Name:"))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
}
