//! GPU probe (Linux only)
//!
//! Takes the first VGA or 3D controller from `lspci`. There is no
//! "unknown" fallback: a missing GPU line leaves the fact out entirely.

use tracing::debug;

use super::ProbeContext;

pub fn gpu(ctx: &ProbeContext) -> Option<String> {
    if !ctx.platform.is_linux() {
        return None;
    }

    let output = ctx
        .runner
        .run("lspci", &[])
        .map_err(|err| debug!("lspci: {err}"))
        .ok()?;

    output
        .lines()
        .find(|line| line.contains("VGA") || line.contains("3D controller"))
        .and_then(parse_lspci_line)
}

/// Strip the bus address and device class from an lspci line.
///
/// `01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)`
/// becomes `NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)`.
fn parse_lspci_line(line: &str) -> Option<String> {
    let (_, rest) = line.trim().split_once(' ')?;
    let (_, device) = rest.split_once(": ")?;
    let device = device.trim();
    (!device.is_empty()).then(|| device.to_string())
}
