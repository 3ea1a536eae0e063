//! Aggregated facts for one run

use std::fmt;
use tracing::debug;

use crate::probe::{cpu, gpu, os, session, usage, ProbeContext};

/// Every fact brlfetch knows how to gather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKey {
    User,
    Host,
    Os,
    Kernel,
    Uptime,
    Shell,
    De,
    Wm,
    Term,
    Cpu,
    Gpu,
    Memory,
    Disk,
}

impl FactKey {
    /// Display label used by the renderer
    pub fn label(self) -> &'static str {
        match self {
            FactKey::User => "User",
            FactKey::Host => "Host",
            FactKey::Os => "OS",
            FactKey::Kernel => "Kernel",
            FactKey::Uptime => "Uptime",
            FactKey::Shell => "Shell",
            FactKey::De => "DE",
            FactKey::Wm => "WM",
            FactKey::Term => "Terminal",
            FactKey::Cpu => "CPU",
            FactKey::Gpu => "GPU",
            FactKey::Memory => "Memory",
            FactKey::Disk => "Disk",
        }
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered fact-name to value mapping.
///
/// Every key except [`FactKey::Gpu`] is present after [`FactSet::collect`].
#[derive(Debug, Clone, Default)]
pub struct FactSet {
    entries: Vec<(FactKey, String)>,
}

impl FactSet {
    /// Run every probe once, in display order
    pub fn collect(ctx: &ProbeContext) -> Self {
        let mut facts = FactSet::default();

        facts.insert(FactKey::User, os::user(ctx));
        facts.insert(FactKey::Host, os::host(ctx));
        facts.insert(FactKey::Os, os::os_name(ctx));
        facts.insert(FactKey::Kernel, os::kernel(ctx));
        facts.insert(FactKey::Uptime, os::uptime(ctx));
        facts.insert(FactKey::Shell, session::shell(ctx));
        facts.insert(FactKey::De, session::desktop_environment(ctx));
        facts.insert(FactKey::Wm, session::window_manager(ctx));
        facts.insert(FactKey::Term, session::terminal(ctx));
        facts.insert(FactKey::Cpu, cpu::cpu(ctx));
        if let Some(gpu) = gpu::gpu(ctx) {
            facts.insert(FactKey::Gpu, gpu);
        }
        facts.insert(FactKey::Memory, usage::memory(ctx));
        facts.insert(FactKey::Disk, usage::disk(ctx));

        debug!(count = facts.len(), "facts collected");
        facts
    }

    fn insert(&mut self, key: FactKey, value: String) {
        debug!(fact = %key, %value);
        self.entries.push((key, value));
    }

    pub fn get(&self, key: FactKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(FactKey, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(key, value)| (*key, (*value).to_string()))
                .collect(),
        }
    }
}
