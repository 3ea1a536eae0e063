//! Always-available platform queries
//!
//! These mirror what the OS reports about itself without the extended
//! metrics capability: name, kernel release, host name, processor brand.

use sysinfo::System;

pub trait Platform {
    /// Generic platform name, e.g. "Linux 24.04 Ubuntu"
    fn os_name(&self) -> Option<String>;

    fn kernel_release(&self) -> Option<String>;

    fn host_name(&self) -> Option<String>;

    fn processor_name(&self) -> Option<String>;

    fn is_linux(&self) -> bool;
}

pub struct SysinfoPlatform;

impl Platform for SysinfoPlatform {
    fn os_name(&self) -> Option<String> {
        System::long_os_version()
            .or_else(System::name)
            .filter(|name| !name.trim().is_empty())
    }

    fn kernel_release(&self) -> Option<String> {
        System::kernel_version().filter(|release| !release.trim().is_empty())
    }

    fn host_name(&self) -> Option<String> {
        System::host_name().filter(|host| !host.trim().is_empty())
    }

    fn processor_name(&self) -> Option<String> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
    }

    fn is_linux(&self) -> bool {
        cfg!(target_os = "linux")
    }
}
