//! Host identity probe
//!
//! Collects the machine facts recorded at the top of every audit log.
//! Nothing here can fail a run: unknown values are reported as such.

use sysinfo::{Networks, System};

const UNKNOWN: &str = "unknown";
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Identity of the host the search ran on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemProfile {
    pub hostname: String,
    pub ip_addresses: Vec<String>,
    pub mac_address: String,
    pub platform: String,
    pub platform_release: String,
    pub platform_version: String,
    pub architecture: String,
    pub processor: String,
    pub ram_capacity: String,
}

impl SystemProfile {
    /// Queries the running system
    pub fn probe() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();

        let networks = Networks::new_with_refreshed_list();
        let mut ip_addresses = Vec::new();
        let mut mac_address = None;

        for data in networks.list().values() {
            for network in data.ip_networks() {
                if !network.addr.is_loopback() {
                    ip_addresses.push(network.addr.to_string());
                }
            }

            let mac = data.mac_address();
            if mac_address.is_none() && !mac.is_unspecified() {
                mac_address = Some(mac.to_string());
            }
        }
        ip_addresses.sort();
        ip_addresses.dedup();

        Self {
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            ip_addresses,
            mac_address: mac_address.unwrap_or_else(|| UNKNOWN.to_string()),
            platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            platform_release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
            platform_version: System::os_version().unwrap_or_else(|| UNKNOWN.to_string()),
            architecture: std::env::consts::ARCH.to_string(),
            processor: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .filter(|brand| !brand.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            ram_capacity: format_ram(sys.total_memory()),
        }
    }

    /// Ordered key/value pairs for the audit log
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let ips = if self.ip_addresses.is_empty() {
            UNKNOWN.to_string()
        } else {
            self.ip_addresses.join(", ")
        };

        vec![
            ("ip-address", ips),
            ("mac-address", self.mac_address.clone()),
            ("platform", self.platform.clone()),
            ("platform-release", self.platform_release.clone()),
            ("platform-version", self.platform_version.clone()),
            ("hostname", self.hostname.clone()),
            ("architecture", self.architecture.clone()),
            ("processor", self.processor.clone()),
            ("ram capacity", self.ram_capacity.clone()),
        ]
    }
}

/// Whole GiB, rounded, e.g. `"16 GB"`
pub fn format_ram(total_bytes: u64) -> String {
    format!("{} GB", (total_bytes as f64 / GIB).round() as u64)
}
