//! Mutable container resource-limit configuration.
//!
//! [`UpdateConfig`] is the request payload for the container update
//! operation. It is a one-shot value: callers populate the fields they care
//! about and hand it to the client, which serializes and forwards it without
//! validating any value. Legality of the limits is the daemon's business.

use serde::{Deserialize, Serialize};

/// The mutable subset of a container's resource-limit configuration.
///
/// Serialization contract:
/// - Scalar and string fields are always emitted, zero values included.
/// - List fields are always emitted, empty lists as `[]`.
/// - The tri-state fields [`memory_swappiness`](Self::memory_swappiness) and
///   [`oom_kill_disable`](Self::oom_kill_disable) are absent when `None`, so
///   the daemon can distinguish "leave unchanged" from an explicit zero or
///   `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfig {
    // Applicable to all platforms
    /// CPU shares (relative weight vs. other containers).
    #[serde(rename = "CpuShares", default)]
    pub cpu_shares: i64,

    /// Memory limit, in bytes.
    #[serde(rename = "Memory", default)]
    pub memory: i64,

    // Applicable to UNIX platforms
    /// Parent cgroup path.
    #[serde(rename = "CgroupParent", default)]
    pub cgroup_parent: String,

    /// Block IO weight (relative weight vs. other containers).
    #[serde(rename = "BlkioWeight", default)]
    pub blkio_weight: u16,

    /// Per-device block IO weight overrides.
    #[serde(rename = "BlkioWeightDevice", default)]
    pub blkio_weight_device: Vec<WeightDevice>,

    /// Per-device read rate caps, in bytes per second.
    #[serde(rename = "BlkioDeviceReadBps", default)]
    pub blkio_device_read_bps: Vec<ThrottleDevice>,

    /// Per-device write rate caps, in bytes per second.
    #[serde(rename = "BlkioDeviceWriteBps", default)]
    pub blkio_device_write_bps: Vec<ThrottleDevice>,

    /// Per-device read rate caps, in IO operations per second.
    #[serde(rename = "BlkioDeviceReadIOps", default)]
    pub blkio_device_read_iops: Vec<ThrottleDevice>,

    /// Per-device write rate caps, in IO operations per second.
    #[serde(rename = "BlkioDeviceWriteIOps", default)]
    pub blkio_device_write_iops: Vec<ThrottleDevice>,

    /// CPU CFS (Completely Fair Scheduler) period, in microseconds.
    #[serde(rename = "CpuPeriod", default)]
    pub cpu_period: i64,

    /// CPU CFS (Completely Fair Scheduler) quota, in microseconds.
    #[serde(rename = "CpuQuota", default)]
    pub cpu_quota: i64,

    /// CPUs in which to allow execution, e.g. `"0-2"` or `"0,1"`.
    #[serde(rename = "CpusetCpus", default)]
    pub cpuset_cpus: String,

    /// Memory NUMA nodes in which to allow execution, same format as
    /// [`cpuset_cpus`](Self::cpuset_cpus).
    #[serde(rename = "CpusetMems", default)]
    pub cpuset_mems: String,

    /// Host devices to map into the container.
    #[serde(rename = "Devices", default)]
    pub devices: Vec<DeviceMapping>,

    /// Disk limit, in bytes.
    #[serde(rename = "DiskQuota", default)]
    pub disk_quota: i64,

    /// Kernel memory limit, in bytes.
    #[serde(rename = "KernelMemory", default)]
    pub kernel_memory: i64,

    /// Memory soft limit, in bytes.
    #[serde(rename = "MemoryReservation", default)]
    pub memory_reservation: i64,

    /// Total memory usage (memory + swap), in bytes. `-1` enables
    /// unlimited swap.
    #[serde(rename = "MemorySwap", default)]
    pub memory_swap: i64,

    /// Tuning for the container's memory swappiness behaviour.
    /// `None` leaves the current value unchanged.
    #[serde(
        rename = "MemorySwappiness",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_swappiness: Option<i64>,

    /// Whether to disable the OOM killer for the container.
    /// `None` leaves the current value unchanged.
    #[serde(
        rename = "OomKillDisable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub oom_kill_disable: Option<bool>,

    /// Maximum number of processes allowed in the container.
    #[serde(rename = "PidsLimit", default)]
    pub pids_limit: i64,

    /// Ulimit overrides to set in the container.
    #[serde(rename = "Ulimits", default)]
    pub ulimits: Vec<Ulimit>,

    // Applicable to Windows
    /// CPU count.
    #[serde(rename = "CpuCount", default)]
    pub cpu_count: i64,

    /// CPU percent.
    #[serde(rename = "CpuPercent", default)]
    pub cpu_percent: i64,

    /// Maximum IOps for the container system drive.
    #[serde(rename = "IOMaximumIOps", default)]
    pub io_maximum_iops: u64,

    /// Maximum IO in bytes per second for the container system drive.
    #[serde(rename = "IOMaximumBandwidth", default)]
    pub io_maximum_bandwidth: u64,
}

/// A per-device block IO weight override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightDevice {
    /// Device path on the host.
    #[serde(rename = "Path", default)]
    pub path: String,

    /// Relative weight for the device.
    #[serde(rename = "Weight", default)]
    pub weight: u16,
}

impl WeightDevice {
    /// Create a weight override for a device.
    #[must_use]
    pub fn new(path: impl Into<String>, weight: u16) -> Self {
        Self {
            path: path.into(),
            weight,
        }
    }
}

/// A per-device throughput or IOPS cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrottleDevice {
    /// Device path on the host.
    #[serde(rename = "Path", default)]
    pub path: String,

    /// Rate cap; bytes per second or operations per second depending on
    /// which list the entry is placed in.
    #[serde(rename = "Rate", default)]
    pub rate: u64,
}

impl ThrottleDevice {
    /// Create a rate cap for a device.
    #[must_use]
    pub fn new(path: impl Into<String>, rate: u64) -> Self {
        Self {
            path: path.into(),
            rate,
        }
    }
}

/// A host-to-container device exposure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceMapping {
    /// Device path on the host.
    #[serde(rename = "PathOnHost", default)]
    pub path_on_host: String,

    /// Device path inside the container.
    #[serde(rename = "PathInContainer", default)]
    pub path_in_container: String,

    /// Cgroup permissions for the device, e.g. `"rwm"`.
    #[serde(rename = "CgroupPermissions", default)]
    pub cgroup_permissions: String,
}

impl DeviceMapping {
    /// Create a device exposure.
    #[must_use]
    pub fn new(
        path_on_host: impl Into<String>,
        path_in_container: impl Into<String>,
        cgroup_permissions: impl Into<String>,
    ) -> Self {
        Self {
            path_on_host: path_on_host.into(),
            path_in_container: path_in_container.into(),
            cgroup_permissions: cgroup_permissions.into(),
        }
    }
}

/// A ulimit override for the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ulimit {
    /// Ulimit name, e.g. `"nofile"`.
    #[serde(rename = "Name", default)]
    pub name: String,

    /// Soft limit.
    #[serde(rename = "Soft", default)]
    pub soft: i64,

    /// Hard limit.
    #[serde(rename = "Hard", default)]
    pub hard: i64,
}

impl Ulimit {
    /// Create a ulimit override.
    #[must_use]
    pub fn new(name: impl Into<String>, soft: i64, hard: i64) -> Self {
        Self {
            name: name.into(),
            soft,
            hard,
        }
    }
}
