//! Full cgroup statistics snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BlkioStats, CpuStats, HugetlbStats, MemoryStats};

/// All statistics collected for one cgroup at one point in time.
///
/// `#[serde(default)]` lets snapshot files omit categories that were not
/// collected; missing categories compare as their defaults.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Stats {
    pub cpu_stats: CpuStats,
    pub memory_stats: MemoryStats,
    pub blkio_stats: BlkioStats,
    /// Huge-page usage keyed by page size (`2MB`, `1GB`).
    pub hugetlb_stats: BTreeMap<String, HugetlbStats>,
}
