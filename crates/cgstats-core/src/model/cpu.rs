//! CPU cgroup metrics.

use serde::{Deserialize, Serialize};

/// Throttling counters from `cpu.stat`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ThrottlingData {
    /// Number of enforcement periods that have elapsed.
    /// From `cpu.stat` nr_periods.
    pub periods: u64,
    /// Number of periods in which the group was throttled.
    /// From `cpu.stat` nr_throttled.
    pub throttled_periods: u64,
    /// Total time the group was throttled (ns).
    /// From `cpu.stat` throttled_time.
    pub throttled_time: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CpuStats {
    pub throttling_data: ThrottlingData,
}
