//! Huge-page cgroup metrics.

use serde::{Deserialize, Serialize};

/// Usage of one huge-page size (e.g. `2MB`).
///
/// Source files:
/// - `hugetlb.<size>.usage_in_bytes`
/// - `hugetlb.<size>.max_usage_in_bytes`
/// - `hugetlb.<size>.failcnt`
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HugetlbStats {
    pub usage: u64,
    pub max_usage: u64,
    /// Number of allocations that hit the limit.
    pub failcnt: u64,
}
