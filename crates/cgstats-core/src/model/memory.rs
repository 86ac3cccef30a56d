//! Memory cgroup metrics.
//!
//! Source files (cgroup v1 memory controller):
//! - `memory.usage_in_bytes`, `memory.max_usage_in_bytes`, `memory.failcnt`,
//!   `memory.limit_in_bytes` and their `memsw.` / `kmem.` variants
//! - `memory.numa_stat` - per-node page counts
//! - `memory.use_hierarchy`
//! - `memory.stat` - open set of named counters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Usage counters of one memory accounting domain (user, swap or kernel).
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MemoryData {
    /// Current usage in bytes.
    pub usage: u64,
    /// Peak usage in bytes.
    pub max_usage: u64,
    /// Number of times the limit was hit.
    pub failcnt: u64,
    /// Configured limit in bytes (u64::MAX = unlimited).
    pub limit: u64,
}

/// One line of `memory.numa_stat`: `total=N N0=a N1=b ...`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NumaPageStats {
    /// Page count summed over all nodes.
    pub total: u64,
    /// Page count per node, indexed by node id.
    pub nodes: Vec<u64>,
}

impl NumaPageStats {
    pub fn new(total: u64, nodes: Vec<u64>) -> Self {
        Self { total, nodes }
    }
}

/// The four usage classes reported by `memory.numa_stat`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PageUsageByNumaInner {
    pub total: NumaPageStats,
    pub file: NumaPageStats,
    pub anon: NumaPageStats,
    pub unevictable: NumaPageStats,
}

/// Per-node page usage of the group itself plus the `hierarchical_*` lines
/// aggregated over the whole subtree.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PageUsageByNuma {
    pub total: NumaPageStats,
    pub file: NumaPageStats,
    pub anon: NumaPageStats,
    pub unevictable: NumaPageStats,
    pub hierarchical: PageUsageByNumaInner,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MemoryStats {
    /// Memory usage (`memory.*`).
    pub usage: MemoryData,
    /// Memory plus swap usage (`memory.memsw.*`).
    pub swap_usage: MemoryData,
    /// Kernel memory usage (`memory.kmem.*`).
    pub kernel_usage: MemoryData,
    pub page_usage_by_numa: PageUsageByNuma,
    /// Whether children are accounted in this group's counters.
    pub use_hierarchy: bool,
    /// Counters from `memory.stat`, keyed by name (`cache`, `rss`, `pgfault`, ...).
    /// The set of keys depends on the kernel.
    pub stats: BTreeMap<String, u64>,
}
