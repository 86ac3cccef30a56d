//! Data models for cgroup statistics snapshots.
//!
//! - [`blkio`]: block I/O accounting entries per device and operation
//! - [`cpu`]: CPU throttling counters
//! - [`hugetlb`]: huge-page usage per page size
//! - [`memory`]: memory usage records, NUMA breakdown and `memory.stat` counters
//! - [`stats`]: the full snapshot combining all categories
//!
//! All structures are plain data and derive `PartialEq`, which is what the
//! comparators in [`crate::compare`] build on.

mod blkio;
mod cpu;
mod hugetlb;
mod memory;
mod stats;

pub use blkio::{BlkioStatEntry, BlkioStats};
pub use cpu::{CpuStats, ThrottlingData};
pub use hugetlb::HugetlbStats;
pub use memory::{MemoryData, MemoryStats, NumaPageStats, PageUsageByNuma, PageUsageByNumaInner};
pub use stats::Stats;
