//! cgstats-core — verification of cgroup statistics snapshots.
//!
//! Provides:
//! - `model` — cgroup statistics data model (blkio, cpu, hugetlb, memory)
//! - `compare` — per-category structural comparison against an expected snapshot
//! - `report` — accumulating discrepancy sink
//! - `snapshot` — loading snapshots from JSON files

pub mod compare;
pub mod model;
pub mod report;
pub mod snapshot;

pub use report::{Discrepancy, Mismatch, Report};
