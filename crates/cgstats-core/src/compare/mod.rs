//! Per-category comparison of cgroup statistics.
//!
//! Each `expect_*_equals` entry point walks every sub-field of its category
//! in a fixed order and records every mismatch in the given [`Report`].
//! Nothing is skipped because an earlier field differed, so a single run
//! lists all divergent fields. The entry points return nothing; the report
//! is the verdict.
//!
//! ```text
//! expect_stats_equals
//!   ├── expect_throttling_data_equals   (whole record)
//!   ├── expect_memory_stats_equals
//!   │     ├── compare_memory_data x3    (usage, swap, kernel)
//!   │     ├── compare_page_usage_by_numa (8 breakdowns)
//!   │     ├── use_hierarchy
//!   │     └── compare_keyed             (memory.stat)
//!   ├── expect_blkio_stats_equals       (8 entry sequences)
//!   └── compare_keyed                   (hugetlb per page size)
//! ```

mod entries;
mod keyed;
mod numa;
mod scalar;

pub use entries::compare_entries;
pub use keyed::compare_keyed;
pub use numa::compare_page_usage_by_numa;
pub use scalar::{compare_memory_data, compare_value};

use tracing::debug;

use crate::model::{BlkioStats, HugetlbStats, MemoryStats, Stats, ThrottlingData};
use crate::report::Report;

pub fn expect_blkio_stats_equals(report: &mut Report, expected: &BlkioStats, actual: &BlkioStats) {
    debug!("comparing blkio stats");
    compare_entries(
        report,
        "blkio io_service_bytes_recursive",
        &expected.io_service_bytes_recursive,
        &actual.io_service_bytes_recursive,
    );
    compare_entries(
        report,
        "blkio io_serviced_recursive",
        &expected.io_serviced_recursive,
        &actual.io_serviced_recursive,
    );
    compare_entries(
        report,
        "blkio io_queued_recursive",
        &expected.io_queued_recursive,
        &actual.io_queued_recursive,
    );
    compare_entries(
        report,
        "blkio sectors_recursive",
        &expected.sectors_recursive,
        &actual.sectors_recursive,
    );
    compare_entries(
        report,
        "blkio io_service_time_recursive",
        &expected.io_service_time_recursive,
        &actual.io_service_time_recursive,
    );
    compare_entries(
        report,
        "blkio io_wait_time_recursive",
        &expected.io_wait_time_recursive,
        &actual.io_wait_time_recursive,
    );
    compare_entries(
        report,
        "blkio io_merged_recursive",
        &expected.io_merged_recursive,
        &actual.io_merged_recursive,
    );
    compare_entries(
        report,
        "blkio io_time_recursive",
        &expected.io_time_recursive,
        &actual.io_time_recursive,
    );
}

pub fn expect_throttling_data_equals(
    report: &mut Report,
    expected: &ThrottlingData,
    actual: &ThrottlingData,
) {
    debug!("comparing throttling data");
    compare_value(report, "throttling data", expected, actual);
}

pub fn expect_hugetlb_stats_equals(
    report: &mut Report,
    expected: &HugetlbStats,
    actual: &HugetlbStats,
) {
    debug!("comparing hugetlb stats");
    compare_value(report, "hugetlb stats", expected, actual);
}

pub fn expect_memory_stats_equals(
    report: &mut Report,
    expected: &MemoryStats,
    actual: &MemoryStats,
) {
    debug!("comparing memory stats");
    compare_memory_data(report, "memory", &expected.usage, &actual.usage);
    compare_memory_data(report, "memory swap", &expected.swap_usage, &actual.swap_usage);
    compare_memory_data(report, "memory kernel", &expected.kernel_usage, &actual.kernel_usage);
    compare_page_usage_by_numa(report, &expected.page_usage_by_numa, &actual.page_usage_by_numa);
    compare_value(
        report,
        "memory use hierarchy",
        &expected.use_hierarchy,
        &actual.use_hierarchy,
    );
    compare_keyed(report, "memory stat", &expected.stats, &actual.stats);
}

/// Compares a full snapshot, category by category.
///
/// Huge-page stats are matched per page size with the same containment rule
/// as `memory.stat`: page sizes only present in `actual` pass.
pub fn expect_stats_equals(report: &mut Report, expected: &Stats, actual: &Stats) {
    expect_throttling_data_equals(
        report,
        &expected.cpu_stats.throttling_data,
        &actual.cpu_stats.throttling_data,
    );
    expect_memory_stats_equals(report, &expected.memory_stats, &actual.memory_stats);
    expect_blkio_stats_equals(report, &expected.blkio_stats, &actual.blkio_stats);
    debug!("comparing hugetlb stats per page size");
    compare_keyed(report, "hugetlb stats", &expected.hugetlb_stats, &actual.hugetlb_stats);
}
