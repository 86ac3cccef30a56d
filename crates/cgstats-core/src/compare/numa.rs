//! Comparison of per-node page usage (`memory.numa_stat`).

use super::scalar::compare_value;
use crate::model::PageUsageByNuma;
use crate::report::Report;

/// Compares the eight NUMA breakdowns independently.
///
/// Each breakdown is compared as a whole; a mismatch carries both complete
/// breakdowns rather than the differing node.
pub fn compare_page_usage_by_numa(
    report: &mut Report,
    expected: &PageUsageByNuma,
    actual: &PageUsageByNuma,
) {
    compare_value(report, "total page usage by NUMA", &expected.total, &actual.total);
    compare_value(report, "file page usage by NUMA", &expected.file, &actual.file);
    compare_value(report, "anon page usage by NUMA", &expected.anon, &actual.anon);
    compare_value(
        report,
        "unevictable page usage by NUMA",
        &expected.unevictable,
        &actual.unevictable,
    );

    let (exp, act) = (&expected.hierarchical, &actual.hierarchical);
    compare_value(report, "hierarchical total page usage by NUMA", &exp.total, &act.total);
    compare_value(report, "hierarchical file page usage by NUMA", &exp.file, &act.file);
    compare_value(report, "hierarchical anon page usage by NUMA", &exp.anon, &act.anon);
    compare_value(
        report,
        "hierarchical unevictable page usage by NUMA",
        &exp.unevictable,
        &act.unevictable,
    );
}
