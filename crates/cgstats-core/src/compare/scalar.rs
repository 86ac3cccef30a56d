//! Exact comparison of scalar values and small fixed-field records.

use std::fmt::Debug;

use crate::model::MemoryData;
use crate::report::{Discrepancy, Report};

/// Compares two values in one step and reports both on mismatch.
///
/// Used for whole records (throttling data, huge-page stats) as well as for
/// single fields.
pub fn compare_value<T>(report: &mut Report, field: &str, expected: &T, actual: &T)
where
    T: PartialEq + Debug + ?Sized,
{
    if expected != actual {
        report.record(Discrepancy::value(field, expected, actual));
    }
}

/// Compares a memory usage record field by field.
///
/// `prefix` names the accounting domain (`memory`, `memory swap`,
/// `memory kernel`) and is prepended to each field name.
pub fn compare_memory_data(
    report: &mut Report,
    prefix: &str,
    expected: &MemoryData,
    actual: &MemoryData,
) {
    compare_value(report, &format!("{prefix} usage"), &expected.usage, &actual.usage);
    compare_value(report, &format!("{prefix} max usage"), &expected.max_usage, &actual.max_usage);
    compare_value(report, &format!("{prefix} failcnt"), &expected.failcnt, &actual.failcnt);
    compare_value(report, &format!("{prefix} limit"), &expected.limit, &actual.limit);
}
