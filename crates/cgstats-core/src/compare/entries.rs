//! Positional comparison of block I/O entry sequences.

use crate::model::BlkioStatEntry;
use crate::report::{Discrepancy, Mismatch, Report};

/// Compares two entry sequences position by position.
///
/// A length difference is reported once and suppresses element comparison
/// for this sequence. Otherwise every differing index is reported. Entries
/// are never reordered: the producer's device order is part of the contract.
pub fn compare_entries(
    report: &mut Report,
    field: &str,
    expected: &[BlkioStatEntry],
    actual: &[BlkioStatEntry],
) {
    if expected.len() != actual.len() {
        report.record(Discrepancy::new(
            field,
            Mismatch::Length {
                expected: expected.len(),
                actual: actual.len(),
            },
        ));
        return;
    }

    for (index, (exp, act)) in expected.iter().zip(actual).enumerate() {
        if exp != act {
            report.record(Discrepancy::new(
                field,
                Mismatch::Entry {
                    index,
                    expected: exp.clone(),
                    actual: act.clone(),
                },
            ));
        }
    }
}
