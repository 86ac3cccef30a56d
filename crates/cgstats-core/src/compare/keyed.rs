//! Containment check for open-ended keyed counters.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::report::{Discrepancy, Mismatch, Report};

/// Checks that every key of `expected` is present in `actual` with an equal
/// value.
///
/// Keys found only in `actual` are not inspected: producers may emit
/// counters the expectation does not mention. A missing key is reported as
/// such and its value is not compared. Both kinds are recorded under
/// `"<field> <key>"`.
pub fn compare_keyed<V>(
    report: &mut Report,
    field: &str,
    expected: &BTreeMap<String, V>,
    actual: &BTreeMap<String, V>,
) where
    V: PartialEq + Debug,
{
    for (key, exp_value) in expected {
        let key_field = format!("{field} {key}");
        match actual.get(key) {
            None => report.record(Discrepancy::new(
                key_field,
                Mismatch::MissingKey { key: key.clone() },
            )),
            Some(act_value) if act_value != exp_value => {
                report.record(Discrepancy::value(key_field, exp_value, act_value))
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_equal_mappings() {
        let expected = stats(&[("cache", 1024), ("rss", 2048)]);
        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &expected, &expected.clone());
        assert!(!report.is_failed());
    }

    #[test]
    fn test_missing_key() {
        let expected = stats(&[("cache", 1024), ("rss", 2048)]);
        let actual = stats(&[("cache", 1024)]);

        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &expected, &actual);

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.discrepancies()[0].mismatch,
            Mismatch::MissingKey {
                key: "rss".to_string()
            }
        );
    }

    #[test]
    fn test_value_mismatch() {
        let expected = stats(&[("cache", 1024), ("pgfault", 10)]);
        let actual = stats(&[("cache", 1024), ("pgfault", 11)]);

        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &expected, &actual);

        assert_eq!(report.fields(), vec!["memory stat pgfault"]);
        assert_eq!(
            report.discrepancies()[0].to_string(),
            "Expected memory stat pgfault 10 but found 11"
        );
    }

    #[test]
    fn test_extra_actual_keys_pass() {
        let expected = stats(&[("cache", 1024)]);
        let actual = stats(&[("cache", 1024), ("rss", 2048), ("swap", 0)]);

        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &expected, &actual);

        assert!(!report.is_failed());
    }

    #[test]
    fn test_empty_expected_checks_nothing() {
        let actual = stats(&[("cache", 1)]);
        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &BTreeMap::new(), &actual);
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_and_mismatch_together() {
        let expected = stats(&[("a", 1), ("b", 2), ("c", 3)]);
        let actual = stats(&[("a", 9), ("c", 3)]);

        let mut report = Report::new();
        compare_keyed(&mut report, "memory stat", &expected, &actual);

        assert_eq!(report.fields(), vec!["memory stat a", "memory stat b"]);
        assert_eq!(
            report.discrepancies()[1].to_string(),
            "Expected memory stat b not found"
        );
    }
}
