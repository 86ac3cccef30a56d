//! Discrepancy accumulation.
//!
//! Comparators never return a verdict. Every mismatch they find is handed to
//! a [`Report`], which logs it and marks itself failed. The caller inspects
//! the report once the whole structure has been walked.

use std::fmt;

use tracing::warn;

use crate::model::BlkioStatEntry;

/// What differed between the expected and the actual value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Entry sequences of different length. No element was compared.
    Length { expected: usize, actual: usize },
    /// Entry sequences differ at one position.
    Entry {
        index: usize,
        expected: BlkioStatEntry,
        actual: BlkioStatEntry,
    },
    /// Two values differ. Both sides are kept in their debug rendering.
    Value { expected: String, actual: String },
    /// A key of the expected mapping is absent from the actual one.
    MissingKey { key: String },
}

/// One reported difference, with enough context to diagnose it without
/// re-running the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    /// Human-readable name of the compared field or category.
    pub field: String,
    pub mismatch: Mismatch,
}

impl Discrepancy {
    pub fn new(field: impl Into<String>, mismatch: Mismatch) -> Self {
        Self {
            field: field.into(),
            mismatch,
        }
    }

    /// Builds a [`Mismatch::Value`] from the debug rendering of both sides.
    pub fn value<T>(field: impl Into<String>, expected: &T, actual: &T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self::new(
            field,
            Mismatch::Value {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            },
        )
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mismatch {
            Mismatch::Length { expected, actual } => write!(
                f,
                "{} do not match - expected {} entries but found {}",
                self.field, expected, actual
            ),
            Mismatch::Entry {
                index,
                expected,
                actual,
            } => write!(
                f,
                "{} do not match - expected entry {} to be {} but found {}",
                self.field, index, expected, actual
            ),
            Mismatch::Value { expected, actual } => {
                write!(f, "Expected {} {} but found {}", self.field, expected, actual)
            }
            Mismatch::MissingKey { .. } => {
                write!(f, "Expected {} not found", self.field)
            }
        }
    }
}

/// Accumulating sink for discrepancies.
///
/// The failed flag is sticky: once set it stays set for the lifetime of the
/// report. A report is owned by a single comparison run.
#[derive(Debug, Default)]
pub struct Report {
    discrepancies: Vec<Discrepancy>,
    failed: bool,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the discrepancy, then records it and marks the report failed.
    pub fn record(&mut self, discrepancy: Discrepancy) {
        warn!(field = %discrepancy.field, "{}", discrepancy);
        self.discrepancies.push(discrepancy);
        self.fail();
    }

    /// Marks the report failed without recording a discrepancy.
    pub fn fail(&mut self) {
        self.failed = true;
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn len(&self) -> usize {
        self.discrepancies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Discrepancies in the order they were found.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    /// Names of the mismatching fields, in the order they were found.
    pub fn fields(&self) -> Vec<&str> {
        self.discrepancies.iter().map(|d| d.field.as_str()).collect()
    }
}
