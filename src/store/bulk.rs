//! Bulk Update Types
//!
//! Input pairs and the per-pair report produced by `Store::update_bulk`.

use serde::Serialize;

// == Pair ==
/// A key and the value to write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// == Pair Outcome ==
/// Whether a single input pair was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    pub key: String,
    pub updated: bool,
}

// == Bulk Outcome ==
/// Classification of a whole bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Every pair was applied (includes the empty batch)
    Applied,
    /// At least one pair applied and at least one skipped
    Partial,
    /// No pair matched an existing key
    NoneApplied,
}

// == Bulk Report ==
/// One outcome per input pair, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    results: Vec<PairOutcome>,
}

impl BulkReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    /// Appends the outcome of the next pair.
    pub fn record(&mut self, key: String, updated: bool) {
        self.results.push(PairOutcome { key, updated });
    }

    pub fn results(&self) -> &[PairOutcome] {
        &self.results
    }

    pub fn into_results(self) -> Vec<PairOutcome> {
        self.results
    }

    /// Number of pairs that were applied.
    pub fn applied(&self) -> usize {
        self.results.iter().filter(|r| r.updated).count()
    }

    /// Number of pairs skipped because their key was absent.
    pub fn skipped(&self) -> usize {
        self.results.len() - self.applied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn outcome(&self) -> BulkOutcome {
        let applied = self.applied();
        if applied == self.results.len() {
            BulkOutcome::Applied
        } else if applied == 0 {
            BulkOutcome::NoneApplied
        } else {
            BulkOutcome::Partial
        }
    }
}
