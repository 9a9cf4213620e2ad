//! Periodic transaction summary
//!
//! Resamples one kind of transaction into consecutive calendar buckets
//! (daily, weekly, monthly, or yearly) and sums the amounts per bucket.
//! Buckets are labeled by their closing edge and buckets with no matching
//! transactions still appear with a zero total, so the series is contiguous
//! across the observed date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::models::{Frequency, Money, TransactionKind};

/// One bucket of a summary: closing edge and summed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPoint {
    /// Closing edge of the bucket
    pub period_end: NaiveDate,
    /// Sum of matching amounts in the bucket
    pub total: Money,
}

/// Income or expenses resampled over consecutive calendar buckets
#[derive(Debug, Clone)]
pub struct TransactionSummary {
    /// Which kind of transaction was summed
    pub kind: TransactionKind,
    /// Bucket length
    pub frequency: Frequency,
    /// Buckets in ascending date order; empty if no transactions matched
    pub points: Vec<SummaryPoint>,
}

impl TransactionSummary {
    /// Build a summary from the ledger's current in-memory table
    ///
    /// Recomputed fresh on every call; nothing is cached.
    pub fn generate(ledger: &Ledger, kind: TransactionKind, frequency: Frequency) -> Self {
        let mut sums: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for txn in ledger.transactions().iter().filter(|t| t.kind == kind) {
            *sums.entry(frequency.period_end(txn.date)).or_default() += txn.amount;
        }

        let mut points = Vec::new();
        if let (Some(&first), Some(&last)) = (sums.keys().next(), sums.keys().next_back()) {
            let mut end = first;
            loop {
                points.push(SummaryPoint {
                    period_end: end,
                    total: sums.get(&end).copied().unwrap_or_default(),
                });
                if end >= last {
                    break;
                }
                end = frequency.next_period_end(end);
            }
        }

        Self {
            kind,
            frequency,
            points,
        }
    }

    /// Check if no transactions matched the requested kind
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum across every bucket
    pub fn total(&self) -> Money {
        self.points.iter().map(|p| p.total).sum()
    }

    /// The largest single bucket total, if any bucket exists
    pub fn peak(&self) -> Option<Money> {
        self.points.iter().map(|p| p.total).max()
    }
}
