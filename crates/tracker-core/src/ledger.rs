//! Append-only transaction ledger with cheap point-in-time snapshots.

use std::sync::Arc;

use tracing::debug;
use tracker_domain::Transaction;

/// Ordered record of every committed transaction in a session.
///
/// Entries live behind an `Arc` so a [`LedgerSnapshot`] shares storage until the
/// next append, which copies on write while a snapshot is still alive.
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    entries: Arc<Vec<Transaction>>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `transaction` at the end and returns its position.
    pub fn append(&mut self, transaction: Transaction) -> usize {
        let entries = Arc::make_mut(&mut self.entries);
        entries.push(transaction);
        let index = entries.len() - 1;
        debug!(index, "transaction appended");
        index
    }

    /// Immutable view of the entries as they are right now.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            entries: Arc::clone(&self.entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Frozen, restartable view over the ledger at the time it was taken.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    entries: Arc<Vec<Transaction>>,
}

impl LedgerSnapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a LedgerSnapshot {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tracker_domain::TransactionKind;

    fn txn(category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Transaction::from_validated(TransactionKind::Income, dec!(1), category, date).unwrap()
    }

    #[test]
    fn append_returns_sequential_positions() {
        let mut ledger = TransactionLedger::new();
        assert_eq!(ledger.append(txn("Salary")), 0);
        assert_eq!(ledger.append(txn("Salary")), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn snapshot_does_not_follow_later_appends() {
        let mut ledger = TransactionLedger::new();
        ledger.append(txn("Salary"));
        let snapshot = ledger.snapshot();

        ledger.append(txn("Shopping"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.snapshot().len(), 2);
    }

    #[test]
    fn snapshot_can_be_iterated_repeatedly_in_insertion_order() {
        let mut ledger = TransactionLedger::new();
        ledger.append(txn("Salary"));
        ledger.append(txn("Groceries"));
        let snapshot = ledger.snapshot();

        let first: Vec<_> = snapshot.iter().map(Transaction::category).collect();
        let second: Vec<_> = (&snapshot).into_iter().map(Transaction::category).collect();
        assert_eq!(first, ["Salary", "Groceries"]);
        assert_eq!(first, second);
        assert_eq!(snapshot.get(1).map(Transaction::category), Some("Groceries"));
    }
}
