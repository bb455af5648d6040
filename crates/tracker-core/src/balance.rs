//! Running balance kept in step with the ledger.

use rust_decimal::Decimal;
use tracker_domain::{Transaction, TransactionKind};

/// Signed running total: income adds, expense subtracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceAccumulator {
    balance: Decimal,
}

impl BalanceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_delta(&mut self, kind: TransactionKind, amount: Decimal) {
        self.balance += kind.signed(amount);
    }

    pub fn current_balance(&self) -> Decimal {
        self.balance
    }

    /// Balance recomputed from scratch over `transactions`.
    pub fn fold<'a, I>(transactions: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .map(Transaction::signed_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn income_adds_and_expense_subtracts() {
        let mut balance = BalanceAccumulator::new();
        balance.apply_delta(TransactionKind::Income, dec!(1000.00));
        balance.apply_delta(TransactionKind::Expense, dec!(250.75));
        assert_eq!(balance.current_balance(), dec!(749.25));
    }

    #[test]
    fn many_small_additions_do_not_drift() {
        let mut balance = BalanceAccumulator::new();
        for _ in 0..10_000 {
            balance.apply_delta(TransactionKind::Income, dec!(0.10));
        }
        assert_eq!(balance.current_balance(), dec!(1000.00));
    }

    #[test]
    fn largest_accepted_amounts_stay_in_range() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let top = Transaction::from_validated(
            TransactionKind::Income,
            tracker_domain::MAX_AMOUNT,
            "Salary",
            date,
        )
        .unwrap();
        let mut balance = BalanceAccumulator::new();
        let entries = vec![top; 100_000];
        for txn in &entries {
            balance.apply_delta(txn.kind(), txn.amount());
        }
        assert_eq!(balance.current_balance(), dec!(100_000_000_000_000_000));
        assert_eq!(BalanceAccumulator::fold(&entries), balance.current_balance());
    }

    #[test]
    fn fold_matches_incremental_value() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let entries = [
            (TransactionKind::Income, dec!(19.99)),
            (TransactionKind::Expense, dec!(0.01)),
            (TransactionKind::Expense, dec!(30)),
        ];
        let mut balance = BalanceAccumulator::new();
        let mut transactions = Vec::new();
        for (kind, amount) in entries {
            balance.apply_delta(kind, amount);
            transactions.push(Transaction::from_validated(kind, amount, "Misc", date).unwrap());
            assert_eq!(BalanceAccumulator::fold(&transactions), balance.current_balance());
        }
        assert_eq!(balance.current_balance(), dec!(-10.02));
    }
}
