use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry relative to the running balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Applies the kind's sign to a positive amount.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Largest amount a single entry may carry.
///
/// Keeps every running total far inside `Decimal`'s range, so balance arithmetic
/// cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A committed income or expense entry.
///
/// Fields are private so a value can only come from a validated constructor and
/// never changes afterwards. Deserialization goes through the same checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    category: String,
    occurred_on: NaiveDate,
}

impl Transaction {
    /// Builds a record from already validated parts.
    ///
    /// Returns `None` when `amount` is not strictly positive, exceeds
    /// [`MAX_AMOUNT`], or `category` is blank, so an invalid transaction can
    /// never exist.
    pub fn from_validated(
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Option<Self> {
        let category = category.into();
        if amount <= Decimal::ZERO || amount > MAX_AMOUNT || crate::category::is_blank(&category) {
            return None;
        }
        Some(Self {
            kind,
            amount,
            category,
            occurred_on,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn occurred_on(&self) -> NaiveDate {
        self.occurred_on
    }

    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

#[derive(Deserialize)]
struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    category: String,
    occurred_on: NaiveDate,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = String;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let TransactionRecord {
            kind,
            amount,
            category,
            occurred_on,
        } = record;
        Transaction::from_validated(kind, amount, category, occurred_on).ok_or_else(|| {
            format!("invalid {kind} entry: amount {amount} must be in (0, {MAX_AMOUNT}] with a category")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn expense_contributes_negative_amount() {
        let txn =
            Transaction::from_validated(TransactionKind::Expense, dec!(42.50), "Groceries", date())
                .unwrap();
        assert_eq!(txn.signed_amount(), dec!(-42.50));
        assert_eq!(txn.kind().to_string(), "Expense");
    }

    #[test]
    fn rejects_non_positive_amounts_and_blank_categories() {
        let kind = TransactionKind::Income;
        assert!(Transaction::from_validated(kind, dec!(0), "Salary", date()).is_none());
        assert!(Transaction::from_validated(kind, dec!(-1), "Salary", date()).is_none());
        assert!(Transaction::from_validated(kind, dec!(1), "   ", date()).is_none());
    }

    #[test]
    fn amounts_are_capped() {
        let kind = TransactionKind::Income;
        assert_eq!(MAX_AMOUNT, dec!(1_000_000_000_000));
        assert!(Transaction::from_validated(kind, MAX_AMOUNT, "Salary", date()).is_some());
        assert!(
            Transaction::from_validated(kind, MAX_AMOUNT + dec!(0.01), "Salary", date()).is_none()
        );
        assert!(Transaction::from_validated(kind, Decimal::MAX, "Salary", date()).is_none());
    }

    #[test]
    fn deserializing_applies_the_same_checks() {
        let valid = r#"{"kind":"Income","amount":"12.50","category":"Salary","occurred_on":"2024-01-15"}"#;
        let txn: Transaction = serde_json::from_str(valid).unwrap();
        assert_eq!(txn.amount(), dec!(12.50));

        for json in [
            r#"{"kind":"Income","amount":"-5","category":"Salary","occurred_on":"2024-01-15"}"#,
            r#"{"kind":"Income","amount":"5","category":"","occurred_on":"2024-01-15"}"#,
            r#"{"kind":"Expense","amount":"79228162514264337593543950335","category":"Salary","occurred_on":"2024-01-15"}"#,
        ] {
            assert!(serde_json::from_str::<Transaction>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn serializes_amount_as_string() {
        let txn =
            Transaction::from_validated(TransactionKind::Income, dec!(1000.00), "Salary", date())
                .unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"amount\":\"1000.00\""), "{json}");
        assert!(json.contains("\"occurred_on\":\"2024-01-15\""), "{json}");
    }
}
