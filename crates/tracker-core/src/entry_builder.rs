//! Turns raw user input into a validated [`Transaction`].

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use tracker_domain::{is_blank, Transaction, TransactionKind, MAX_AMOUNT};

use crate::error::{ValidationError, ValidationResult};
use crate::time::Clock;

/// Stateless validator for new ledger entries.
pub struct EntryBuilder;

impl EntryBuilder {
    /// Validates the raw fields and builds a transaction dated `today`.
    ///
    /// The amount is checked before the category, so input that is wrong in both
    /// places reports the amount problem.
    pub fn build_transaction(
        kind: TransactionKind,
        raw_amount: &str,
        category: &str,
        today: NaiveDate,
    ) -> ValidationResult<Transaction> {
        let amount = Self::parse_amount(raw_amount)?;
        if is_blank(category) {
            debug!("rejected entry without category");
            return Err(ValidationError::BlankCategory);
        }
        Transaction::from_validated(kind, amount, category, today)
            .ok_or(ValidationError::NonPositiveAmount)
    }

    /// Same as [`EntryBuilder::build_transaction`] with the date taken from `clock`.
    pub fn build_with_clock(
        kind: TransactionKind,
        raw_amount: &str,
        category: &str,
        clock: &dyn Clock,
    ) -> ValidationResult<Transaction> {
        Self::build_transaction(kind, raw_amount, category, clock.today())
    }

    /// Parses a strictly positive decimal amount no larger than [`MAX_AMOUNT`].
    ///
    /// Only plain notation is accepted: optional sign, digits and one decimal
    /// point. The result carries at least two decimal places.
    pub fn parse_amount(raw_amount: &str) -> ValidationResult<Decimal> {
        let trimmed = raw_amount.trim();
        let not_a_number = || {
            debug!(input = %raw_amount, "rejected non-numeric amount");
            ValidationError::NotANumber(raw_amount.to_string())
        };
        if !is_plain_number(trimmed) {
            return Err(not_a_number());
        }
        let mut amount = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;
        if amount <= Decimal::ZERO {
            debug!(%amount, "rejected non-positive amount");
            return Err(ValidationError::NonPositiveAmount);
        }
        if amount > MAX_AMOUNT {
            debug!(%amount, "rejected oversized amount");
            return Err(ValidationError::AmountTooLarge(MAX_AMOUNT));
        }
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        Ok(amount)
    }
}

fn is_plain_number(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn builds_expense_with_given_fields() {
        let txn =
            EntryBuilder::build_transaction(TransactionKind::Expense, "42.50", "Groceries", day())
                .unwrap();

        assert_eq!(txn.kind(), TransactionKind::Expense);
        assert_eq!(txn.amount(), dec!(42.50));
        assert_eq!(txn.category(), "Groceries");
        assert_eq!(txn.occurred_on(), day());
    }

    #[test]
    fn non_numeric_amount_is_not_a_number() {
        let err = EntryBuilder::build_transaction(TransactionKind::Income, "abc", "Salary", day())
            .unwrap_err();
        assert_eq!(err, ValidationError::NotANumber("abc".into()));

        let err = EntryBuilder::build_transaction(TransactionKind::Income, "", "Salary", day())
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber(_)));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for raw in ["0", "-5", "0.00", "-0.01"] {
            let err = EntryBuilder::build_transaction(TransactionKind::Income, raw, "Salary", day())
                .unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveAmount, "input {raw:?}");
        }
    }

    #[test]
    fn blank_category_is_rejected() {
        let err = EntryBuilder::build_transaction(TransactionKind::Expense, "10", "  ", day())
            .unwrap_err();
        assert_eq!(err, ValidationError::BlankCategory);
    }

    #[test]
    fn amount_errors_take_precedence_over_category_errors() {
        let err = EntryBuilder::build_transaction(TransactionKind::Expense, "x", "", day())
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber(_)));
    }

    #[test]
    fn surrounding_whitespace_in_amount_is_ignored() {
        assert_eq!(EntryBuilder::parse_amount(" 1000.00 ").unwrap(), dec!(1000.00));
    }

    #[test]
    fn underscores_and_exponents_are_not_numbers() {
        for raw in ["1_000", "1e3", "12,50", "+", "$5"] {
            let err = EntryBuilder::parse_amount(raw).unwrap_err();
            assert_eq!(err, ValidationError::NotANumber(raw.into()), "input {raw:?}");
        }
    }

    #[test]
    fn oversized_amounts_are_rejected() {
        assert_eq!(
            EntryBuilder::parse_amount("1000000000000").unwrap(),
            MAX_AMOUNT
        );
        for raw in ["1000000000000.01", "79228162514264337593543950335"] {
            let err = EntryBuilder::build_transaction(TransactionKind::Income, raw, "Salary", day())
                .unwrap_err();
            assert_eq!(err, ValidationError::AmountTooLarge(MAX_AMOUNT), "input {raw:?}");
        }
    }

    #[test]
    fn amounts_keep_at_least_two_decimal_places() {
        assert_eq!(EntryBuilder::parse_amount("1000").unwrap().to_string(), "1000.00");
        assert_eq!(EntryBuilder::parse_amount("2.5").unwrap().to_string(), "2.50");
        assert_eq!(EntryBuilder::parse_amount("0.125").unwrap().to_string(), "0.125");
    }

    #[test]
    fn clock_supplies_the_date() {
        let clock = FixedClock::new(day());
        let txn = EntryBuilder::build_with_clock(TransactionKind::Income, "1", "Salary", &clock)
            .unwrap();
        assert_eq!(txn.occurred_on(), day());
    }
}
