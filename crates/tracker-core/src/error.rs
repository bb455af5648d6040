use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected user input. Every failure in the engine is one of these; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Category name cannot be blank")]
    Blank,
    #[error("Amount `{0}` is not a number")]
    NotANumber(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Amount must not exceed {0}")]
    AmountTooLarge(Decimal),
    #[error("A category must be selected")]
    BlankCategory,
}

pub type ValidationResult<T> = Result<T, ValidationError>;
