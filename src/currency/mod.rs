//! Display formatting for amounts and dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every amount.
pub const DISPLAY_PRECISION: u32 = 2;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders `amount` with `symbol` and two decimals, e.g. `$749.25` or `-$12.00`.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.2}", rounded.abs());
    if rounded < Decimal::ZERO {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// Renders a date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_always_show_two_decimals() {
        assert_eq!(format_amount(dec!(0), "$"), "$0.00");
        assert_eq!(format_amount(dec!(1000), "$"), "$1000.00");
        assert_eq!(format_amount(dec!(749.25), "$"), "$749.25");
        assert_eq!(format_amount(dec!(0.005), "€"), "€0.01");
    }

    #[test]
    fn negative_amounts_put_sign_before_symbol() {
        assert_eq!(format_amount(dec!(-12), "$"), "-$12.00");
        assert_eq!(format_amount(dec!(-0.001), "$"), "$0.00");
    }

    #[test]
    fn dates_use_iso_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }
}
