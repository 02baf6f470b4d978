// Fixed-precision helpers shared by the notation parser and the pricing engine
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` decimal places (half away from zero) and pad the
/// scale so that `to_string()` always prints exactly `dp` digits.
pub fn round_fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Round to the nearest quarter currency unit, fixed to 2 decimal places.
/// `None` if the value is too large to scale.
///
/// `6.08` becomes `6.00`, `6.13` becomes `6.25`.
pub fn round_to_nearest_quarter(value: Decimal) -> Option<Decimal> {
    let four = Decimal::from(4);
    let quarters = value
        .checked_mul(four)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some(round_fixed(quarters / four, 2))
}

/// Render a value prefixed by its currency symbol, e.g. `$2.533`.
pub fn money(currency_code: &str, value: Decimal) -> String {
    format!("{}{}", currency_code, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_fixed_pads_scale() {
        assert_eq!(round_fixed(dec("3.8"), 3).to_string(), "3.800");
        assert_eq!(round_fixed(Decimal::ZERO, 2).to_string(), "0.00");
        assert_eq!(round_fixed(dec("12"), 2).to_string(), "12.00");
    }

    #[test]
    fn test_round_fixed_half_away_from_zero() {
        assert_eq!(round_fixed(dec("0.0005"), 3).to_string(), "0.001");
        assert_eq!(round_fixed(dec("2.5333333"), 3).to_string(), "2.533");
        assert_eq!(round_fixed(dec("0.125"), 2).to_string(), "0.13");
    }

    #[test]
    fn test_round_to_nearest_quarter() {
        assert_eq!(round_to_nearest_quarter(dec("6.08")).unwrap().to_string(), "6.00");
        assert_eq!(round_to_nearest_quarter(dec("5.32")).unwrap().to_string(), "5.25");
        assert_eq!(round_to_nearest_quarter(dec("5.70")).unwrap().to_string(), "5.75");
        assert_eq!(round_to_nearest_quarter(dec("6.125")).unwrap().to_string(), "6.25");
        assert_eq!(round_to_nearest_quarter(Decimal::ZERO).unwrap().to_string(), "0.00");
        assert_eq!(round_to_nearest_quarter(Decimal::MAX), None);
    }

    #[test]
    fn test_money() {
        assert_eq!(money("$", dec("4.92")), "$4.92");
        assert_eq!(money("", dec("4.92")), "4.92");
    }
}
