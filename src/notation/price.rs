use crate::error::{PriceError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Total case price split into its currency symbol and amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPrice {
    /// Leading currency symbol, verbatim. Empty when the string starts with a digit.
    pub currency_code: String,
    pub amount: Decimal,
}

/// Parse a total price such as "$45.60".
///
/// The first character is the currency symbol unless it is part of a number.
/// Thousands separators are accepted; negative amounts are not.
pub fn parse_total_price(raw: &str) -> Result<ParsedPrice> {
    let malformed = || PriceError::MalformedPrice {
        input: raw.to_string(),
    };

    let trimmed = raw.trim();
    let first = trimmed.chars().next().ok_or_else(malformed)?;

    let (currency_code, remainder) = if first.is_ascii_digit() || matches!(first, '.' | '+' | '-')
    {
        (String::new(), trimmed)
    } else {
        (first.to_string(), &trimmed[first.len_utf8()..])
    };

    let digits: String = remainder.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(malformed());
    }
    let amount = Decimal::from_str(&digits).map_err(|_| malformed())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(malformed());
    }

    Ok(ParsedPrice {
        currency_code,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar_price() {
        let price = parse_total_price("$45.60").unwrap();
        assert_eq!(price.currency_code, "$");
        assert_eq!(price.amount, Decimal::from_str("45.60").unwrap());
    }

    #[test]
    fn test_parse_other_symbols() {
        let price = parse_total_price("€3").unwrap();
        assert_eq!(price.currency_code, "€");
        assert_eq!(price.amount, Decimal::from(3));

        let price = parse_total_price(" £ 12.00 ").unwrap();
        assert_eq!(price.currency_code, "£");
        assert_eq!(price.amount, Decimal::from(12));
    }

    #[test]
    fn test_parse_without_symbol() {
        let price = parse_total_price("45.60").unwrap();
        assert_eq!(price.currency_code, "");
        assert_eq!(price.amount, Decimal::from_str("45.60").unwrap());
    }

    #[test]
    fn test_parse_thousands_separator() {
        let price = parse_total_price("$1,234.50").unwrap();
        assert_eq!(price.amount, Decimal::from_str("1234.50").unwrap());
    }

    #[test]
    fn test_malformed_prices() {
        for raw in ["", "$", "$abc", "$-5.00", "-5", "$4.5.6", "   "] {
            assert_eq!(
                parse_total_price(raw),
                Err(PriceError::MalformedPrice {
                    input: raw.to_string()
                }),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let price = parse_total_price("$0.00").unwrap();
        assert!(price.amount.is_zero());
    }
}
