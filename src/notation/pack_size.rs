use crate::error::{PriceError, Result};
use crate::notation::diagnostics::{Diagnostic, DiagnosticKind};
use crate::notation::lexer::{tokenize, Lexeme, Token};
use rust_decimal::Decimal;
use serde::Serialize;

/// Quantity, per-item measure and unit read from a pack-size notation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPackSize {
    /// Items per case
    pub quantity: Decimal,
    /// Weight or volume of each item, in `unit`
    pub measure: Decimal,
    /// Lower-cased unit token, empty when absent
    pub unit: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedPackSize {
    pub fn new(quantity: Decimal, measure: Decimal, unit: impl Into<String>) -> Self {
        Self {
            quantity,
            measure,
            unit: unit.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_diagnostic(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }
}

/// Parse a pack-size notation such as "12 x 1.5 LB", "6/10OZ" or "24".
///
/// Grammar, whitespace between parts optional unless noted:
///
/// ```text
/// pack      := number (delimiter number | SPACE number)? unit? trailing?
/// delimiter := 'x' | 'X' | '/'
/// ```
///
/// With only one number the item is one per case: quantity 1 and the number
/// is the measure.
pub fn parse_pack_size(raw: &str) -> Result<ParsedPackSize> {
    PackSizeParser::new(raw).parse()
}

struct PackSizeParser<'a> {
    input: &'a str,
    lexemes: Vec<Lexeme>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> PackSizeParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            lexemes: tokenize(input),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<ParsedPackSize> {
        self.skip_space();
        let first = self.number().ok_or_else(|| PriceError::MalformedPackSize {
            input: self.input.to_string(),
        })?;

        let second = self.measure();
        self.skip_space();
        let unit = self.unit();
        self.trailing();

        let (quantity, measure) = match second {
            Some(_) if first > Decimal::ZERO && first < Decimal::ONE => {
                return Err(PriceError::MalformedPackSize {
                    input: self.input.to_string(),
                });
            }
            Some(measure) => (first, measure),
            None => {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::OnePerCase,
                    "No case count in pack size, treating it as one item per case",
                ));
                (Decimal::ONE, first)
            }
        };

        Ok(ParsedPackSize {
            quantity,
            measure,
            unit,
            diagnostics: self.diagnostics,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.lexemes.get(self.pos).map(|l| &l.token)
    }

    fn offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map(|l| l.offset)
            .unwrap_or(self.input.len())
    }

    fn skip_space(&mut self) -> bool {
        if matches!(self.peek(), Some(Token::Space)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self) -> Option<Decimal> {
        match self.peek() {
            Some(Token::Number(value)) => {
                let value = *value;
                self.pos += 1;
                Some(value)
            }
            _ => None,
        }
    }

    /// The per-item measure after the case count, if there is one
    fn measure(&mut self) -> Option<Decimal> {
        let checkpoint = self.pos;
        let spaced = self.skip_space();

        match self.peek() {
            Some(Token::Times) | Some(Token::Slash) => {
                let delimiter_offset = self.offset();
                self.pos += 1;
                let after_delimiter = self.pos;
                self.skip_space();
                if let Some(value) = self.number() {
                    return Some(value);
                }
                self.pos = after_delimiter;
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::DanglingDelimiter,
                        "Delimiter without a measure after it was ignored",
                    )
                    .at(delimiter_offset),
                );
                None
            }
            Some(Token::Number(_)) if spaced => self.number(),
            _ => {
                self.pos = checkpoint;
                None
            }
        }
    }

    fn unit(&mut self) -> String {
        match self.peek() {
            Some(Token::Word(word)) => {
                let unit = word.to_lowercase();
                self.pos += 1;
                unit
            }
            _ => {
                self.diagnostics.push(
                    Diagnostic::new(DiagnosticKind::MissingUnit, "No unit in pack size")
                        .at(self.offset()),
                );
                String::new()
            }
        }
    }

    fn trailing(&mut self) {
        self.skip_space();
        if self.pos >= self.lexemes.len() {
            return;
        }
        let offset = self.offset();
        let rest = self.input[offset..].trim();
        if !rest.is_empty() {
            self.diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::IgnoredTrailingText,
                    format!("Ignored trailing text '{}'", rest),
                )
                .at(offset),
            );
        }
        self.pos = self.lexemes.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_single_number() {
        let parsed = parse_pack_size("24").unwrap();
        assert_eq!(parsed.quantity, Decimal::ONE);
        assert_eq!(parsed.measure, dec("24"));
        assert_eq!(parsed.unit, "");
        assert!(parsed.has_diagnostic(DiagnosticKind::OnePerCase));
        assert!(parsed.has_diagnostic(DiagnosticKind::MissingUnit));
    }

    #[test]
    fn test_parse_times_notation() {
        let parsed = parse_pack_size("12 x 1.5 LB").unwrap();
        assert_eq!(parsed.quantity, dec("12"));
        assert_eq!(parsed.measure, dec("1.5"));
        assert_eq!(parsed.unit, "lb");
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_slash_notation() {
        let parsed = parse_pack_size("6/10OZ").unwrap();
        assert_eq!(parsed.quantity, dec("6"));
        assert_eq!(parsed.measure, dec("10"));
        assert_eq!(parsed.unit, "oz");
    }

    #[test]
    fn test_parse_space_delimiter() {
        let parsed = parse_pack_size("12 16 OZ").unwrap();
        assert_eq!(parsed.quantity, dec("12"));
        assert_eq!(parsed.measure, dec("16"));
        assert_eq!(parsed.unit, "oz");
    }

    #[test]
    fn test_parse_single_measure_with_unit() {
        let parsed = parse_pack_size("25 LB").unwrap();
        assert_eq!(parsed.quantity, Decimal::ONE);
        assert_eq!(parsed.measure, dec("25"));
        assert_eq!(parsed.unit, "lb");
        assert!(parsed.has_diagnostic(DiagnosticKind::OnePerCase));
    }

    #[test]
    fn test_parse_empty_is_malformed() {
        assert_eq!(
            parse_pack_size(""),
            Err(PriceError::MalformedPackSize {
                input: String::new()
            })
        );
    }

    #[test]
    fn test_parse_no_leading_number_is_malformed() {
        assert!(matches!(
            parse_pack_size("EACH"),
            Err(PriceError::MalformedPackSize { .. })
        ));
    }
}
