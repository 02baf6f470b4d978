// Tokenizer for pack-size notation such as "12 x 1.5 LB" or "6/10OZ"
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer or decimal number: "12", "1.5", ".5", "12."
    Number(Decimal),
    /// Pack multiplier: "x" or "X"
    Times,
    /// Pack separator: "/"
    Slash,
    /// Run of whitespace
    Space,
    /// Unit word: letters, digits, '_' and '#'
    Word(String),
    Other(char),
}

/// A token together with its byte offset in the source string
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub offset: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '#'
}

pub fn tokenize(input: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        let token = if c.is_whitespace() {
            while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
                chars.next();
            }
            Token::Space
        } else if c.is_ascii_digit() || c == '.' {
            let mut digits = String::new();
            let mut seen_dot = false;
            while let Some(&(_, c)) = chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                } else if c == '.' && !seen_dot {
                    seen_dot = true;
                    digits.push(c);
                } else {
                    break;
                }
                chars.next();
            }
            match number_value(&digits) {
                Some(value) => Token::Number(value),
                None => Token::Other(c),
            }
        } else if c == '/' {
            chars.next();
            Token::Slash
        } else if c == 'x' || c == 'X' {
            chars.next();
            match chars.peek() {
                // "XL", "x_large", "x#": part of a word
                Some(&(_, next)) if next.is_alphabetic() || next == '_' || next == '#' => {
                    let mut word = String::from(c);
                    while let Some(&(_, c)) = chars.peek() {
                        if !is_word_char(c) {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    Token::Word(word)
                }
                _ => Token::Times,
            }
        } else if is_word_char(c) {
            let mut word = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_word_char(c) {
                    break;
                }
                word.push(c);
                chars.next();
            }
            Token::Word(word)
        } else {
            chars.next();
            Token::Other(c)
        };

        lexemes.push(Lexeme { token, offset });
    }

    lexemes
}

/// Parse the digits of a number token. A lone "." is not a number.
fn number_value(digits: &str) -> Option<Decimal> {
    let trimmed = digits.trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    if let Some(fraction) = trimmed.strip_prefix('.') {
        return Decimal::from_str(&format!("0.{}", fraction)).ok();
    }
    Decimal::from_str(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|l| l.token).collect()
    }

    fn num(s: &str) -> Token {
        Token::Number(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_tokenize_multiplier_notation() {
        assert_eq!(
            tokens("12 x 1.5 LB"),
            vec![
                num("12"),
                Token::Space,
                Token::Times,
                Token::Space,
                num("1.5"),
                Token::Space,
                Token::Word("LB".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_compact_notation() {
        assert_eq!(
            tokens("6/10OZ"),
            vec![num("6"), Token::Slash, num("10"), Token::Word("OZ".to_string())]
        );
        assert_eq!(
            tokens("12x16oz"),
            vec![num("12"), Token::Times, num("16"), Token::Word("oz".to_string())]
        );
    }

    #[test]
    fn test_tokenize_x_inside_word() {
        assert_eq!(
            tokens("2 XL"),
            vec![num("2"), Token::Space, Token::Word("XL".to_string())]
        );
    }

    #[test]
    fn test_tokenize_pound_sign() {
        assert_eq!(tokens("5#"), vec![num("5"), Token::Word("#".to_string())]);
    }

    #[test]
    fn test_tokenize_odd_numbers() {
        assert_eq!(tokens(".5"), vec![num("0.5")]);
        assert_eq!(tokens("12."), vec![num("12")]);
        assert_eq!(tokens("."), vec![Token::Other('.')]);
    }

    #[test]
    fn test_offsets() {
        let lexemes = tokenize("6 / 10");
        let offsets: Vec<usize> = lexemes.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }
}
