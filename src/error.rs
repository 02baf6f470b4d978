use thiserror::Error;

/// Why a row could not be priced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Malformed pack size '{input}': no leading number")]
    MalformedPackSize { input: String },

    #[error("Malformed price '{input}': amount is not a non-negative number")]
    MalformedPrice { input: String },

    #[error("Division by zero: {field} is zero")]
    DivisionByZero { field: &'static str },

    #[error("Arithmetic overflow while computing {step}")]
    Overflow { step: &'static str },
}

pub type Result<T> = std::result::Result<T, PriceError>;
