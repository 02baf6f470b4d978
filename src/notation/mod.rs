// Notation parser: pack-size and total-price strings into structured values

pub mod diagnostics;
pub mod lexer;
pub mod pack_size;
pub mod price;


pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use pack_size::{parse_pack_size, ParsedPackSize};
pub use price::{parse_total_price, ParsedPrice};
