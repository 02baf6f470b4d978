pub mod error;
pub mod format;
pub mod grid;
#[cfg(not(target_arch = "wasm32"))]
pub mod logger;
pub mod notation;
pub mod pricing;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{PriceError, Result};
pub use notation::{parse_pack_size, parse_total_price, ParsedPackSize, ParsedPrice};
pub use pricing::{derive_pricing, price_row, PricingConfig, PricingResult};
