// Pricing engine: derived unit, ounce, item, markup and case-discount prices

pub mod config;
pub mod engine;
pub mod markup;
pub mod summary;


pub use config::{ConfigError, PricingConfig};
pub use engine::{derive_pricing, derive_pricing_with, PricingResult};
pub use markup::{MarkupTier, MarkupTiers};

use crate::error::Result;
use crate::notation::{parse_pack_size, parse_total_price};

/// Parse one row's pack size and total price and derive its pricing
pub fn price_row(pack_size: &str, total_price: &str) -> Result<PricingResult> {
    price_row_with(&PricingConfig::default(), pack_size, total_price)
}

pub fn price_row_with(
    config: &PricingConfig,
    pack_size: &str,
    total_price: &str,
) -> Result<PricingResult> {
    let pack = parse_pack_size(pack_size)?;
    for diagnostic in &pack.diagnostics {
        tracing::debug!(pack_size, kind = ?diagnostic.kind, "{}", diagnostic);
    }

    let price = parse_total_price(total_price)?;
    let result = derive_pricing_with(config, &pack, &price)?;
    tracing::debug!(
        pack_size,
        total_price,
        quantity = %pack.quantity,
        measure = %pack.measure,
        unit = %pack.unit,
        price_per_unit = %result.price_per_unit,
        "priced row"
    );
    Ok(result)
}
