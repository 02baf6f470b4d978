use crate::error::{PriceError, Result};
use crate::format::{round_fixed, round_to_nearest_quarter};
use crate::notation::{ParsedPackSize, ParsedPrice};
use crate::pricing::config::PricingConfig;
use crate::pricing::markup::MarkupTiers;
use rust_decimal::Decimal;
use serde::Serialize;

/// Prices derived for one grid row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub currency_code: String,
    pub unit: String,
    pub quantity: Decimal,
    /// Cost per `unit`, 3 dp
    pub price_per_unit: Decimal,
    /// Cost per ounce, only for pound units, 3 dp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_ounce: Option<Decimal>,
    /// Cost of one item in the case, 3 dp
    pub cost_per_item: Decimal,
    pub markup_tiers: MarkupTiers,
    /// Discounted resale price of one item, 2 dp
    pub case_discount_each_item: Decimal,
    /// Discounted resale price of the whole case, 2 dp
    pub case_discount_total: Decimal,
}

/// Derive pricing with the house defaults
pub fn derive_pricing(pack: &ParsedPackSize, price: &ParsedPrice) -> Result<PricingResult> {
    derive_pricing_with(&PricingConfig::default(), pack, price)
}

pub fn derive_pricing_with(
    config: &PricingConfig,
    pack: &ParsedPackSize,
    price: &ParsedPrice,
) -> Result<PricingResult> {
    let per_item = divide(price.amount, pack.quantity, "quantity")?;

    // A zero measure carries no information; price per item instead
    let per_unit = if pack.measure.is_zero() {
        per_item
    } else {
        divide(per_item, pack.measure, "measure")?
    };
    let price_per_unit = round_fixed(per_unit, 3);

    let price_per_ounce = if config.ounce.applies_to(&pack.unit) {
        let per_ounce = divide(price_per_unit, config.ounce.per_pound, "ounces per pound")?;
        Some(round_fixed(per_ounce, 3))
    } else {
        None
    };

    let cost_per_item = round_fixed(per_item, 3);
    let markup_tiers = MarkupTiers::build(cost_per_item, config.markup.multipliers())?;

    let discount_tier = match markup_tiers.get(config.discount.tier()) {
        Some(tier) => tier,
        None => {
            let raw = multiply(cost_per_item, config.discount.tier(), "discount tier")?;
            round_to_nearest_quarter(raw).ok_or(PriceError::Overflow {
                step: "discount tier",
            })?
        }
    };
    // The total comes from the unrounded each-item price; both are 2 dp for display
    let each = multiply(discount_tier, config.discount.keep(), "case discount")?;
    let total = multiply(each, pack.quantity, "case discount total")?;
    let case_discount_each_item = round_fixed(each, 2);
    let case_discount_total = round_fixed(total, 2);

    Ok(PricingResult {
        currency_code: price.currency_code.clone(),
        unit: pack.unit.clone(),
        quantity: pack.quantity,
        price_per_unit,
        price_per_ounce,
        cost_per_item,
        markup_tiers,
        case_discount_each_item,
        case_discount_total,
    })
}

fn divide(numerator: Decimal, denominator: Decimal, field: &'static str) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(PriceError::DivisionByZero { field });
    }
    numerator
        .checked_div(denominator)
        .ok_or(PriceError::Overflow { step: field })
}

fn multiply(lhs: Decimal, rhs: Decimal, step: &'static str) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or(PriceError::Overflow { step })
}
