use crate::error::{PriceError, Result};
use crate::format::round_to_nearest_quarter;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::Serialize;

/// One candidate resale price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupTier {
    pub multiplier: Decimal,
    pub price: Decimal,
}

impl MarkupTier {
    /// "x1.6"
    pub fn label(&self) -> String {
        format!("x{}", self.multiplier)
    }
}

/// Markup tiers in ascending multiplier order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupTiers {
    tiers: Vec<MarkupTier>,
}

impl MarkupTiers {
    /// Price `cost_per_item` at each multiplier, rounded to the nearest quarter
    pub fn build<I>(cost_per_item: Decimal, multipliers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let tiers = multipliers
            .into_iter()
            .map(|multiplier| -> Result<MarkupTier> {
                let raw = cost_per_item
                    .checked_mul(multiplier)
                    .ok_or(PriceError::Overflow { step: "markup tier" })?;
                let price = round_to_nearest_quarter(raw)
                    .ok_or(PriceError::Overflow { step: "markup tier" })?;
                Ok(MarkupTier { multiplier, price })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tiers })
    }

    pub fn get(&self, multiplier: Decimal) -> Option<Decimal> {
        self.tiers
            .iter()
            .find(|t| t.multiplier == multiplier)
            .map(|t| t.price)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkupTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Compact JSON object, `{"x1.4":"5.25",...}`
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialized as an ordered label -> price object rather than a list
impl Serialize for MarkupTiers {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.tiers.len()))?;
        for tier in &self.tiers {
            map.serialize_entry(&tier.label(), &tier.price.to_string())?;
        }
        map.end()
    }
}
