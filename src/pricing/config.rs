use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read pricing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse pricing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid pricing config: {message}")]
    Invalid { message: String },
}

/// Pricing constants. The defaults are the fixed house rules: markups from
/// 1.4x to 2.0x, an 18% case discount off the 1.6x tier, 16 oz per lb.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub markup: MarkupConfig,

    #[serde(default)]
    pub discount: DiscountConfig,

    #[serde(default)]
    pub ounce: OunceConfig,
}

/// Markup multipliers in tenths, so 14..=20 step 1 is 1.4, 1.5, ... 2.0
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarkupConfig {
    #[serde(default = "default_markup_start")]
    pub start_tenths: u32,
    #[serde(default = "default_markup_end")]
    pub end_tenths: u32,
    #[serde(default = "default_markup_step")]
    pub step_tenths: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiscountConfig {
    /// Fraction taken off the discount tier, e.g. 0.18
    #[serde(default = "default_discount_rate")]
    pub rate: Decimal,
    /// Markup tier the case discount is based on, in tenths
    #[serde(default = "default_discount_tier")]
    pub tier_tenths: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OunceConfig {
    #[serde(default = "default_ounces_per_pound")]
    pub per_pound: Decimal,
    /// Units (compared case-insensitively) that get a per-ounce price
    #[serde(default = "default_weight_units")]
    pub weight_units: Vec<String>,
}

fn default_markup_start() -> u32 {
    14
}

fn default_markup_end() -> u32 {
    20
}

fn default_markup_step() -> u32 {
    1
}

fn default_discount_rate() -> Decimal {
    Decimal::new(18, 2)
}

fn default_discount_tier() -> u32 {
    16
}

fn default_ounces_per_pound() -> Decimal {
    Decimal::from(16)
}

fn default_weight_units() -> Vec<String> {
    vec!["lb".to_string(), "#".to_string()]
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            start_tenths: default_markup_start(),
            end_tenths: default_markup_end(),
            step_tenths: default_markup_step(),
        }
    }
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            rate: default_discount_rate(),
            tier_tenths: default_discount_tier(),
        }
    }
}

impl Default for OunceConfig {
    fn default() -> Self {
        Self {
            per_pound: default_ounces_per_pound(),
            weight_units: default_weight_units(),
        }
    }
}

impl MarkupConfig {
    /// Multipliers as exact decimals with one fractional digit
    pub fn multipliers(&self) -> impl Iterator<Item = Decimal> {
        let step = self.step_tenths.max(1) as usize;
        (self.start_tenths..=self.end_tenths)
            .step_by(step)
            .map(|tenths| Decimal::new(tenths as i64, 1))
    }

    fn contains(&self, tenths: u32) -> bool {
        self.step_tenths > 0
            && (self.start_tenths..=self.end_tenths).contains(&tenths)
            && (tenths - self.start_tenths) % self.step_tenths == 0
    }
}

impl DiscountConfig {
    pub fn tier(&self) -> Decimal {
        Decimal::new(self.tier_tenths as i64, 1)
    }

    /// Fraction of the tier price that is kept, e.g. 0.82
    pub fn keep(&self) -> Decimal {
        Decimal::ONE - self.rate
    }
}

impl OunceConfig {
    pub fn applies_to(&self, unit: &str) -> bool {
        self.weight_units.iter().any(|u| u.eq_ignore_ascii_case(unit))
    }
}

impl PricingConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid =
            |message: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid { message }) };

        if self.markup.step_tenths == 0 {
            return invalid("markup.step_tenths must be at least 1".to_string());
        }
        if self.markup.start_tenths > self.markup.end_tenths {
            return invalid(format!(
                "markup range is empty: start_tenths {} > end_tenths {}",
                self.markup.start_tenths, self.markup.end_tenths
            ));
        }
        if !self.markup.contains(self.discount.tier_tenths) {
            return invalid(format!(
                "discount.tier_tenths {} is not one of the markup tiers",
                self.discount.tier_tenths
            ));
        }
        if self.discount.rate.is_sign_negative() || self.discount.rate >= Decimal::ONE {
            return invalid(format!(
                "discount.rate {} must be in [0, 1)",
                self.discount.rate
            ));
        }
        if self.ounce.per_pound <= Decimal::ZERO {
            return invalid("ounce.per_pound must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers() {
        let labels: Vec<String> = MarkupConfig::default()
            .multipliers()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(labels, vec!["1.4", "1.5", "1.6", "1.7", "1.8", "1.9", "2.0"]);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.discount.keep(), Decimal::new(82, 2));
        assert_eq!(config.discount.tier(), Decimal::new(16, 1));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = PricingConfig::load_from_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = PricingConfig::load_from_str(include_str!("../../data/pricing.toml")).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_load_partial_toml() {
        let config = PricingConfig::load_from_str(
            r#"
[markup]
start_tenths = 15
end_tenths = 30
step_tenths = 5

[discount]
rate = "0.10"
tier_tenths = 20
"#,
        )
        .unwrap();

        let multipliers: Vec<String> = config.markup.multipliers().map(|m| m.to_string()).collect();
        assert_eq!(multipliers, vec!["1.5", "2.0", "2.5", "3.0"]);
        assert_eq!(config.discount.keep(), Decimal::new(90, 2));
        assert_eq!(config.ounce, OunceConfig::default());
    }

    #[test]
    fn test_weight_units_case_insensitive() {
        let ounce = OunceConfig::default();
        assert!(ounce.applies_to("lb"));
        assert!(ounce.applies_to("LB"));
        assert!(ounce.applies_to("#"));
        assert!(!ounce.applies_to("oz"));
        assert!(!ounce.applies_to("ea"));
        assert!(!ounce.applies_to(""));
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            "[markup]\nstep_tenths = 0",
            "[markup]\nstart_tenths = 21",
            "[discount]\ntier_tenths = 25",
            "[discount]\nrate = \"1.0\"",
            "[discount]\nrate = \"-0.1\"",
            "[ounce]\nper_pound = \"0\"",
        ];
        for content in cases {
            assert!(
                matches!(
                    PricingConfig::load_from_str(content),
                    Err(ConfigError::Invalid { .. })
                ),
                "expected invalid config for {:?}",
                content
            );
        }
    }

    #[test]
    fn test_unparseable_toml() {
        assert!(matches!(
            PricingConfig::load_from_str("[markup"),
            Err(ConfigError::Parse(_))
        ));
    }
}
