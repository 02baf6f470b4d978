use crate::format::money;
use crate::pricing::engine::PricingResult;
use std::fmt;

const SEPARATOR: &str = " | ";

impl PricingResult {
    /// One-line display text for the row, e.g.
    ///
    /// ```text
    /// $2.533 per lb (cost) | $0.158 per oz (cost) | $3.800 per item (cost) | Case Discount Price --> $59.04 ($4.92 / each) | Price Markups: {"x1.4":"5.25",...}
    /// ```
    pub fn summary(&self) -> String {
        let c = self.currency_code.as_str();
        let mut parts = vec![format!(
            "{} per {} (cost)",
            money(c, self.price_per_unit),
            self.unit
        )];

        if let Some(per_ounce) = self.price_per_ounce {
            parts.push(format!("{} per oz (cost)", money(c, per_ounce)));
        }

        parts.push(format!("{} per item (cost)", money(c, self.cost_per_item)));
        parts.push(format!(
            "Case Discount Price --> {} ({} / each)",
            money(c, self.case_discount_total),
            money(c, self.case_discount_each_item)
        ));
        parts.push(format!("Price Markups: {}", self.markup_tiers.to_json()));

        parts.join(SEPARATOR)
    }
}

impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
