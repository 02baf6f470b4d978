use crate::error::PriceError;
use crate::grid::layout::{GridError, GridLayout, HeaderCell};
use crate::pricing::{price_row_with, PricingConfig, PricingResult};
use serde::{Deserialize, Serialize};

/// The raw cell text of one grid row
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GridRow {
    #[serde(default)]
    pub pack_size: String,
    #[serde(default)]
    pub total_price: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl GridRow {
    pub fn new(pack_size: &str, total_price: &str) -> Self {
        Self {
            pack_size: pack_size.to_string(),
            total_price: total_price.to_string(),
            description: None,
        }
    }
}

/// Pricing text for one row, ready for the caller to display
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub index: usize,
    pub pricing: PricingResult,
    pub summary: String,
}

impl Annotation {
    /// The summary with markup-significant characters escaped
    pub fn markup_safe(&self) -> String {
        escape_markup(&self.summary)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowAnnotation {
    Annotated(Annotation),
    /// The row could not be priced and gets no annotation
    Skipped { index: usize, error: PriceError },
}

impl RowAnnotation {
    pub fn index(&self) -> usize {
        match self {
            RowAnnotation::Annotated(a) => a.index,
            RowAnnotation::Skipped { index, .. } => *index,
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            RowAnnotation::Annotated(a) => Some(a),
            RowAnnotation::Skipped { .. } => None,
        }
    }
}

pub fn annotate_row(config: &PricingConfig, index: usize, row: &GridRow) -> RowAnnotation {
    match price_row_with(config, &row.pack_size, &row.total_price) {
        Ok(pricing) => {
            let summary = pricing.summary();
            RowAnnotation::Annotated(Annotation {
                index,
                pricing,
                summary,
            })
        }
        Err(error) => {
            tracing::warn!(
                row = index,
                pack_size = %row.pack_size,
                total_price = %row.total_price,
                "skipping row: {}",
                error
            );
            RowAnnotation::Skipped { index, error }
        }
    }
}

/// Annotate every row independently; a failing row never affects the others
pub fn annotate_rows(rows: &[GridRow]) -> Vec<RowAnnotation> {
    annotate_rows_with(&PricingConfig::default(), rows)
}

pub fn annotate_rows_with(config: &PricingConfig, rows: &[GridRow]) -> Vec<RowAnnotation> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| annotate_row(config, index, row))
        .collect()
}

/// Annotate rows given as raw cell text, with columns located from the headers
pub fn annotate_table_with<S: AsRef<str>>(
    config: &PricingConfig,
    headers: &[HeaderCell],
    rows: &[Vec<S>],
) -> Result<Vec<RowAnnotation>, GridError> {
    let layout = GridLayout::from_headers(headers)?;
    let rows: Vec<GridRow> = rows
        .iter()
        .map(|cells| layout.row_from_cells(cells.as_slice()))
        .collect();
    Ok(annotate_rows_with(config, &rows))
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
