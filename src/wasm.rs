// WebAssembly bindings used by the browser userscript that watches the grid
use crate::grid::{self, GridLayout, HeaderCell, RowAnnotation};
use crate::pricing::{self, PricingConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PackPriceWasm {
    config: PricingConfig,
}

impl Default for PackPriceWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PackPriceWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }

    /// Create with pricing rules from TOML config content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<PackPriceWasm, JsValue> {
        let config = PricingConfig::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { config })
    }

    /// Summary text for one row
    #[wasm_bindgen]
    pub fn price_row(&self, pack_size: &str, total_price: &str) -> Result<String, JsValue> {
        let result = pricing::price_row_with(&self.config, pack_size, total_price)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(result.summary())
    }

    /// Full pricing for one row as a JSON string
    #[wasm_bindgen]
    pub fn price_row_json(&self, pack_size: &str, total_price: &str) -> Result<String, JsValue> {
        let result = pricing::price_row_with(&self.config, pack_size, total_price)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize pricing: {}", e)))
    }

    /// Markup-safe summary per row, or `undefined` for rows that cannot be priced.
    /// headers_json: JSON array of {"field": ..., "text": ...}
    /// rows: array of rows, each an array of cell text in header order
    #[wasm_bindgen]
    pub fn annotate_rows(
        &self,
        headers_json: &str,
        rows: &js_sys::Array,
    ) -> Result<js_sys::Array, JsValue> {
        let headers: Vec<HeaderCell> = serde_json::from_str(headers_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse headers JSON: {}", e)))?;

        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                js_sys::Array::from(&row)
                    .iter()
                    .map(|cell| cell.as_string().unwrap_or_default())
                    .collect()
            })
            .collect();

        let outcomes = grid::annotate_table_with(&self.config, &headers, &rows)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let annotated = js_sys::Array::new();
        for outcome in outcomes {
            match outcome {
                RowAnnotation::Annotated(a) => {
                    annotated.push(&JsValue::from_str(&a.markup_safe()));
                }
                RowAnnotation::Skipped { .. } => {
                    annotated.push(&JsValue::UNDEFINED);
                }
            }
        }
        Ok(annotated)
    }

    /// Resolve the pack size, total price and description column indices.
    /// headers_json: JSON array of {"field": ..., "text": ...}
    #[wasm_bindgen]
    pub fn resolve_layout(&self, headers_json: &str) -> Result<String, JsValue> {
        let headers: Vec<HeaderCell> = serde_json::from_str(headers_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse headers JSON: {}", e)))?;

        let layout = GridLayout::from_headers(&headers)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&layout)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize layout: {}", e)))
    }
}
