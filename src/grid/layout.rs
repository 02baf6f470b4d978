use crate::grid::annotate::GridRow;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    /// Header text of the total price column, e.g. "Total Price" or "Total<br>Price"
    static ref TOTAL_PRICE_HEADER: Regex = Regex::new(r"Total(.*)Price").unwrap();
}

const PACK_SIZE_FIELD: &str = "PackSize";
const DESCRIPTION_FIELD: &str = "ProductName";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid has no {column} column")]
    MissingColumn { column: &'static str },
}

/// A column header: its `data-field` attribute and its text
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeaderCell {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl HeaderCell {
    pub fn new(field: Option<&str>, text: &str) -> Self {
        Self {
            field: field.map(str::to_string),
            text: text.to_string(),
        }
    }

    fn has_field(&self, name: &str) -> bool {
        self.field.as_deref() == Some(name)
    }
}

/// Column indices of the cells a row annotation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub pack_size: usize,
    pub total_price: usize,
    pub description: usize,
}

impl GridLayout {
    pub fn from_headers(headers: &[HeaderCell]) -> Result<Self, GridError> {
        let pack_size = headers
            .iter()
            .position(|h| h.has_field(PACK_SIZE_FIELD))
            .ok_or(GridError::MissingColumn {
                column: "pack size",
            })?;

        let total_price = headers
            .iter()
            .position(|h| TOTAL_PRICE_HEADER.is_match(&h.text))
            .ok_or(GridError::MissingColumn {
                column: "total price",
            })?;

        let description = headers
            .iter()
            .position(|h| h.has_field(DESCRIPTION_FIELD))
            .ok_or(GridError::MissingColumn {
                column: "product description",
            })?;

        Ok(Self {
            pack_size,
            total_price,
            description,
        })
    }

    /// Pick the row's cells by column. Missing cells read as empty text.
    pub fn row_from_cells<S: AsRef<str>>(&self, cells: &[S]) -> GridRow {
        let cell = |index: usize| {
            cells
                .get(index)
                .map(|c| c.as_ref().trim().to_string())
                .unwrap_or_default()
        };

        GridRow {
            pack_size: cell(self.pack_size),
            total_price: cell(self.total_price),
            description: Some(cell(self.description)),
        }
    }
}
