use crate::grid::annotate::GridRow;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rows of a product grid saved as TOML, one `[[row]]` table per row
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GridSnapshot {
    #[serde(rename = "row", default)]
    pub rows: Vec<GridRow>,
}

impl GridSnapshot {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(format!("Grid file does not exist: {}", path.display()).into());
        }
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let snapshot: GridSnapshot = toml::from_str(content)?;
        Ok(snapshot)
    }
}
