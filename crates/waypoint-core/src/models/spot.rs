//! Spot model definition.

use serde::{Deserialize, Serialize};

/// A point of interest with its descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetail {
    /// Unique identifier for the spot
    pub id: u64,

    /// Display name of the spot
    pub name: String,

    /// Free-text category as reported by the backend (e.g. `CAFE_SMALL`)
    pub category: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// Image references (URLs or storage keys)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,

    /// Average rating, when the backend has one
    pub rating: Option<f64>,
}

impl SpotDetail {
    /// Category with surrounding whitespace removed, or `None` when blank.
    pub fn main_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
