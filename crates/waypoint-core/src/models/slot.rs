//! Persisted schedule slot and its classified type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of slot types a scheduled spot can be classified into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotType {
    Restaurant,
    Cafe,
    Accommodation,
    /// Sightseeing and everything that is not food, coffee or lodging
    #[default]
    Tourism,
}

impl SlotType {
    /// Wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Restaurant => "RESTAURANT",
            SlotType::Cafe => "CAFE",
            SlotType::Accommodation => "ACCOMMODATION",
            SlotType::Tourism => "TOURISM",
        }
    }
}

impl FromStr for SlotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESTAURANT" => Ok(SlotType::Restaurant),
            "CAFE" => Ok(SlotType::Cafe),
            "ACCOMMODATION" => Ok(SlotType::Accommodation),
            "TOURISM" => Ok(SlotType::Tourism),
            _ => Err(format!("Invalid slot type: {s}")),
        }
    }
}

/// One scheduled position within a day of a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSlot {
    /// Day number (1-based)
    pub day: u32,

    /// Position within the day (1-based, contiguous)
    pub slot: u32,

    /// Classified slot type
    pub slot_type: SlotType,

    /// Raw category of the selected spot
    pub main_category: Option<String>,

    /// Name shown for the slot
    pub slot_name: String,

    /// Alternative spots suggested for this slot
    #[serde(default)]
    pub recommended_spot_ids: Vec<u64>,

    /// The spot chosen for this slot
    pub selected_spot_id: Option<u64>,

    /// Whether the slot continues from the previous one
    pub is_continue: Option<bool>,

    /// Placeholder slot without a spot
    pub empty: bool,

    pub has_recommendations: bool,

    pub has_selected_spot: bool,
}

impl CourseSlot {
    /// Builds a slot for a directly selected spot with no recommendations.
    pub fn selected(
        day: u32,
        slot: u32,
        slot_type: SlotType,
        main_category: Option<String>,
        slot_name: impl Into<String>,
        spot_id: u64,
    ) -> Self {
        Self {
            day,
            slot,
            slot_type,
            main_category,
            slot_name: slot_name.into(),
            recommended_spot_ids: Vec::new(),
            selected_spot_id: Some(spot_id),
            is_continue: None,
            empty: false,
            has_recommendations: false,
            has_selected_spot: true,
        }
    }
}
