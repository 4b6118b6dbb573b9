//! Parameter structures for Waypoint operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these with their own
//! derives (clap `Args`, transparent serde wrappers for MCP) and convert into
//! them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, PlannerError};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_course, show_itinerary, save_itinerary, discard_itinerary
/// and friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateCourse {
    /// Title of the course (required)
    pub title: String,
    /// Region code, e.g. `SEOUL` or `BUSAN`
    pub region_code: String,
    /// Number of days the course spans (at least 1)
    pub days: u32,
    /// Total travel distance in kilometres
    #[serde(default)]
    pub total_distance: f64,
    /// Whether other users can see the course
    #[serde(default)]
    pub is_public: bool,
}

impl CreateCourse {
    /// Checks the title and day count.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        if self.days == 0 {
            return Err(
                PlannerError::invalid_input("days").with_reason("A course needs at least one day")
            );
        }
        if self.total_distance < 0.0 || !self.total_distance.is_finite() {
            return Err(PlannerError::invalid_input("total_distance")
                .with_reason("Distance must be a non-negative number"));
        }
        Ok(())
    }
}

/// Parameters for deleting a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteCourse {
    /// ID of the course to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a spot to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateSpot {
    /// Display name of the spot (required)
    pub name: String,
    /// Free-text category, e.g. `CAFE_SMALL` or `restaurant`
    pub category: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Image URLs or storage keys
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Average rating between 0 and 5
    pub rating: Option<f64>,
}

impl CreateSpot {
    /// Checks the name and rating range.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid_input("name").with_reason("Name cannot be empty"));
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(PlannerError::invalid_input("rating")
                    .with_reason(format!("Rating {rating} is outside 0 to 5")));
            }
        }
        Ok(())
    }
}

/// Parameters for moving a spot within or across days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveSpot {
    /// ID of the course being edited
    pub course_id: u64,
    /// Day the spot is taken from (1-based)
    pub source_day: u32,
    /// Position within the source day (0-based)
    pub source_index: usize,
    /// Day the spot is moved to (1-based)
    pub dest_day: u32,
    /// Position within the destination day (0-based)
    pub dest_index: usize,
}

/// Parameters for appending a spot to a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddSpot {
    /// ID of the course being edited
    pub course_id: u64,
    /// Day to append to (1-based)
    pub day: u32,
    /// ID of the spot to add
    pub spot_id: u64,
}

/// Parameters for removing a spot from a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RemoveSpot {
    /// ID of the course being edited
    pub course_id: u64,
    /// Day to remove from (1-based)
    pub day: u32,
    /// Position within the day (0-based)
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_validate() {
        let mut params = CreateCourse {
            title: "Jeju".to_string(),
            region_code: "JEJU".to_string(),
            days: 2,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        params.days = 0;
        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "days"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }

        params.days = 1;
        params.title = "   ".to_string();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_create_spot_validate_rating() {
        let mut params = CreateSpot {
            name: "Gamcheon Village".to_string(),
            rating: Some(4.5),
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        params.rating = Some(7.0);
        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "rating");
                assert!(reason.contains("outside"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_course_defaults_to_unconfirmed() {
        let params: DeleteCourse = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(params.id, 3);
        assert!(!params.confirmed);
    }
}
