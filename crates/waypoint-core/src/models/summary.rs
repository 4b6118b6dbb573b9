//! Course summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Course;

/// Compact course information used by list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// Course ID
    pub id: u64,
    /// Title of the course
    pub title: String,
    /// Region code
    pub region_code: String,
    /// Number of days
    pub days: u32,
    /// Number of scheduled spots across all days
    pub total_spots: u32,
    /// Visibility flag
    pub is_public: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            region_code: course.region_code.clone(),
            days: course.days,
            total_spots: course.scheduled_spots() as u32,
            is_public: course.is_public,
            created_at: course.created_at,
        }
    }
}
