//! Course update payload and response.

use serde::{Deserialize, Serialize};

use super::{Course, CourseSlot};

/// Body of a course update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub total_distance: f64,
    pub region_code: String,
    pub course_slots: Vec<Vec<CourseSlot>>,
    pub selected_categories: Vec<String>,
}

/// Response of a course update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Course>,
}

impl CourseUpdateResponse {
    /// Successful response carrying the stored course.
    pub fn ok(course: Course) -> Self {
        Self {
            success: true,
            data: Some(course),
        }
    }

    /// Response reporting that the backend did not apply the update.
    pub fn rejected() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}
