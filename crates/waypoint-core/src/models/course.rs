//! Course model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::CourseSlot;

/// A multi-day travel course as returned by a course read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier for the course
    pub id: u64,

    /// Title of the course
    pub title: String,

    /// Number of days the course spans
    pub days: u32,

    /// Region the course belongs to (e.g. `SEOUL`)
    pub region_code: String,

    /// Total travel distance in kilometres
    pub total_distance: f64,

    /// Persisted schedule, one inner list per day
    #[serde(default)]
    pub course_slots: Vec<Vec<CourseSlot>>,

    /// Lower-cased categories present in the schedule
    #[serde(default)]
    pub selected_categories: Vec<String>,

    /// Whether the course is visible to other users
    #[serde(default)]
    pub is_public: bool,

    /// Timestamp when the course was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the course was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Course {
    /// Number of days to lay out, never less than the persisted schedule.
    pub fn day_count(&self) -> usize {
        (self.days as usize).max(self.course_slots.len())
    }

    /// Selected spot ids per day, in slot order.
    ///
    /// Slots are grouped by their `day` field rather than by their position
    /// in `course_slots`, and slots without a selected spot are skipped.
    pub fn day_spot_ids(&self) -> Vec<Vec<u64>> {
        let mut days: Vec<Vec<&CourseSlot>> = vec![Vec::new(); self.day_count()];
        for slot in self.course_slots.iter().flatten() {
            let index = slot.day.saturating_sub(1) as usize;
            if let Some(day) = days.get_mut(index) {
                day.push(slot);
            }
        }

        days.into_iter()
            .map(|mut slots| {
                slots.sort_by_key(|slot| slot.slot);
                slots
                    .into_iter()
                    .filter_map(|slot| slot.selected_spot_id)
                    .collect()
            })
            .collect()
    }

    /// Total number of scheduled spots across all days.
    pub fn scheduled_spots(&self) -> usize {
        self.course_slots
            .iter()
            .flatten()
            .filter(|slot| slot.selected_spot_id.is_some())
            .count()
    }
}
