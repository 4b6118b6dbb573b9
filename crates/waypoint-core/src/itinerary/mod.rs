//! Multi-day itinerary editing.
//!
//! This module holds the editor core: the per-day spot lists, the operations
//! that rearrange them, the resolver that fills in spot details, and the
//! session that turns an edited arrangement into a persisted schedule.
//!
//! ```text
//! ┌──────────────┐  ids   ┌──────────────┐ outcome ┌──────────────┐
//! │  Itinerary   │───────▶│ SpotResolver │────────▶│  Itinerary   │
//! │  (snapshot)  │        │  (per day)   │  epoch  │ apply_fetch  │
//! └──────────────┘        └──────────────┘  check  └──────────────┘
//!        │ move / add / remove                            │
//!        ▼                                                ▼
//! ┌──────────────┐        ┌──────────────┐         ┌──────────────┐
//! │  new snapshot│───────▶│   Schedule   │────────▶│ EditorSession│
//! │ (copy-on-    │        │ (classifier) │ payload │    save()    │
//! │   write)     │        └──────────────┘         └──────────────┘
//! └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`day`]: one day's entries and load state
//! - [`reorder`]: move, add and remove as copy-on-write operations
//! - [`epoch`]: process-wide version counter
//! - [`resolver`]: concurrent per-day spot resolution
//! - [`classifier`]: category to slot type mapping
//! - [`schedule`]: itinerary to day×slot schedule serialization
//! - [`session`]: edit-mode state machine and save coordination
//! - [`handoff`]: events exchanged with the spot search screen
//!
//! An [`Itinerary`] is an immutable snapshot. Days are shared behind [`Arc`],
//! so producing the next snapshot clones only the days an operation touches.

use std::sync::Arc;

use crate::models::Course;

pub mod classifier;
pub mod day;
pub mod epoch;
pub mod handoff;
pub mod reorder;
pub mod resolver;
pub mod schedule;
pub mod session;

pub use classifier::classify;
pub use day::{DayState, ItineraryDay, SpotEntry};
pub use epoch::EpochCounter;
pub use handoff::{Draft, SearchHandoff, SpotAdded};
pub use reorder::ReorderOp;
pub use resolver::{order_resolved, ApplyStatus, FetchOutcome, ResolveBatch, SpotResolver};
pub use schedule::Schedule;
pub use session::{EditorSession, ResolveReport, SaveOutcome};

/// Ordered days of a course, each holding ordered spot entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    days: Vec<Arc<ItineraryDay>>,
}

impl Itinerary {
    /// Builds an itinerary from spot ids per day; day numbers start at 1.
    pub fn from_day_ids(day_ids: Vec<Vec<u64>>) -> Self {
        let days = day_ids
            .into_iter()
            .zip(1u32..)
            .map(|(ids, day)| Arc::new(ItineraryDay::new(day, ids)))
            .collect();
        Self { days }
    }

    /// Builds an unresolved itinerary from a course's persisted schedule.
    pub fn from_course(course: &Course) -> Self {
        Self::from_day_ids(course.day_spot_ids())
    }

    pub fn days(&self) -> impl Iterator<Item = &ItineraryDay> {
        self.days.iter().map(Arc::as_ref)
    }

    /// Day by 1-based number.
    pub fn day(&self, day: u32) -> Option<&ItineraryDay> {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
            .map(Arc::as_ref)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Store view of every day.
    pub fn store(&self) -> Vec<Vec<u64>> {
        self.days().map(ItineraryDay::spot_ids).collect()
    }

    pub fn total_spots(&self) -> usize {
        self.days().map(ItineraryDay::len).sum()
    }

    /// Entries across all days that have no resolved details.
    pub fn unresolved_count(&self) -> usize {
        self.days().map(ItineraryDay::unresolved_count).sum()
    }

    /// Whether every entry of every day has its details.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved_count() == 0
    }

    #[cfg(test)]
    fn day_arc(&self, day: u32) -> Option<&Arc<ItineraryDay>> {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
    }

    pub(crate) fn day_mut(&mut self, day: u32) -> Option<&mut ItineraryDay> {
        day.checked_sub(1)
            .and_then(|index| self.days.get_mut(index as usize))
            .map(Arc::make_mut)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{CourseSlot, SlotType};

    #[test]
    fn test_from_day_ids_numbers_days_from_one() {
        let itinerary = Itinerary::from_day_ids(vec![vec![1, 2], vec![], vec![3]]);
        let numbers: Vec<u32> = itinerary.days().map(ItineraryDay::day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(itinerary.total_spots(), 3);
        assert!(itinerary.day(0).is_none());
        assert!(itinerary.day(4).is_none());
        assert_eq!(itinerary.day(3).map(ItineraryDay::spot_ids), Some(vec![3]));
    }

    #[test]
    fn test_from_course_orders_by_slot_and_pads_days() {
        let course = Course {
            id: 1,
            title: "Busan".to_string(),
            days: 3,
            region_code: "BUSAN".to_string(),
            total_distance: 0.0,
            course_slots: vec![vec![
                CourseSlot::selected(1, 2, SlotType::Cafe, None, "Second", 20),
                CourseSlot::selected(1, 1, SlotType::Tourism, None, "First", 10),
            ]],
            selected_categories: vec![],
            is_public: false,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };

        let itinerary = Itinerary::from_course(&course);
        assert_eq!(itinerary.store(), vec![vec![10, 20], vec![], vec![]]);
    }

    #[test]
    fn test_snapshots_share_untouched_days() {
        let itinerary = Itinerary::from_day_ids(vec![vec![1], vec![2]]);
        let mut next = itinerary.clone();
        if let Some(day) = next.day_mut(1) {
            day.entries_mut().clear();
        }

        assert_eq!(itinerary.store(), vec![vec![1], vec![2]]);
        assert_eq!(next.store(), vec![vec![], vec![2]]);
        assert!(Arc::ptr_eq(
            itinerary.day_arc(2).unwrap(),
            next.day_arc(2).unwrap()
        ));
    }
}
