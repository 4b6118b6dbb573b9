//! Move, add and remove as copy-on-write operations on an [`Itinerary`].
//!
//! Every operation validates its indices first and then builds the next
//! snapshot, so a rejected operation leaves nothing half-applied and the
//! previous snapshot is never touched.

use serde::{Deserialize, Serialize};

use super::{day::SpotEntry, Itinerary, ItineraryDay};
use crate::error::{PlannerError, Result};

/// A single edit applied to an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReorderOp {
    /// Move the entry at `source_index` of `source_day` to `dest_index` of
    /// `dest_day`.
    Move {
        source_index: usize,
        source_day: u32,
        dest_day: u32,
        dest_index: usize,
    },
    /// Append a spot to a day; details arrive through the resolver.
    Add { day: u32, spot_id: u64 },
    /// Delete the entry at `index` of `day`.
    Remove { day: u32, index: usize },
}

impl Itinerary {
    /// Applies `op` and returns the resulting snapshot.
    pub fn apply(&self, op: &ReorderOp) -> Result<Itinerary> {
        match *op {
            ReorderOp::Move {
                source_index,
                source_day,
                dest_day,
                dest_index,
            } => self.move_spot(source_index, source_day, dest_day, dest_index),
            ReorderOp::Add { day, spot_id } => self.add_spot(day, spot_id),
            ReorderOp::Remove { day, index } => self.remove_spot(day, index),
        }
    }

    /// Moves one entry within a day or across days.
    ///
    /// Within a day, `dest_index` addresses the list after the entry has been
    /// taken out, so it must be smaller than the day's length. Across days it
    /// may equal the destination length to append.
    pub fn move_spot(
        &self,
        source_index: usize,
        source_day: u32,
        dest_day: u32,
        dest_index: usize,
    ) -> Result<Itinerary> {
        let source_len = self.require_day(source_day)?.len();
        check_index("source_index", source_index, source_len, source_day)?;

        let mut next = self.clone();

        if source_day == dest_day {
            check_index("dest_index", dest_index, source_len, dest_day)?;
            if source_index == dest_index {
                return Ok(next);
            }
            let entries = next.require_day_mut(source_day)?.entries_mut();
            let entry = entries.remove(source_index);
            entries.insert(dest_index, entry);
            return Ok(next);
        }

        let dest_len = self.require_day(dest_day)?.len();
        check_index("dest_index", dest_index, dest_len + 1, dest_day)?;

        let removed = next
            .require_day_mut(source_day)?
            .entries_mut()
            .remove(source_index);

        // The id is authoritative; a detail only travels with it when it
        // describes that same spot.
        let id = removed.id;
        let moved = SpotEntry {
            id,
            detail: removed.detail.filter(|detail| detail.id == id),
        };
        next.require_day_mut(dest_day)?
            .entries_mut()
            .insert(dest_index, moved);

        Ok(next)
    }

    /// Appends an unresolved entry for `spot_id` to `day`.
    pub fn add_spot(&self, day: u32, spot_id: u64) -> Result<Itinerary> {
        self.require_day(day)?;
        let mut next = self.clone();
        next.require_day_mut(day)?
            .entries_mut()
            .push(SpotEntry::unresolved(spot_id));
        Ok(next)
    }

    /// Removes the entry at `index` of `day`.
    pub fn remove_spot(&self, day: u32, index: usize) -> Result<Itinerary> {
        let len = self.require_day(day)?.len();
        check_index("index", index, len, day)?;
        let mut next = self.clone();
        next.require_day_mut(day)?.entries_mut().remove(index);
        Ok(next)
    }

    fn require_day(&self, day: u32) -> Result<&ItineraryDay> {
        self.day(day).ok_or_else(|| self.missing_day(day))
    }

    fn require_day_mut(&mut self, day: u32) -> Result<&mut ItineraryDay> {
        let error = self.missing_day(day);
        self.day_mut(day).ok_or(error)
    }

    fn missing_day(&self, day: u32) -> PlannerError {
        PlannerError::invalid_input("day").with_reason(format!(
            "Day {day} is out of range. Course has {} days",
            self.day_count()
        ))
    }
}

fn check_index(field: &str, index: usize, bound: usize, day: u32) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(PlannerError::invalid_input(field).with_reason(format!(
            "Index {index} is out of range for day {day} (limit {bound})"
        )))
    }
}
