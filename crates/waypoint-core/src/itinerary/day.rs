//! A single day of an itinerary.

use crate::models::SpotDetail;

/// One scheduled spot: its identity plus the resolved record, once known.
///
/// The id is authoritative. `detail` is filled in by the spot resolver and
/// always describes the same spot as `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotEntry {
    pub id: u64,
    pub detail: Option<SpotDetail>,
}

impl SpotEntry {
    /// Entry whose detail has not been resolved yet.
    pub fn unresolved(id: u64) -> Self {
        Self { id, detail: None }
    }

    /// Entry for an already resolved spot.
    pub fn resolved(detail: SpotDetail) -> Self {
        Self {
            id: detail.id,
            detail: Some(detail),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.detail.is_some()
    }
}

/// Resolution state of a day's spot details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayState {
    /// Details have not been fetched for the current ids
    Pending,
    /// The last fetch succeeded
    Loaded,
    /// The last fetch failed; no details are shown for this day
    Failed(String),
}

/// Ordered spots of one day.
///
/// The store view ([`ItineraryDay::spot_ids`]) and the display view
/// ([`ItineraryDay::spots`]) are projections of the same entry list, so they
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDay {
    day: u32,
    entries: Vec<SpotEntry>,
    state: DayState,
}

impl ItineraryDay {
    /// Creates a day with unresolved entries for `ids`.
    pub fn new(day: u32, ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            day,
            entries: ids.into_iter().map(SpotEntry::unresolved).collect(),
            state: DayState::Pending,
        }
    }

    /// Day number (1-based).
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn entries(&self) -> &[SpotEntry] {
        &self.entries
    }

    pub fn state(&self) -> &DayState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store view: ordered spot ids.
    pub fn spot_ids(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Display view: resolved spot details in order.
    pub fn spots(&self) -> impl Iterator<Item = &SpotDetail> {
        self.entries.iter().filter_map(|entry| entry.detail.as_ref())
    }

    /// Number of entries still waiting for their details.
    pub fn unresolved_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_resolved()).count()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<SpotEntry> {
        &mut self.entries
    }

    /// Replaces all entries with resolved details in the given order.
    pub(crate) fn replace_resolved(&mut self, spots: Vec<SpotDetail>) {
        self.entries = spots.into_iter().map(SpotEntry::resolved).collect();
        self.state = DayState::Loaded;
    }

    /// Clears all details, keeping ids, and records the failure.
    pub(crate) fn mark_failed(&mut self, message: String) {
        for entry in &mut self.entries {
            entry.detail = None;
        }
        self.state = DayState::Failed(message);
    }
}
