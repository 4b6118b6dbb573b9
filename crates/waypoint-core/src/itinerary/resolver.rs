//! Concurrent per-day spot resolution.
//!
//! [`SpotResolver::dispatch`] starts one lookup per day and returns a
//! [`ResolveBatch`] that yields each day's [`FetchOutcome`] as soon as it
//! completes. The caller commits outcomes one at a time with
//! [`Itinerary::apply_fetch`], which discards anything that no longer matches
//! the itinerary it was requested for.

use std::{collections::HashSet, sync::Arc};

use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, StreamExt},
    FutureExt,
};
use log::{debug, warn};

use super::{EpochCounter, Itinerary};
use crate::{backend::CourseBackend, error::FetchError, models::SpotDetail};

/// Reorders a lookup response to follow the requested ids.
///
/// Requested ids come first in requested order, skipping ids the lookup did
/// not return. An id requested more than once gets a copy of its record at
/// every position. Records that were not requested follow in returned order.
/// A record returned more than once keeps its first occurrence.
pub fn order_resolved(requested: &[u64], returned: Vec<SpotDetail>) -> Vec<SpotDetail> {
    let mut seen = HashSet::with_capacity(returned.len());
    let unique: Vec<SpotDetail> = returned
        .into_iter()
        .filter(|spot| seen.insert(spot.id))
        .collect();

    let mut ordered: Vec<SpotDetail> = requested
        .iter()
        .filter_map(|id| unique.iter().find(|spot| spot.id == *id).cloned())
        .collect();

    let wanted: HashSet<u64> = requested.iter().copied().collect();
    ordered.extend(unique.into_iter().filter(|spot| !wanted.contains(&spot.id)));
    ordered
}

/// Result of resolving one day.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub day: u32,
    /// Epoch captured at dispatch
    pub epoch: u64,
    /// Day's store ids at dispatch
    pub requested: Vec<u64>,
    pub result: Result<Vec<SpotDetail>, FetchError>,
}

/// What committing a [`FetchOutcome`] did to the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStatus {
    /// Details were committed
    Applied,
    /// The day was marked failed
    Failed,
    /// The outcome was discarded
    Stale,
}

/// In-flight lookups for a set of days.
pub struct ResolveBatch {
    pending: FuturesUnordered<BoxFuture<'static, FetchOutcome>>,
}

impl ResolveBatch {
    /// Waits for the next day to finish, in completion order.
    pub async fn next(&mut self) -> Option<FetchOutcome> {
        self.pending.next().await
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl std::fmt::Debug for ResolveBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveBatch")
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Dispatches per-day spot lookups against a [`CourseBackend`].
pub struct SpotResolver<B: CourseBackend + ?Sized + 'static> {
    backend: Arc<B>,
    epoch: EpochCounter,
}

impl<B: CourseBackend + ?Sized + 'static> Clone for SpotResolver<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            epoch: self.epoch.clone(),
        }
    }
}

impl<B: CourseBackend + ?Sized + 'static> SpotResolver<B> {
    pub fn new(backend: Arc<B>, epoch: EpochCounter) -> Self {
        Self { backend, epoch }
    }

    /// Starts one lookup per day of `itinerary`.
    ///
    /// Each lookup captures the current epoch and the day's store ids. Empty
    /// days complete immediately without reaching the backend.
    pub fn dispatch(&self, itinerary: &Itinerary) -> ResolveBatch {
        let epoch = self.epoch.current();
        let pending = FuturesUnordered::new();

        for day in itinerary.days() {
            let number = day.day();
            let requested = day.spot_ids();
            let backend = Arc::clone(&self.backend);

            debug!(
                "Dispatching day {number} with {} spots at epoch {epoch}",
                requested.len()
            );

            let fetch = async move {
                let result = if requested.is_empty() {
                    Ok(Vec::new())
                } else {
                    backend
                        .lookup_spots(&requested)
                        .await
                        .map_err(|e| FetchError {
                            day: number,
                            message: e.to_string(),
                        })
                };
                FetchOutcome {
                    day: number,
                    epoch,
                    requested,
                    result,
                }
            };
            pending.push(fetch.boxed());
        }

        ResolveBatch { pending }
    }
}

impl Itinerary {
    /// Commits one day's lookup result.
    ///
    /// The outcome is discarded as stale when `current_epoch` moved on since
    /// dispatch, or when the day's store ids no longer equal the requested
    /// ids. A successful lookup rebuilds the day in resolved order; a failed
    /// one keeps the ids and clears every detail of the day.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome, current_epoch: u64) -> ApplyStatus {
        let FetchOutcome {
            day,
            epoch,
            requested,
            result,
        } = outcome;

        if epoch != current_epoch {
            debug!("Discarding day {day} lookup from epoch {epoch} (current {current_epoch})");
            return ApplyStatus::Stale;
        }
        let unchanged = self
            .day(day)
            .is_some_and(|current| current.spot_ids() == requested);
        if !unchanged {
            debug!("Discarding day {day} lookup: spots changed since dispatch");
            return ApplyStatus::Stale;
        }
        let Some(target) = self.day_mut(day) else {
            return ApplyStatus::Stale;
        };

        match result {
            Ok(returned) => {
                let resolved = order_resolved(&requested, returned);
                if resolved.len() != requested.len() {
                    debug!(
                        "Day {day} resolved {} spots for {} requested ids",
                        resolved.len(),
                        requested.len()
                    );
                }
                target.replace_resolved(resolved);
                ApplyStatus::Applied
            }
            Err(error) => {
                warn!("{error}");
                target.mark_failed(error.message);
                ApplyStatus::Failed
            }
        }
    }
}
