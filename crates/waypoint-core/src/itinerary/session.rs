//! Edit-mode state machine and save coordination for one course.

use std::sync::Arc;

use log::{debug, info, warn};

use super::{
    ApplyStatus, Draft, EpochCounter, FetchOutcome, Itinerary, ReorderOp, ResolveBatch, Schedule,
    SearchHandoff, SpotAdded, SpotResolver,
};
use crate::{
    backend::CourseBackend,
    error::{PlannerError, Result, SaveError},
    models::{Course, CourseUpdate, EditMode},
};

/// Counts of what a full resolution pass committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub applied: usize,
    pub failed: usize,
    pub stale: usize,
}

impl ResolveReport {
    fn record(&mut self, status: ApplyStatus) {
        match status {
            ApplyStatus::Applied => self.applied += 1,
            ApplyStatus::Failed => self.failed += 1,
            ApplyStatus::Stale => self.stale += 1,
        }
    }
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The schedule was persisted and the session is back to viewing
    Saved,
    /// Nothing was persisted; the session is still editing and can retry
    Failed(SaveError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// One course being viewed or edited.
pub struct EditorSession<B: CourseBackend + ?Sized + 'static> {
    backend: Arc<B>,
    resolver: SpotResolver<B>,
    epoch: EpochCounter,
    course: Course,
    itinerary: Itinerary,
    checkpoint: Option<Itinerary>,
    mode: EditMode,
    draft: Draft,
    last_error: Option<SaveError>,
}

impl<B: CourseBackend + ?Sized + 'static> EditorSession<B> {
    /// Reads `course_id` from the backend and opens it for viewing.
    ///
    /// Spot details are not resolved yet; call [`EditorSession::resolve`].
    pub async fn open(backend: Arc<B>, epoch: EpochCounter, course_id: u64) -> Result<Self> {
        let course = backend.fetch_course(course_id).await?;
        info!(
            "Opened course {course_id} with {} scheduled spots",
            course.scheduled_spots()
        );
        Ok(Self::from_course(backend, epoch, course))
    }

    /// Opens an already loaded course for viewing.
    pub fn from_course(backend: Arc<B>, epoch: EpochCounter, course: Course) -> Self {
        let itinerary = Itinerary::from_course(&course);
        Self {
            resolver: SpotResolver::new(Arc::clone(&backend), epoch.clone()),
            backend,
            epoch,
            course,
            itinerary,
            checkpoint: None,
            mode: EditMode::Viewing,
            draft: Draft::default(),
            last_error: None,
        }
    }

    /// Rebuilds an editing session from a search hand-off.
    ///
    /// The hand-off's spot ids replace the course's persisted schedule and
    /// its draft is restored. Discarding returns to the persisted schedule.
    pub fn resume(
        backend: Arc<B>,
        epoch: EpochCounter,
        course: Course,
        handoff: SearchHandoff,
    ) -> Result<Self> {
        if handoff.course_id != course.id {
            return Err(PlannerError::invalid_input("course_id").with_reason(format!(
                "Hand-off is for course {} but course {} was loaded",
                handoff.course_id, course.id
            )));
        }

        let mut day_ids = handoff.selected_spots;
        if day_ids.len() < course.day_count() {
            day_ids.resize(course.day_count(), Vec::new());
        }

        let mut session = Self::from_course(backend, epoch, course);
        session.checkpoint = Some(std::mem::replace(
            &mut session.itinerary,
            Itinerary::from_day_ids(day_ids),
        ));
        session.draft = handoff.draft;
        session.mode = EditMode::Editing;
        debug!(
            "Resumed course {} for day {}",
            session.course.id, handoff.target_day
        );
        Ok(session)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Error of the most recent failed save, cleared by a successful one.
    pub fn last_error(&self) -> Option<&SaveError> {
        self.last_error.as_ref()
    }

    pub fn epoch(&self) -> &EpochCounter {
        &self.epoch
    }

    /// Starts resolving every day of the current itinerary.
    ///
    /// Outcomes must be passed back through [`EditorSession::commit`]; the
    /// session keeps accepting edits while they are in flight.
    pub fn begin_resolve(&self) -> ResolveBatch {
        self.resolver.dispatch(&self.itinerary)
    }

    /// Commits one resolved day, discarding it if it is stale.
    pub fn commit(&mut self, outcome: FetchOutcome) -> ApplyStatus {
        self.itinerary.apply_fetch(outcome, self.epoch.current())
    }

    /// Resolves every day and commits each result as it arrives.
    pub async fn resolve(&mut self) -> ResolveReport {
        let mut batch = self.begin_resolve();
        let mut report = ResolveReport::default();
        while let Some(outcome) = batch.next().await {
            report.record(self.commit(outcome));
        }
        debug!(
            "Resolved course {}: {} applied, {} failed, {} stale",
            self.course.id, report.applied, report.failed, report.stale
        );
        report
    }

    /// Switches from viewing to editing and remembers the current itinerary.
    pub fn enter_edit(&mut self) -> Result<()> {
        if self.mode != EditMode::Viewing {
            return Err(PlannerError::invalid_state(format!(
                "Cannot start editing while {}",
                self.mode.as_str()
            )));
        }
        self.checkpoint = Some(self.itinerary.clone());
        self.mode = EditMode::Editing;
        info!("Editing course {}", self.course.id);
        Ok(())
    }

    /// Applies one edit to the itinerary.
    ///
    /// Adding a spot advances the epoch so that lookups dispatched before the
    /// add are discarded and the next resolution picks up the new spot.
    pub fn apply(&mut self, op: &ReorderOp) -> Result<()> {
        self.require_editing()?;
        self.itinerary = self.itinerary.apply(op)?;
        if matches!(op, ReorderOp::Add { .. }) {
            let epoch = self.epoch.bump();
            debug!("Epoch advanced to {epoch} after {op:?}");
        } else {
            debug!("Applied {op:?}");
        }
        Ok(())
    }

    pub fn move_spot(
        &mut self,
        source_index: usize,
        source_day: u32,
        dest_day: u32,
        dest_index: usize,
    ) -> Result<()> {
        self.apply(&ReorderOp::Move {
            source_index,
            source_day,
            dest_day,
            dest_index,
        })
    }

    pub fn add_spot(&mut self, day: u32, spot_id: u64) -> Result<()> {
        self.apply(&ReorderOp::Add { day, spot_id })
    }

    pub fn remove_spot(&mut self, day: u32, index: usize) -> Result<()> {
        self.apply(&ReorderOp::Remove { day, index })
    }

    /// Merges a spot chosen on the search screen.
    pub fn accept_spot_added(&mut self, event: SpotAdded) -> Result<()> {
        self.add_spot(event.day, event.spot_id)
    }

    /// Captures everything the search screen needs to hand the session back.
    pub fn go_to_search(&self, day: u32) -> Result<SearchHandoff> {
        self.require_editing()?;
        if self.itinerary.day(day).is_none() {
            return Err(PlannerError::invalid_input("day").with_reason(format!(
                "Day {day} is out of range. Course has {} days",
                self.itinerary.day_count()
            )));
        }
        Ok(SearchHandoff {
            course_id: self.course.id,
            target_day: day,
            draft: self.draft.clone(),
            selected_spots: self.itinerary.store(),
            epoch: self.epoch.current(),
        })
    }

    /// Builds the update payload from the current itinerary.
    pub fn build_update(&self) -> CourseUpdate {
        let schedule = Schedule::from_itinerary(&self.itinerary);
        CourseUpdate {
            total_distance: self.course.total_distance,
            region_code: self.course.region_code.clone(),
            course_slots: schedule.course_slots,
            selected_categories: schedule.selected_categories,
        }
    }

    /// Persists the edited schedule.
    ///
    /// Returns an error only when the session is not editing. Every other
    /// failure is reported as [`SaveOutcome::Failed`], leaving the session in
    /// editing mode with the itinerary unchanged.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        self.require_editing()?;

        let unresolved = self.itinerary.unresolved_count();
        if unresolved > 0 {
            return Ok(self.fail_save(format!(
                "{unresolved} spots have no resolved details; resolve the itinerary and retry"
            )));
        }

        self.mode = EditMode::Saving;
        let update = self.build_update();
        debug!(
            "Saving course {} with {} days",
            self.course.id,
            update.course_slots.len()
        );

        let response = self.backend.update_course(self.course.id, &update).await;
        match response {
            Ok(response) if response.success => {
                match response.data {
                    Some(course) => self.course = course,
                    None => {
                        self.course.course_slots = update.course_slots;
                        self.course.selected_categories = update.selected_categories;
                    }
                }
                self.mode = EditMode::Viewing;
                self.checkpoint = None;
                self.last_error = None;
                info!("Saved course {}", self.course.id);
                Ok(SaveOutcome::Saved)
            }
            Ok(_) => Ok(self.fail_save("update was rejected by the backend".to_string())),
            Err(e) => Ok(self.fail_save(e.to_string())),
        }
    }

    /// Leaves editing and restores the itinerary from before editing began.
    ///
    /// Also accepted while saving, so a session whose save was cancelled
    /// mid-flight can still be closed.
    pub fn discard(&mut self) -> Result<()> {
        if self.mode == EditMode::Saving {
            warn!("Discarding course {} with a save in progress", self.course.id);
        } else {
            self.require_editing()?;
        }
        if let Some(checkpoint) = self.checkpoint.take() {
            self.itinerary = checkpoint;
        }
        self.mode = EditMode::Viewing;
        self.epoch.bump();
        info!("Discarded edits to course {}", self.course.id);
        Ok(())
    }

    fn require_editing(&self) -> Result<()> {
        if self.mode == EditMode::Editing {
            Ok(())
        } else {
            Err(PlannerError::invalid_state(format!(
                "Course {} is not being edited ({})",
                self.course.id,
                self.mode.as_str()
            )))
        }
    }

    fn fail_save(&mut self, message: String) -> SaveOutcome {
        let error = SaveError {
            course_id: self.course.id,
            message,
        };
        warn!("{error}");
        self.mode = EditMode::Editing;
        self.last_error = Some(error.clone());
        SaveOutcome::Failed(error)
    }
}

impl<B: CourseBackend + ?Sized + 'static> std::fmt::Debug for EditorSession<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("course_id", &self.course.id)
            .field("mode", &self.mode)
            .field("itinerary", &self.itinerary)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
