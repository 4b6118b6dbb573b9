//! Command handlers for the CLI.
//!
//! Catalog commands map one-to-one onto [`Planner`] operations. Itinerary
//! commands each run one full editor cycle against the database: open,
//! resolve, enter edit mode, apply the edit, resolve anything new, save.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use waypoint_core::{
    display::{CreateResult, DeleteResult},
    params::{AddSpot, Id, MoveSpot, RemoveSpot},
    EditorSession, EpochCounter, Planner, PlannerError, SaveOutcome, SessionView,
};

use crate::{
    args::{CourseCommands, ItineraryCommands, SpotCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Arc<Planner>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self {
            planner: Arc::new(planner),
            renderer,
        }
    }

    pub async fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Create(args) => {
                let course = self
                    .planner
                    .create_course(&args.into())
                    .await
                    .context("Failed to create course")?;
                self.renderer.render(&CreateResult::new(course).to_string())
            }
            CourseCommands::List => self.list_courses().await,
            CourseCommands::Show(args) => {
                let params: Id = args.into();
                let course = self
                    .planner
                    .get_course(&params)
                    .await
                    .context("Failed to get course")?
                    .ok_or(PlannerError::CourseNotFound { id: params.id })?;
                self.renderer.render(&course.to_string())
            }
            CourseCommands::Delete(args) => {
                let course = self
                    .planner
                    .delete_course(&args.into())
                    .await
                    .context("Failed to delete course")?;
                self.renderer.render(&DeleteResult::new(course).to_string())
            }
        }
    }

    pub async fn handle_spot_command(&self, command: SpotCommands) -> Result<()> {
        match command {
            SpotCommands::Create(args) => {
                let spot = self
                    .planner
                    .create_spot(&args.into())
                    .await
                    .context("Failed to create spot")?;
                self.renderer.render(&CreateResult::new(spot).to_string())
            }
            SpotCommands::List => {
                let spots = self
                    .planner
                    .list_spots()
                    .await
                    .context("Failed to list spots")?;
                self.renderer.render(&format!("# Spots\n\n{spots}"))
            }
            SpotCommands::Show(args) => {
                let params: Id = args.into();
                let spot = self
                    .planner
                    .get_spot(&params)
                    .await
                    .context("Failed to get spot")?
                    .ok_or(PlannerError::SpotNotFound { id: params.id })?;
                self.renderer.render(&spot.to_string())
            }
        }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Show(args) => {
                let params: Id = args.into();
                let mut session = self.open(params.id).await?;
                session.resolve().await;
                self.renderer.render(&SessionView(&session).to_string())
            }
            ItineraryCommands::Move(args) => {
                let params: MoveSpot = args.into();
                self.edit(params.course_id, |session| {
                    session.move_spot(
                        params.source_index,
                        params.source_day,
                        params.dest_day,
                        params.dest_index,
                    )
                })
                .await
            }
            ItineraryCommands::Add(args) => {
                let params: AddSpot = args.into();
                self.planner
                    .get_spot(&Id { id: params.spot_id })
                    .await
                    .context("Failed to get spot")?
                    .ok_or(PlannerError::SpotNotFound { id: params.spot_id })?;
                self.edit(params.course_id, |session| {
                    session.add_spot(params.day, params.spot_id)
                })
                .await
            }
            ItineraryCommands::Remove(args) => {
                let params: RemoveSpot = args.into();
                self.edit(params.course_id, |session| {
                    session.remove_spot(params.day, params.index)
                })
                .await
            }
        }
    }

    pub async fn list_courses(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_courses_summary()
            .await
            .context("Failed to list courses")?;
        self.renderer.render(&format!("# Courses\n\n{summaries}"))
    }

    async fn open(&self, course_id: u64) -> Result<EditorSession<Planner>> {
        EditorSession::open(Arc::clone(&self.planner), EpochCounter::global(), course_id)
            .await
            .with_context(|| format!("Failed to open course {course_id}"))
    }

    /// Runs one edit against a freshly opened session and saves the result.
    async fn edit<F>(&self, course_id: u64, edit: F) -> Result<()>
    where
        F: FnOnce(&mut EditorSession<Planner>) -> waypoint_core::Result<()>,
    {
        let mut session = self.open(course_id).await?;
        let report = session.resolve().await;
        if report.failed > 0 {
            bail!("Failed to resolve {} days of course {course_id}", report.failed);
        }

        session.enter_edit()?;
        edit(&mut session)?;
        if !session.itinerary().is_fully_resolved() {
            session.resolve().await;
        }
        debug!("Edited course {course_id}: {:?}", session.itinerary().store());

        match session.save().await? {
            SaveOutcome::Saved => self.renderer.render(&SessionView(&session).to_string()),
            SaveOutcome::Failed(error) => {
                self.renderer.render(&SessionView(&session).to_string())?;
                Err(anyhow!(error))
            }
        }
    }
}
