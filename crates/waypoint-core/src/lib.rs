//! Core library for the Waypoint travel planner.
//!
//! The heart of the crate is the multi-day itinerary editor in [`itinerary`]:
//! drag-reorder, add and remove spots across the days of a course, resolve
//! spot details concurrently per day, and turn the edited arrangement into a
//! persisted day×slot schedule.
//!
//! Persistence sits behind the [`CourseBackend`] trait. [`Planner`] is the
//! SQLite implementation and also carries the course and spot catalog
//! operations used by the CLI and the MCP server.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use waypoint_core::{
//!     itinerary::{EditorSession, EpochCounter, SaveOutcome},
//!     params::CreateCourse,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = Arc::new(
//!     PlannerBuilder::new()
//!         .with_database_path("waypoint.db")
//!         .build()
//!         .await?,
//! );
//!
//! let course = planner
//!     .create_course(&CreateCourse {
//!         title: "Jeju".to_string(),
//!         region_code: "JEJU".to_string(),
//!         days: 3,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let mut session = EditorSession::open(planner, EpochCounter::global(), course.id).await?;
//! session.resolve().await;
//! session.enter_edit()?;
//! session.add_spot(1, 42)?;
//! session.resolve().await;
//!
//! if let SaveOutcome::Failed(error) = session.save().await? {
//!     eprintln!("{error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;

pub use backend::CourseBackend;
pub use db::Database;
pub use display::{CourseSummaries, CreateResult, DeleteResult, OperationStatus, SessionView, Spots};
pub use error::{FetchError, PlannerError, Result, SaveError};
pub use itinerary::{EditorSession, EpochCounter, Itinerary, SaveOutcome};
pub use models::{Course, CourseSlot, CourseSummary, EditMode, SlotType, SpotDetail};
pub use params::{AddSpot, CreateCourse, CreateSpot, DeleteCourse, Id, MoveSpot, RemoveSpot};
pub use planner::{Planner, PlannerBuilder};
