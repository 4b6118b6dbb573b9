//! High-level planner API over the SQLite store.
//!
//! [`Planner`] is the SQLite-backed [`crate::CourseBackend`] plus the catalog
//! operations the CLI and MCP server need (courses and spots). Every call
//! opens its own connection on a blocking task, so a `Planner` is cheap to
//! clone and safe to share across async tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  EditorSession  │    │     Planner     │    │    Database     │
//! │  CLI / MCP      │───▶│ (course_ops,    │───▶│   (via db/)     │
//! │                 │    │  spot_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`course_ops`]: Course create, read, list and delete
//! - [`spot_ops`]: Spot catalog operations
//! - [`backend`]: [`crate::CourseBackend`] implementation
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use waypoint_core::{params::CreateCourse, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path("/tmp/waypoint.db")
//!     .build()
//!     .await?;
//!
//! let course = planner
//!     .create_course(&CreateCourse {
//!         title: "Busan weekend".to_string(),
//!         region_code: "BUSAN".to_string(),
//!         days: 2,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{course}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

pub mod backend;
pub mod builder;
pub mod course_ops;
pub mod spot_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for courses and spots.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
