//! The `CourseBackend` trait -- the seam to course persistence.
//!
//! The editor core never talks to storage directly. Everything it needs from
//! the outside world goes through these three calls, which lets the same
//! editor run against the SQLite-backed [`crate::Planner`] or an in-memory
//! fake in tests.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Course, CourseUpdate, CourseUpdateResponse, SpotDetail},
};

/// Course read, batch spot lookup and course update.
///
/// The trait is object-safe, so `Arc<dyn CourseBackend>` works wherever a
/// concrete backend does.
#[async_trait]
pub trait CourseBackend: Send + Sync {
    /// Reads a course with its persisted schedule.
    async fn fetch_course(&self, course_id: u64) -> Result<Course>;

    /// Looks up spot records for the given ids.
    ///
    /// The response order is not guaranteed to match `ids`, ids that do not
    /// exist are omitted, and records that were not asked for may be
    /// included.
    async fn lookup_spots(&self, ids: &[u64]) -> Result<Vec<SpotDetail>>;

    /// Replaces the schedule of a course.
    async fn update_course(
        &self,
        course_id: u64,
        update: &CourseUpdate,
    ) -> Result<CourseUpdateResponse>;
}

// Compile-time assertion: CourseBackend must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn CourseBackend) {}
};
