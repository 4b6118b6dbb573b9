//! [`CourseBackend`] over the SQLite store.

use async_trait::async_trait;

use super::Planner;
use crate::{
    backend::CourseBackend,
    error::{PlannerError, Result},
    models::{Course, CourseUpdate, CourseUpdateResponse, SpotDetail},
    params::Id,
};

#[async_trait]
impl CourseBackend for Planner {
    async fn fetch_course(&self, course_id: u64) -> Result<Course> {
        self.get_course(&Id { id: course_id })
            .await?
            .ok_or(PlannerError::CourseNotFound { id: course_id })
    }

    async fn lookup_spots(&self, ids: &[u64]) -> Result<Vec<SpotDetail>> {
        let ids = ids.to_vec();
        self.with_database(move |db| db.lookup_spots(&ids)).await
    }

    async fn update_course(
        &self,
        course_id: u64,
        update: &CourseUpdate,
    ) -> Result<CourseUpdateResponse> {
        self.update_course_schedule(course_id, update)
            .await?
            .map(CourseUpdateResponse::ok)
            .ok_or(PlannerError::CourseNotFound { id: course_id })
    }
}
