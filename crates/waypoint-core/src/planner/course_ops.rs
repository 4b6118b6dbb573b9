//! Course operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::CourseSummaries,
    error::{PlannerError, Result},
    models::{Course, CourseUpdate},
    params::{CreateCourse, DeleteCourse, Id},
};

impl Planner {
    /// Creates a course with one empty day per `days`.
    pub async fn create_course(&self, params: &CreateCourse) -> Result<Course> {
        params.validate()?;

        let title = params.title.trim().to_string();
        let region_code = params.region_code.trim().to_uppercase();
        let days = params.days;
        let total_distance = params.total_distance;
        let is_public = params.is_public;

        let course = self
            .with_database(move |db| {
                db.create_course(&title, days, &region_code, total_distance, is_public)
            })
            .await?;

        info!("Created course {} ({} days)", course.id, course.days);
        Ok(course)
    }

    /// Retrieves a course with its persisted schedule.
    pub async fn get_course(&self, params: &Id) -> Result<Option<Course>> {
        let course_id = params.id;
        self.with_database(move |db| db.get_course(course_id)).await
    }

    /// Lists all courses as summaries, newest first.
    pub async fn list_courses_summary(&self) -> Result<CourseSummaries> {
        let summaries = self
            .with_database(|db| db.list_course_summaries())
            .await?;
        Ok(CourseSummaries(summaries))
    }

    /// Replaces the persisted schedule of a course.
    pub async fn update_course_schedule(
        &self,
        course_id: u64,
        update: &CourseUpdate,
    ) -> Result<Option<Course>> {
        let update = update.clone();
        self.with_database(move |db| db.update_course_schedule(course_id, &update))
            .await
    }

    /// Permanently deletes a course and returns what was deleted.
    ///
    /// Requires `confirmed`; deletion cannot be undone.
    pub async fn delete_course(&self, params: &DeleteCourse) -> Result<Course> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Deleting a course cannot be undone; confirmation is required"));
        }

        let course_id = params.id;
        let course = self
            .with_database(move |db| {
                let course = db
                    .get_course(course_id)?
                    .ok_or(PlannerError::CourseNotFound { id: course_id })?;
                db.delete_course(course_id)?;
                Ok(course)
            })
            .await?;

        info!("Deleted course {course_id}");
        Ok(course)
    }
}
