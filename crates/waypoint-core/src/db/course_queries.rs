//! Course CRUD operations and persisted schedule queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, Transaction};

use super::utils::{id_column, json_column, timestamp_column, to_json};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Course, CourseSlot, CourseSummary, CourseUpdate, SlotType},
};

const INSERT_COURSE_SQL: &str = "INSERT INTO courses (title, days, region_code, total_distance, selected_categories, is_public, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, '[]', ?5, ?6, ?7)";
const SELECT_COURSE_SQL: &str = "SELECT id, title, days, region_code, total_distance, selected_categories, is_public, created_at, updated_at FROM courses WHERE id = ?1";
const CHECK_COURSE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1)";
const SELECT_SLOTS_SQL: &str = "SELECT day, slot, slot_type, main_category, slot_name, recommended_spot_ids, selected_spot_id, is_continue, empty, has_recommendations, has_selected_spot FROM course_slots WHERE course_id = ?1 ORDER BY day, slot";
const INSERT_SLOT_SQL: &str = "INSERT INTO course_slots (course_id, day, slot, slot_type, main_category, slot_name, recommended_spot_ids, selected_spot_id, is_continue, empty, has_recommendations, has_selected_spot) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const DELETE_SLOTS_SQL: &str = "DELETE FROM course_slots WHERE course_id = ?1";
const UPDATE_COURSE_SCHEDULE_SQL: &str = "UPDATE courses SET total_distance = ?1, region_code = ?2, selected_categories = ?3, days = MAX(days, ?4), updated_at = ?5 WHERE id = ?6";
const DELETE_COURSE_SQL: &str = "DELETE FROM courses WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, title, region_code, days, total_spots, is_public, created_at FROM course_summaries ORDER BY created_at DESC, id DESC";

impl super::Database {
    fn build_course_from_row(row: &Row) -> rusqlite::Result<Course> {
        Ok(Course {
            id: id_column(row, 0)?,
            title: row.get(1)?,
            days: row.get(2)?,
            region_code: row.get(3)?,
            total_distance: row.get(4)?,
            course_slots: Vec::new(),
            selected_categories: json_column(row, 5)?,
            is_public: row.get(6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
        })
    }

    fn build_slot_from_row(row: &Row) -> rusqlite::Result<CourseSlot> {
        let slot_type: String = row.get(2)?;
        let slot_type = slot_type.parse::<SlotType>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(CourseSlot {
            day: row.get(0)?,
            slot: row.get(1)?,
            slot_type,
            main_category: row.get(3)?,
            slot_name: row.get(4)?,
            recommended_spot_ids: json_column(row, 5)?,
            selected_spot_id: row.get::<_, Option<i64>>(6)?.map(|id| id as u64),
            is_continue: row.get(7)?,
            empty: row.get(8)?,
            has_recommendations: row.get(9)?,
            has_selected_spot: row.get(10)?,
        })
    }

    /// Creates a course with an empty schedule.
    pub fn create_course(
        &mut self,
        title: &str,
        days: u32,
        region_code: &str,
        total_distance: f64,
        is_public: bool,
    ) -> Result<Course> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_COURSE_SQL,
            params![
                title,
                days,
                region_code,
                total_distance,
                is_public,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert course")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Course {
            id,
            title: title.into(),
            days,
            region_code: region_code.into(),
            total_distance,
            course_slots: vec![Vec::new(); days as usize],
            selected_categories: Vec::new(),
            is_public,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a course with its schedule grouped by day.
    pub fn get_course(&self, id: u64) -> Result<Option<Course>> {
        let course = self
            .connection
            .query_row(SELECT_COURSE_SQL, params![id as i64], Self::build_course_from_row)
            .optional()
            .db_context("Failed to query course")?;

        let Some(mut course) = course else {
            return Ok(None);
        };

        let slots = self.get_slots(id)?;
        let day_count = slots
            .iter()
            .map(|slot| slot.day as usize)
            .max()
            .unwrap_or(0)
            .max(course.days as usize);

        course.course_slots = vec![Vec::new(); day_count];
        for slot in slots {
            let index = slot.day.saturating_sub(1) as usize;
            course.course_slots[index].push(slot);
        }

        Ok(Some(course))
    }

    fn get_slots(&self, course_id: u64) -> Result<Vec<CourseSlot>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SLOTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![course_id as i64], Self::build_slot_from_row)
            .db_context("Failed to query course slots")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch course slots")?;

        Ok(rows)
    }

    /// Lists summaries of all courses, newest first.
    pub fn list_course_summaries(&self) -> Result<Vec<CourseSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CourseSummary {
                    id: id_column(row, 0)?,
                    title: row.get(1)?,
                    region_code: row.get(2)?,
                    days: row.get(3)?,
                    total_spots: row.get(4)?,
                    is_public: row.get(5)?,
                    created_at: timestamp_column(row, 6)?,
                })
            })
            .db_context("Failed to query course summaries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch course summaries")?;

        Ok(rows)
    }

    /// Replaces the persisted schedule of a course.
    ///
    /// Returns `None` if the course does not exist. The course's day count
    /// grows to cover the schedule but never shrinks.
    pub fn update_course_schedule(
        &mut self,
        id: u64,
        update: &CourseUpdate,
    ) -> Result<Option<Course>> {
        let categories = to_json(&update.selected_categories)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_COURSE_SCHEDULE_SQL,
                params![
                    update.total_distance,
                    &update.region_code,
                    &categories,
                    update.course_slots.len() as i64,
                    &now,
                    id as i64
                ],
            )
            .db_context("Failed to update course")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        tx.execute(DELETE_SLOTS_SQL, params![id as i64])
            .db_context("Failed to clear course slots")?;
        Self::insert_slots(&tx, id, &update.course_slots)?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_course(id)
    }

    fn insert_slots(tx: &Transaction, course_id: u64, days: &[Vec<CourseSlot>]) -> Result<()> {
        let mut stmt = tx
            .prepare(INSERT_SLOT_SQL)
            .db_context("Failed to prepare slot insert")?;

        for (index, slots) in days.iter().enumerate() {
            let day = index as u32 + 1;
            for slot in slots {
                if slot.day != day {
                    return Err(PlannerError::invalid_input("course_slots").with_reason(
                        format!("Slot {} of day {day} is labelled day {}", slot.slot, slot.day),
                    ));
                }
                stmt.execute(params![
                    course_id as i64,
                    slot.day,
                    slot.slot,
                    slot.slot_type.as_str(),
                    slot.main_category.as_deref(),
                    &slot.slot_name,
                    to_json(&slot.recommended_spot_ids)?,
                    slot.selected_spot_id.map(|id| id as i64),
                    slot.is_continue,
                    slot.empty,
                    slot.has_recommendations,
                    slot.has_selected_spot
                ])
                .db_context("Failed to insert course slot")?;
            }
        }

        Ok(())
    }

    /// Permanently deletes a course and its schedule.
    pub fn delete_course(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_COURSE_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check course existence")?;

        if !exists {
            return Err(PlannerError::CourseNotFound { id });
        }

        tx.execute(DELETE_SLOTS_SQL, params![id as i64])
            .db_context("Failed to delete course slots")?;
        tx.execute(DELETE_COURSE_SQL, params![id as i64])
            .db_context("Failed to delete course")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
