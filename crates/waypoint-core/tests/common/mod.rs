#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use jiff::Timestamp;
use tempfile::TempDir;
use tokio::sync::Semaphore;
use waypoint_core::{
    models::{CourseUpdate, CourseUpdateResponse},
    Course, CourseBackend, CourseSlot, PlannerBuilder, PlannerError, Result, SlotType, SpotDetail,
};

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, waypoint_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn spot(id: u64, category: &str) -> SpotDetail {
    SpotDetail {
        id,
        name: format!("Spot {id}"),
        category: Some(category.to_string()),
        address: None,
        image_urls: vec![],
        rating: None,
    }
}

/// Course whose schedule holds `day_ids`, one inner list per day.
pub fn course(id: u64, day_ids: &[&[u64]]) -> Course {
    let course_slots = day_ids
        .iter()
        .zip(1u32..)
        .map(|(ids, day)| {
            ids.iter()
                .zip(1u32..)
                .map(|(spot_id, slot)| {
                    CourseSlot::selected(day, slot, SlotType::Tourism, None, "", *spot_id)
                })
                .collect()
        })
        .collect();

    Course {
        id,
        title: format!("Course {id}"),
        days: day_ids.len() as u32,
        region_code: "SEOUL".to_string(),
        total_distance: 4.5,
        course_slots,
        selected_categories: vec![],
        is_public: false,
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1640995200).unwrap(),
    }
}

/// In-memory course backend with failure injection and gated calls.
///
/// Lookups return records in reverse id order so callers cannot rely on the
/// response order.
pub struct FakeBackend {
    courses: Mutex<HashMap<u64, Course>>,
    spots: Mutex<HashMap<u64, SpotDetail>>,
    /// Extra records returned whenever the key id is looked up
    extras: Mutex<HashMap<u64, Vec<SpotDetail>>>,
    /// Lookups containing one of these ids fail
    failing: Mutex<HashSet<u64>>,
    /// Lookups containing one of these ids wait for `release`
    gated: Mutex<HashSet<u64>>,
    gate: Semaphore,
    fail_updates: AtomicBool,
    /// Updates wait for `release`
    gate_updates: AtomicBool,
    reject_updates: AtomicBool,
    lookups: AtomicUsize,
    updates: Mutex<Vec<(u64, CourseUpdate)>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            courses: Mutex::default(),
            spots: Mutex::default(),
            extras: Mutex::default(),
            failing: Mutex::default(),
            gated: Mutex::default(),
            gate: Semaphore::new(0),
            fail_updates: AtomicBool::new(false),
            gate_updates: AtomicBool::new(false),
            reject_updates: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
            updates: Mutex::default(),
        })
    }

    pub fn insert_course(&self, course: Course) {
        self.courses.lock().unwrap().insert(course.id, course);
    }

    pub fn insert_spots(&self, spots: impl IntoIterator<Item = SpotDetail>) {
        let mut map = self.spots.lock().unwrap();
        for spot in spots {
            map.insert(spot.id, spot);
        }
    }

    pub fn add_extra(&self, requested: u64, extra: SpotDetail) {
        self.extras
            .lock()
            .unwrap()
            .entry(requested)
            .or_default()
            .push(extra);
    }

    pub fn fail_lookups_for(&self, id: u64) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn clear_failures(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn gate_lookups_for(&self, id: u64) {
        self.gated.lock().unwrap().insert(id);
    }

    /// Lets one gated lookup proceed.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn gate_updates(&self, gate: bool) {
        self.gate_updates.store(gate, Ordering::SeqCst);
    }

    pub fn reject_updates(&self, reject: bool) {
        self.reject_updates.store(reject, Ordering::SeqCst);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<(u64, CourseUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn stored_course(&self, id: u64) -> Option<Course> {
        self.courses.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl CourseBackend for FakeBackend {
    async fn fetch_course(&self, course_id: u64) -> Result<Course> {
        self.stored_course(course_id)
            .ok_or(PlannerError::CourseNotFound { id: course_id })
    }

    async fn lookup_spots(&self, ids: &[u64]) -> Result<Vec<SpotDetail>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let gated = {
            let gated = self.gated.lock().unwrap();
            ids.iter().any(|id| gated.contains(id))
        };
        if gated {
            self.gate
                .acquire()
                .await
                .expect("gate closed")
                .forget();
        }

        if ids.iter().any(|id| self.failing.lock().unwrap().contains(id)) {
            return Err(PlannerError::Backend {
                message: "lookup timed out".to_string(),
            });
        }

        let spots = self.spots.lock().unwrap();
        let extras = self.extras.lock().unwrap();
        let mut found: Vec<SpotDetail> =
            ids.iter().filter_map(|id| spots.get(id).cloned()).collect();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        for id in ids {
            if let Some(more) = extras.get(id) {
                found.extend(more.iter().cloned());
            }
        }
        Ok(found)
    }

    async fn update_course(
        &self,
        course_id: u64,
        update: &CourseUpdate,
    ) -> Result<CourseUpdateResponse> {
        if self.gate_updates.load(Ordering::SeqCst) {
            self.gate
                .acquire()
                .await
                .expect("gate closed")
                .forget();
        }
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(PlannerError::Backend {
                message: "service unavailable".to_string(),
            });
        }
        if self.reject_updates.load(Ordering::SeqCst) {
            return Ok(CourseUpdateResponse::rejected());
        }

        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .get_mut(&course_id)
            .ok_or(PlannerError::CourseNotFound { id: course_id })?;
        course.total_distance = update.total_distance;
        course.region_code = update.region_code.clone();
        course.course_slots = update.course_slots.clone();
        course.selected_categories = update.selected_categories.clone();
        let stored = course.clone();
        drop(courses);

        self.updates
            .lock()
            .unwrap()
            .push((course_id, update.clone()));
        Ok(CourseUpdateResponse::ok(stored))
    }
}
