//! Tests for the planner module.

use tempfile::TempDir;

use super::*;
use crate::{
    backend::CourseBackend,
    models::{CourseSlot, CourseUpdate, SlotType},
    params::{CreateCourse, CreateSpot, DeleteCourse, Id},
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn course_params(title: &str, days: u32) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        region_code: "seoul".to_string(),
        days,
        total_distance: 12.5,
        is_public: false,
    }
}

#[tokio::test]
async fn test_create_course_normalizes_input() {
    let (_temp_dir, planner) = create_test_planner().await;

    let course = planner
        .create_course(&course_params("  Palaces  ", 3))
        .await
        .expect("Failed to create course");

    assert_eq!(course.title, "Palaces");
    assert_eq!(course.region_code, "SEOUL");
    assert_eq!(course.course_slots.len(), 3);

    let loaded = planner
        .get_course(&Id { id: course.id })
        .await
        .expect("Failed to get course")
        .expect("Course should exist");
    assert_eq!(loaded.days, 3);
    assert_eq!(loaded.course_slots, vec![Vec::new(), Vec::new(), Vec::new()]);
    assert_eq!(loaded.total_distance, 12.5);
}

#[tokio::test]
async fn test_create_course_rejects_zero_days() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.create_course(&course_params("Nowhere", 0)).await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_list_courses_summary_counts_spots() {
    let (_temp_dir, planner) = create_test_planner().await;

    let course = planner
        .create_course(&course_params("Weekend", 2))
        .await
        .unwrap();
    planner.create_course(&course_params("Empty", 1)).await.unwrap();

    let update = CourseUpdate {
        total_distance: 3.0,
        region_code: "SEOUL".to_string(),
        course_slots: vec![
            vec![
                CourseSlot::selected(1, 1, SlotType::Cafe, Some("CAFE".into()), "A", 1),
                CourseSlot::selected(1, 2, SlotType::Tourism, None, "B", 2),
            ],
            vec![CourseSlot::selected(2, 1, SlotType::Restaurant, None, "C", 3)],
        ],
        selected_categories: vec!["cafe".to_string()],
    };
    planner
        .update_course_schedule(course.id, &update)
        .await
        .unwrap()
        .expect("Course should exist");

    let summaries = planner.list_courses_summary().await.unwrap();
    assert_eq!(summaries.len(), 2);
    let weekend = summaries
        .iter()
        .find(|s| s.id == course.id)
        .expect("Weekend summary");
    assert_eq!(weekend.total_spots, 3);
}

#[tokio::test]
async fn test_delete_course_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let course = planner
        .create_course(&course_params("Doomed", 1))
        .await
        .unwrap();

    let unconfirmed = planner
        .delete_course(&DeleteCourse {
            id: course.id,
            confirmed: false,
        })
        .await;
    assert!(unconfirmed.is_err());

    let deleted = planner
        .delete_course(&DeleteCourse {
            id: course.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete course");
    assert_eq!(deleted.title, "Doomed");

    assert!(planner
        .get_course(&Id { id: course.id })
        .await
        .unwrap()
        .is_none());

    let missing = planner
        .delete_course(&DeleteCourse {
            id: course.id,
            confirmed: true,
        })
        .await;
    assert!(matches!(missing, Err(PlannerError::CourseNotFound { .. })));
}

#[tokio::test]
async fn test_spot_catalog_round_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    let spot = planner
        .create_spot(&CreateSpot {
            name: "Gwangjang Market".to_string(),
            category: Some("  MARKET ".to_string()),
            address: Some("88 Changgyeonggung-ro".to_string()),
            image_urls: vec!["market.jpg".to_string()],
            rating: Some(4.6),
        })
        .await
        .expect("Failed to create spot");

    assert_eq!(spot.category.as_deref(), Some("MARKET"));

    let loaded = planner
        .get_spot(&Id { id: spot.id })
        .await
        .unwrap()
        .expect("Spot should exist");
    assert_eq!(loaded, spot);

    let spots = planner.list_spots().await.unwrap();
    assert_eq!(spots.len(), 1);
}

#[tokio::test]
async fn test_backend_lookup_skips_unknown_ids() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let spot = planner
            .create_spot(&CreateSpot {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        ids.push(spot.id);
    }

    let found = planner
        .lookup_spots(&[ids[2], 999, ids[0]])
        .await
        .unwrap();
    let mut found_ids: Vec<u64> = found.iter().map(|s| s.id).collect();
    found_ids.sort_unstable();
    assert_eq!(found_ids, vec![ids[0], ids[2]]);

    assert!(planner.lookup_spots(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_update_unknown_course() {
    let (_temp_dir, planner) = create_test_planner().await;

    let update = CourseUpdate {
        total_distance: 0.0,
        region_code: "SEOUL".to_string(),
        course_slots: vec![],
        selected_categories: vec![],
    };
    let result = planner.update_course(42, &update).await;
    assert!(matches!(result, Err(PlannerError::CourseNotFound { id: 42 })));

    let fetch = planner.fetch_course(42).await;
    assert!(matches!(fetch, Err(PlannerError::CourseNotFound { id: 42 })));
}
