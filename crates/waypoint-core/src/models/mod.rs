//! Data models for courses, spots and persisted schedule slots.
//!
//! These are the records exchanged with a course backend. Display
//! implementations live in [`crate::display::models`] so that the structures
//! here stay focused on shape and serialization.
//!
//! Wire shapes use camelCase field names (`regionCode`, `courseSlots`,
//! `selectedSpotId`, ...) so that a [`Course`] or [`CourseUpdate`] serializes
//! to exactly the payload a course API expects.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{CourseSlot, SlotType};
//!
//! let slot = CourseSlot::selected(1, 1, SlotType::Cafe, Some("CAFE".into()), "Blue Bottle", 42);
//! let json = serde_json::to_value(&slot).unwrap();
//! assert_eq!(json["slotType"], "CAFE");
//! assert_eq!(json["selectedSpotId"], 42);
//! ```

pub mod course;
pub mod slot;
pub mod spot;
pub mod status;
pub mod summary;
pub mod update;

pub use course::Course;
pub use slot::{CourseSlot, SlotType};
pub use spot::SpotDetail;
pub use status::EditMode;
pub use summary::CourseSummary;
pub use update::{CourseUpdate, CourseUpdateResponse};
