//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`] and
//! [`itinerary`]); collections and operation outcomes get newtype wrappers so
//! the same data can be formatted differently depending on context. All
//! output is markdown, rendered by the CLI's terminal renderer or returned
//! as-is over MCP.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Course, Spot,  │───▶│ & Result Types  │───▶│    Output       │
//! │  Itinerary)     │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (CourseSummaries, Spots)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`itinerary`]: Display implementations for itineraries and sessions
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Saved course 3".to_string());
//! assert_eq!(success.to_string(), "Success: Saved course 3\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod itinerary;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{CourseSummaries, Spots};
pub use datetime::LocalDateTime;
pub use itinerary::SessionView;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
