//! Database operations and SQLite management for courses and spots.
//!
//! This module provides low-level database operations for the Waypoint
//! planner. It handles SQLite connections, schema setup, and the query
//! interfaces for courses (with their persisted schedules) and spots.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod course_queries;
pub mod migrations;
pub mod spot_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
