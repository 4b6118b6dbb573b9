//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waypoint_core::PlannerError;

/// Helper to convert planner errors to MCP errors
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Error for itinerary tools called before `open_itinerary`.
pub fn session_not_open(course_id: u64) -> ErrorData {
    ErrorData::internal_error(
        format!("Course {course_id} is not open for editing. Call open_itinerary first"),
        None,
    )
}
