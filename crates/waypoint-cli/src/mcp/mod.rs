//! MCP server implementation for Waypoint
//!
//! Exposes the course catalog and the itinerary editor as Model Context
//! Protocol tools over stdio. Itinerary sessions opened with
//! `open_itinerary` stay in memory, keyed by course id, until they are saved
//! or discarded.

use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use waypoint_core::{EpochCounter, Planner};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddSpot, CreateCourse, CreateSpot, Id, McpHandlers, McpResult, MoveSpot, RemoveSpot, Sessions,
};

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: Arc<Planner>,
    sessions: Sessions,
    epoch: EpochCounter,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            epoch: EpochCounter::global(),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(
            Arc::clone(&self.planner),
            Arc::clone(&self.sessions),
            self.epoch.clone(),
        )
    }

    #[tool(
        name = "create_course",
        description = "Create a new multi-day travel course. Provide a title, a region code (e.g. SEOUL, JEJU) and the number of days (at least 1). Optionally set total_distance in kilometres and is_public. Returns the new course ID."
    )]
    async fn create_course(&self, params: Parameters<CreateCourse>) -> McpResult {
        self.handlers().create_course(params).await
    }

    #[tool(
        name = "list_courses",
        description = "List all courses with their region, number of days and number of scheduled spots."
    )]
    async fn list_courses(&self) -> McpResult {
        self.handlers().list_courses().await
    }

    #[tool(
        name = "show_course",
        description = "Show a course and its persisted schedule: every day with its numbered slots, slot types (RESTAURANT, CAFE, ACCOMMODATION, TOURISM) and selected spot IDs."
    )]
    async fn show_course(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_course(params).await
    }

    #[tool(
        name = "create_spot",
        description = "Add a spot to the catalog. Provide a name and optionally a free-text category (e.g. CAFE, RESTAURANT_KOREAN, HOTEL), address, image_urls and a rating between 0 and 5. The category decides the slot type when the spot is scheduled."
    )]
    async fn create_spot(&self, params: Parameters<CreateSpot>) -> McpResult {
        self.handlers().create_spot(params).await
    }

    #[tool(
        name = "list_spots",
        description = "List every spot in the catalog with its ID and category. Use the IDs with add_spot."
    )]
    async fn list_spots(&self) -> McpResult {
        self.handlers().list_spots().await
    }

    #[tool(
        name = "open_itinerary",
        description = "Open a course for editing. Loads the course, resolves the details of every scheduled spot day by day and starts an editing session. Required before move_spot, add_spot, remove_spot, save_itinerary and discard_itinerary. If the course is already open, the current session is returned unchanged."
    )]
    async fn open_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().open_itinerary(params).await
    }

    #[tool(
        name = "show_itinerary",
        description = "Show the itinerary of a course day by day. Returns the open editing session including unsaved edits if there is one, otherwise the persisted arrangement."
    )]
    async fn show_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_itinerary(params).await
    }

    #[tool(
        name = "move_spot",
        description = "Move a spot within a day or to another day of an open itinerary. Days are 1-based, indices 0-based. Within one day the spot ends up at dest_index; across days it is inserted at dest_index, which may equal the destination day's length to append. Not saved until save_itinerary."
    )]
    async fn move_spot(&self, params: Parameters<MoveSpot>) -> McpResult {
        self.handlers().move_spot(params).await
    }

    #[tool(
        name = "add_spot",
        description = "Append a catalog spot to a day (1-based) of an open itinerary and resolve its details. Not saved until save_itinerary."
    )]
    async fn add_spot(&self, params: Parameters<AddSpot>) -> McpResult {
        self.handlers().add_spot(params).await
    }

    #[tool(
        name = "remove_spot",
        description = "Remove the spot at index (0-based) from a day (1-based) of an open itinerary. Not saved until save_itinerary."
    )]
    async fn remove_spot(&self, params: Parameters<RemoveSpot>) -> McpResult {
        self.handlers().remove_spot(params).await
    }

    #[tool(
        name = "save_itinerary",
        description = "Save an open itinerary. Every spot is classified into a slot type from its category and the days are written back as a numbered day×slot schedule. On success the session is closed. On failure nothing is written and the session stays open so the save can be retried."
    )]
    async fn save_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().save_itinerary(params).await
    }

    #[tool(
        name = "discard_itinerary",
        description = "Close an open itinerary without saving. All unsaved moves, additions and removals are dropped."
    )]
    async fn discard_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().discard_itinerary(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Waypoint is a multi-day travel itinerary editor.

## Core Concepts
- **Spots**: points of interest in a shared catalog, each with a free-text category
- **Courses**: multi-day trips; each day holds an ordered list of spots
- **Itinerary sessions**: an opened course being edited; edits stay in memory until saved

## Workflow
1. Create spots with `create_spot` and a course with `create_course`
2. Call `open_itinerary` with the course ID
3. Arrange spots with `add_spot`, `move_spot` and `remove_spot`
4. Persist with `save_itinerary`, or drop the edits with `discard_itinerary`

Days are 1-based and positions within a day are 0-based. On save every spot is
classified as RESTAURANT, CAFE, ACCOMMODATION or TOURISM from its category."#
                .to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
