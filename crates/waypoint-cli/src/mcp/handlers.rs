//! MCP tool handlers implementation

use std::{collections::HashMap, sync::Arc};

use log::{debug, info};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waypoint_core::{
    display::{CreateResult, OperationStatus},
    params as core, EditMode, EditorSession, EpochCounter, Planner, PlannerError, SaveOutcome,
    SessionView,
};

use super::errors::{session_not_open, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types carry no MCP derives. This transparent wrapper adds
// Deserialize and JsonSchema so each tool can take a core type directly.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateCourse = McpParams<core::CreateCourse>;
pub type CreateSpot = McpParams<core::CreateSpot>;
pub type MoveSpot = McpParams<core::MoveSpot>;
pub type AddSpot = McpParams<core::AddSpot>;
pub type RemoveSpot = McpParams<core::RemoveSpot>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Open editor sessions keyed by course id.
pub type Sessions = Arc<Mutex<HashMap<u64, EditorSession<Planner>>>>;

fn success(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
    sessions: Sessions,
    epoch: EpochCounter,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>, sessions: Sessions, epoch: EpochCounter) -> Self {
        Self {
            planner,
            sessions,
            epoch,
        }
    }

    pub async fn create_course(&self, Parameters(params): Parameters<CreateCourse>) -> McpResult {
        debug!("create_course: {params:?}");

        let course = self
            .planner
            .create_course(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create course", &e))?;

        success(CreateResult::new(course).to_string())
    }

    pub async fn list_courses(&self) -> McpResult {
        debug!("list_courses");

        let summaries = self
            .planner
            .list_courses_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to list courses", &e))?;

        let title = if summaries.is_empty() {
            "No courses found"
        } else {
            "Courses"
        };
        success(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_course(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_course: {params:?}");

        let id = params.as_ref().id;
        let course = self
            .planner
            .get_course(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get course", &e))?
            .ok_or_else(|| {
                to_mcp_error("Failed to get course", &PlannerError::CourseNotFound { id })
            })?;

        success(course.to_string())
    }

    pub async fn create_spot(&self, Parameters(params): Parameters<CreateSpot>) -> McpResult {
        debug!("create_spot: {params:?}");

        let spot = self
            .planner
            .create_spot(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create spot", &e))?;

        success(CreateResult::new(spot).to_string())
    }

    pub async fn list_spots(&self) -> McpResult {
        debug!("list_spots");

        let spots = self
            .planner
            .list_spots()
            .await
            .map_err(|e| to_mcp_error("Failed to list spots", &e))?;

        success(format!("# Spots\n\n{spots}"))
    }

    /// Opens a course for editing, keeping an already open editing session.
    pub async fn open_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("open_itinerary: {params:?}");

        let course_id = params.as_ref().id;
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get(&course_id) {
            if session.mode() == EditMode::Editing {
                return success(SessionView(session).to_string());
            }
        }

        let mut session =
            EditorSession::open(Arc::clone(&self.planner), self.epoch.clone(), course_id)
                .await
                .map_err(|e| to_mcp_error("Failed to open course", &e))?;
        session.resolve().await;
        session
            .enter_edit()
            .map_err(|e| to_mcp_error("Failed to start editing", &e))?;

        let view = SessionView(&session).to_string();
        sessions.insert(course_id, session);
        info!("Opened itinerary for course {course_id}");
        success(view)
    }

    /// Shows the open session, or a freshly resolved read-only view.
    pub async fn show_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_itinerary: {params:?}");

        let course_id = params.as_ref().id;
        let sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get(&course_id) {
            return success(SessionView(session).to_string());
        }
        drop(sessions);

        let mut session =
            EditorSession::open(Arc::clone(&self.planner), self.epoch.clone(), course_id)
                .await
                .map_err(|e| to_mcp_error("Failed to open course", &e))?;
        session.resolve().await;
        success(SessionView(&session).to_string())
    }

    pub async fn move_spot(&self, Parameters(params): Parameters<MoveSpot>) -> McpResult {
        debug!("move_spot: {params:?}");

        let params = params.as_ref();
        self.edit(params.course_id, |session| {
            session.move_spot(
                params.source_index,
                params.source_day,
                params.dest_day,
                params.dest_index,
            )
        })
        .await
    }

    pub async fn add_spot(&self, Parameters(params): Parameters<AddSpot>) -> McpResult {
        debug!("add_spot: {params:?}");

        let params = params.as_ref();
        let spot_id = params.spot_id;
        self.planner
            .get_spot(&core::Id { id: spot_id })
            .await
            .map_err(|e| to_mcp_error("Failed to get spot", &e))?
            .ok_or_else(|| {
                to_mcp_error("Failed to add spot", &PlannerError::SpotNotFound { id: spot_id })
            })?;

        self.edit(params.course_id, |session| session.add_spot(params.day, spot_id))
            .await
    }

    pub async fn remove_spot(&self, Parameters(params): Parameters<RemoveSpot>) -> McpResult {
        debug!("remove_spot: {params:?}");

        let params = params.as_ref();
        self.edit(params.course_id, |session| {
            session.remove_spot(params.day, params.index)
        })
        .await
    }

    pub async fn save_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("save_itinerary: {params:?}");

        let course_id = params.as_ref().id;
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(&course_id)
            .ok_or_else(|| session_not_open(course_id))?;

        if !session.itinerary().is_fully_resolved() {
            session.resolve().await;
        }
        let outcome = session
            .save()
            .await
            .map_err(|e| to_mcp_error("Failed to save itinerary", &e))?;

        match outcome {
            SaveOutcome::Saved => {
                let view = SessionView(&*session).to_string();
                sessions.remove(&course_id);
                let status = OperationStatus::success(format!("Saved course {course_id}"));
                success(format!("{status}\n{view}"))
            }
            SaveOutcome::Failed(error) => {
                let status = OperationStatus::failure(format!(
                    "{error}. The itinerary is still open; retry save_itinerary or call discard_itinerary."
                ));
                Ok(CallToolResult::error(vec![Content::text(status.to_string())]))
            }
        }
    }

    pub async fn discard_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("discard_itinerary: {params:?}");

        let course_id = params.as_ref().id;
        let mut session = self
            .sessions
            .lock()
            .await
            .remove(&course_id)
            .ok_or_else(|| session_not_open(course_id))?;
        session
            .discard()
            .map_err(|e| to_mcp_error("Failed to discard edits", &e))?;

        let status = OperationStatus::success(format!(
            "Discarded unsaved edits to course {course_id}"
        ));
        success(status.to_string())
    }

    /// Applies one edit to an open session and resolves anything new.
    async fn edit<F>(&self, course_id: u64, edit: F) -> McpResult
    where
        F: FnOnce(&mut EditorSession<Planner>) -> waypoint_core::Result<()> + Send,
    {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(&course_id)
            .ok_or_else(|| session_not_open(course_id))?;

        edit(session).map_err(|e| to_mcp_error("Failed to edit itinerary", &e))?;
        if !session.itinerary().is_fully_resolved() {
            session.resolve().await;
        }

        success(SessionView(&*session).to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::TempDir;
    use waypoint_core::PlannerBuilder;

    use super::*;

    async fn create_test_handlers() -> (TempDir, Arc<Planner>, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let planner = PlannerBuilder::new()
            .with_database_path(temp_dir.path().join("mcp_test.db"))
            .build()
            .await
            .expect("Failed to create planner");
        let planner = Arc::new(planner);
        let handlers = McpHandlers::new(
            Arc::clone(&planner),
            Arc::new(Mutex::new(HashMap::new())),
            EpochCounter::new(),
        );
        (temp_dir, planner, handlers)
    }

    /// Seeds course 1 (two days) and spots 1 (CAFE) and 2 (HOTEL).
    async fn seed(handlers: &McpHandlers) {
        handlers
            .create_course(Parameters(McpParams(core::CreateCourse {
                title: "Busan trip".to_string(),
                region_code: "BUSAN".to_string(),
                days: 2,
                total_distance: 12.0,
                is_public: false,
            })))
            .await
            .unwrap();
        for (name, category) in [("Momos Coffee", "CAFE"), ("Paradise Hotel", "HOTEL")] {
            handlers
                .create_spot(Parameters(McpParams(core::CreateSpot {
                    name: name.to_string(),
                    category: Some(category.to_string()),
                    address: None,
                    image_urls: vec![],
                    rating: None,
                })))
                .await
                .unwrap();
        }
    }

    fn id(id: u64) -> Parameters<Id> {
        Parameters(McpParams(core::Id { id }))
    }

    fn add(course_id: u64, day: u32, spot_id: u64) -> Parameters<AddSpot> {
        Parameters(McpParams(core::AddSpot {
            course_id,
            day,
            spot_id,
        }))
    }

    fn text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|content| content["text"].as_str())
            .collect()
    }

    fn is_error(result: &CallToolResult) -> bool {
        serde_json::to_value(result).unwrap()["isError"] == Value::Bool(true)
    }

    #[tokio::test]
    async fn test_catalog_tools() {
        let (_dir, _planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        let courses = text(&handlers.list_courses().await.unwrap());
        assert!(courses.starts_with("# Courses"));
        assert!(courses.contains("Busan trip"));

        let spots = text(&handlers.list_spots().await.unwrap());
        assert!(spots.contains("Momos Coffee"));
        assert!(spots.contains("Paradise Hotel"));

        let error = handlers.show_course(id(9)).await.unwrap_err();
        assert!(error.message.contains("Course with ID 9 not found"));
    }

    #[tokio::test]
    async fn test_edits_require_open_itinerary() {
        let (_dir, _planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        let error = handlers.add_spot(add(1, 1, 1)).await.unwrap_err();
        assert!(error.message.contains("open_itinerary"));
        assert!(handlers.save_itinerary(id(1)).await.is_err());
        assert!(handlers.discard_itinerary(id(1)).await.is_err());

        let error = handlers.open_itinerary(id(5)).await.unwrap_err();
        assert!(error.message.contains("Failed to open course"));
    }

    #[tokio::test]
    async fn test_open_itinerary_keeps_existing_session() {
        let (_dir, _planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        let opened = text(&handlers.open_itinerary(id(1)).await.unwrap());
        assert!(opened.contains("# 1. Busan trip (editing)"));

        handlers.add_spot(add(1, 1, 1)).await.unwrap();
        let reopened = text(&handlers.open_itinerary(id(1)).await.unwrap());
        assert!(reopened.contains("0. **Momos Coffee** (CAFE) spot 1"));

        let error = handlers.add_spot(add(1, 1, 42)).await.unwrap_err();
        assert!(error.message.contains("Spot with ID 42 not found"));
    }

    #[tokio::test]
    async fn test_save_itinerary_closes_session() {
        let (_dir, planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        handlers.open_itinerary(id(1)).await.unwrap();
        handlers.add_spot(add(1, 1, 1)).await.unwrap();
        handlers.add_spot(add(1, 1, 2)).await.unwrap();
        let moved = text(
            &handlers
                .move_spot(Parameters(McpParams(core::MoveSpot {
                    course_id: 1,
                    source_day: 1,
                    source_index: 1,
                    dest_day: 2,
                    dest_index: 0,
                })))
                .await
                .unwrap(),
        );
        assert!(moved.contains("0. **Paradise Hotel** (HOTEL) spot 2"));

        let saved = handlers.save_itinerary(id(1)).await.unwrap();
        assert!(!is_error(&saved));
        let saved = text(&saved);
        assert!(saved.contains("Success: Saved course 1"));
        assert!(saved.contains("# 1. Busan trip (viewing)"));
        assert!(handlers.sessions.lock().await.is_empty());

        let course = planner.get_course(&core::Id { id: 1 }).await.unwrap().unwrap();
        assert_eq!(course.day_spot_ids(), vec![vec![1], vec![2]]);

        let error = handlers
            .remove_spot(Parameters(McpParams(core::RemoveSpot {
                course_id: 1,
                day: 1,
                index: 0,
            })))
            .await
            .unwrap_err();
        assert!(error.message.contains("not open"));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_session_open() {
        let (_dir, planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        handlers.open_itinerary(id(1)).await.unwrap();
        handlers.add_spot(add(1, 2, 2)).await.unwrap();
        planner
            .delete_course(&core::DeleteCourse {
                id: 1,
                confirmed: true,
            })
            .await
            .unwrap();

        let failed = handlers.save_itinerary(id(1)).await.unwrap();
        assert!(is_error(&failed));
        assert!(text(&failed).contains("The itinerary is still open"));

        {
            let sessions = handlers.sessions.lock().await;
            let session = sessions.get(&1).expect("session should stay open");
            assert_eq!(session.mode(), EditMode::Editing);
            assert_eq!(session.itinerary().store(), vec![vec![], vec![2]]);
            assert!(session.last_error().is_some());
        }

        // Still editable after the failure
        handlers.add_spot(add(1, 1, 1)).await.unwrap();
        assert!(is_error(&handlers.save_itinerary(id(1)).await.unwrap()));
    }

    #[tokio::test]
    async fn test_discard_itinerary_drops_edits() {
        let (_dir, planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        handlers.open_itinerary(id(1)).await.unwrap();
        handlers.add_spot(add(1, 1, 1)).await.unwrap();

        let discarded = text(&handlers.discard_itinerary(id(1)).await.unwrap());
        assert!(discarded.contains("Discarded unsaved edits to course 1"));
        assert!(handlers.sessions.lock().await.is_empty());

        let course = planner.get_course(&core::Id { id: 1 }).await.unwrap().unwrap();
        assert_eq!(course.scheduled_spots(), 0);
    }

    #[tokio::test]
    async fn test_show_itinerary_without_session() {
        let (_dir, _planner, handlers) = create_test_handlers().await;
        seed(&handlers).await;

        handlers.open_itinerary(id(1)).await.unwrap();
        handlers.add_spot(add(1, 1, 2)).await.unwrap();
        let open = text(&handlers.show_itinerary(id(1)).await.unwrap());
        assert!(open.contains("(editing)"));
        assert!(open.contains("Paradise Hotel"));

        handlers.discard_itinerary(id(1)).await.unwrap();
        let persisted = text(&handlers.show_itinerary(id(1)).await.unwrap());
        assert!(persisted.contains("# 1. Busan trip (viewing)"));
        assert!(!persisted.contains("Paradise Hotel"));
        assert!(handlers.sessions.lock().await.is_empty());
    }
}
