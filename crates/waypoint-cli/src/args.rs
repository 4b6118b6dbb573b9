//! Command-line argument definitions using clap
//!
//! Every command argument struct is a thin wrapper around a core parameter
//! type from [`waypoint_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner / EditorSession
//! ```
//!
//! Help text, aliases and value delimiters live here; validation stays in
//! the core so the MCP server gets the same checks.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waypoint_core::params::*;

/// Multi-day travel itinerary editor
///
/// Waypoint keeps a catalog of spots and a set of multi-day courses. Spots
/// are arranged into the days of a course with the `itinerary` commands,
/// which open the course, resolve every day's spot details, apply one edit
/// and save the resulting day×slot schedule. `serve` exposes the same
/// operations as an MCP server over stdio.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage courses
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Manage the spot catalog
    #[command(alias = "s")]
    Spot {
        #[command(subcommand)]
        command: SpotCommands,
    },
    /// Edit the day-by-day arrangement of a course
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Start the MCP server
    Serve,
}

// ============================================================================
// Course commands
// ============================================================================

/// Create a new course
#[derive(ClapArgs)]
pub struct CreateCourseArgs {
    /// Title of the course
    pub title: String,
    /// Region code, e.g. SEOUL or JEJU
    #[arg(short, long)]
    pub region: String,
    /// Number of days the course spans
    #[arg(short, long, default_value_t = 1)]
    pub days: u32,
    /// Total travel distance in kilometres
    #[arg(long, default_value_t = 0.0)]
    pub distance: f64,
    /// Make the course visible to other users
    #[arg(long)]
    pub public: bool,
}

impl From<CreateCourseArgs> for CreateCourse {
    fn from(val: CreateCourseArgs) -> Self {
        CreateCourse {
            title: val.title,
            region_code: val.region,
            days: val.days,
            total_distance: val.distance,
            is_public: val.public,
        }
    }
}

/// Show a course and its persisted schedule
#[derive(ClapArgs)]
pub struct ShowCourseArgs {
    #[arg(help = "Unique identifier of the course to show")]
    pub id: u64,
}

impl From<ShowCourseArgs> for Id {
    fn from(val: ShowCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a course permanently
#[derive(ClapArgs)]
pub struct DeleteCourseArgs {
    #[arg(help = "Unique identifier of the course to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteCourseArgs> for DeleteCourse {
    fn from(val: DeleteCourseArgs) -> Self {
        DeleteCourse {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Create a new course
    #[command(alias = "c")]
    Create(CreateCourseArgs),
    /// List all courses
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific course
    #[command(alias = "s")]
    Show(ShowCourseArgs),
    /// Delete a course permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCourseArgs),
}

// ============================================================================
// Spot commands
// ============================================================================

/// Add a spot to the catalog
#[derive(ClapArgs)]
pub struct CreateSpotArgs {
    /// Display name of the spot
    pub name: String,
    /// Free-text category, e.g. CAFE, RESTAURANT_KOREAN, HOTEL
    #[arg(short, long)]
    pub category: Option<String>,
    /// Street address
    #[arg(short, long)]
    pub address: Option<String>,
    /// Average rating between 0 and 5
    #[arg(short, long)]
    pub rating: Option<f64>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Image URLs or storage keys as comma-separated list"
    )]
    pub images: Vec<String>,
}

impl From<CreateSpotArgs> for CreateSpot {
    fn from(val: CreateSpotArgs) -> Self {
        CreateSpot {
            name: val.name,
            category: val.category,
            address: val.address,
            image_urls: val.images,
            rating: val.rating,
        }
    }
}

/// Show a spot from the catalog
#[derive(ClapArgs)]
pub struct ShowSpotArgs {
    #[arg(help = "Unique identifier of the spot to show")]
    pub id: u64,
}

impl From<ShowSpotArgs> for Id {
    fn from(val: ShowSpotArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum SpotCommands {
    /// Add a spot to the catalog
    #[command(alias = "c")]
    Create(CreateSpotArgs),
    /// List all spots
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single spot
    #[command(alias = "s")]
    Show(ShowSpotArgs),
}

// ============================================================================
// Itinerary commands
// ============================================================================

/// Show a course's itinerary with resolved spot details
#[derive(ClapArgs)]
pub struct ShowItineraryArgs {
    #[arg(help = "Unique identifier of the course")]
    pub course_id: u64,
}

impl From<ShowItineraryArgs> for Id {
    fn from(val: ShowItineraryArgs) -> Self {
        Id { id: val.course_id }
    }
}

/// Move a spot within a day or to another day
///
/// Days are 1-based, positions are 0-based. Within one day the spot ends up
/// at the destination position; across days it is inserted before the spot
/// currently at that position, or appended when the position equals the
/// day's length.
#[derive(ClapArgs)]
pub struct MoveSpotArgs {
    #[arg(help = "Unique identifier of the course")]
    pub course_id: u64,
    #[arg(help = "Day the spot is taken from (1-based)")]
    pub from_day: u32,
    #[arg(help = "Position of the spot within that day (0-based)")]
    pub from_index: usize,
    #[arg(help = "Day the spot is moved to (1-based)")]
    pub to_day: u32,
    #[arg(help = "Position within the destination day (0-based)")]
    pub to_index: usize,
}

impl From<MoveSpotArgs> for MoveSpot {
    fn from(val: MoveSpotArgs) -> Self {
        MoveSpot {
            course_id: val.course_id,
            source_day: val.from_day,
            source_index: val.from_index,
            dest_day: val.to_day,
            dest_index: val.to_index,
        }
    }
}

/// Append a spot from the catalog to a day
#[derive(ClapArgs)]
pub struct AddSpotArgs {
    #[arg(help = "Unique identifier of the course")]
    pub course_id: u64,
    #[arg(help = "Day to append to (1-based)")]
    pub day: u32,
    #[arg(help = "Unique identifier of the spot to add")]
    pub spot_id: u64,
}

impl From<AddSpotArgs> for AddSpot {
    fn from(val: AddSpotArgs) -> Self {
        AddSpot {
            course_id: val.course_id,
            day: val.day,
            spot_id: val.spot_id,
        }
    }
}

/// Remove a spot from a day
#[derive(ClapArgs)]
pub struct RemoveSpotArgs {
    #[arg(help = "Unique identifier of the course")]
    pub course_id: u64,
    #[arg(help = "Day to remove from (1-based)")]
    pub day: u32,
    #[arg(help = "Position of the spot within that day (0-based)")]
    pub index: usize,
}

impl From<RemoveSpotArgs> for RemoveSpot {
    fn from(val: RemoveSpotArgs) -> Self {
        RemoveSpot {
            course_id: val.course_id,
            day: val.day,
            index: val.index,
        }
    }
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Show the itinerary of a course
    #[command(alias = "s")]
    Show(ShowItineraryArgs),
    /// Move a spot within or across days and save
    #[command(alias = "mv")]
    Move(MoveSpotArgs),
    /// Append a spot to a day and save
    #[command(alias = "a")]
    Add(AddSpotArgs),
    /// Remove a spot from a day and save
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveSpotArgs),
}
