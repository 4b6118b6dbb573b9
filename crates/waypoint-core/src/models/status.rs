//! Editor mode enumeration.

use serde::{Deserialize, Serialize};

/// Mode of an editor session.
///
/// ```text
/// Viewing --enter_edit--> Editing --save--> Saving --ok--> Viewing
///                            ^                 |
///                            +-----failure-----+
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Read-only display of the persisted course
    #[default]
    Viewing,

    /// Drag, add and remove are accepted
    Editing,

    /// A persistence write is in flight
    Saving,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Viewing => "viewing",
            EditMode::Editing => "editing",
            EditMode::Saving => "saving",
        }
    }
}
