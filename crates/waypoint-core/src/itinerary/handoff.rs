//! Events exchanged between an editing session and the spot search screen.

use serde::{Deserialize, Serialize};

/// Unsaved post content carried across screens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.images.is_empty()
    }
}

/// Request to open spot search for one day.
///
/// Carries everything needed to rebuild the session afterwards without
/// losing unsaved edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHandoff {
    pub course_id: u64,
    /// Day the chosen spot will be added to
    pub target_day: u32,
    #[serde(default)]
    pub draft: Draft,
    /// Store ids of every day at the time of the hand-off
    pub selected_spots: Vec<Vec<u64>>,
    /// Epoch observed when the hand-off was created
    pub epoch: u64,
}

/// A spot chosen on the search screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpotAdded {
    pub day: u32,
    pub spot_id: u64,
}

impl SearchHandoff {
    /// The event produced when `spot_id` is chosen for this hand-off's day.
    pub fn spot_added(&self, spot_id: u64) -> SpotAdded {
        SpotAdded {
            day: self.target_day,
            spot_id,
        }
    }
}
