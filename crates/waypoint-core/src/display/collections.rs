//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{CourseSummary, SpotDetail};

/// Newtype wrapper for displaying course summaries.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::CourseSummaries, models::CourseSummary};
/// use jiff::Timestamp;
///
/// let summary = CourseSummary {
///     id: 1,
///     title: "Seoul in two days".to_string(),
///     region_code: "SEOUL".to_string(),
///     days: 2,
///     total_spots: 5,
///     is_public: false,
///     created_at: Timestamp::now(),
/// };
///
/// let output = CourseSummaries(vec![summary]).to_string();
/// assert!(output.contains("Seoul in two days"));
/// ```
pub struct CourseSummaries(pub Vec<CourseSummary>);

impl CourseSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseSummary> {
        self.0.iter()
    }
}

impl Index<usize> for CourseSummaries {
    type Output = CourseSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CourseSummaries {
    type Item = &'a CourseSummary;
    type IntoIter = std::slice::Iter<'a, CourseSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CourseSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No courses found.")
        } else {
            for course in &self.0 {
                write!(f, "{course}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying spots from the catalog.
pub struct Spots(pub Vec<SpotDetail>);

impl Spots {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpotDetail> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Spots {
    type Item = &'a SpotDetail;
    type IntoIter = std::slice::Iter<'a, SpotDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Spots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No spots found.")
        } else {
            for spot in &self.0 {
                write!(f, "{spot}")?;
            }
            Ok(())
        }
    }
}
