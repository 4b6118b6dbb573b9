//! Display implementations for itineraries and editing sessions.

use std::fmt;

use crate::{
    backend::CourseBackend,
    itinerary::{DayState, EditorSession, Itinerary, ItineraryDay},
};

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## Day {}", self.day())?;
        match self.state() {
            DayState::Pending if !self.is_empty() => write!(f, " (loading)")?,
            DayState::Failed(message) => write!(f, " (failed: {message})")?,
            _ => {}
        }
        writeln!(f)?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "Nothing planned.");
        }

        for (index, entry) in self.entries().iter().enumerate() {
            match &entry.detail {
                Some(spot) => {
                    write!(f, "{index}. **{}**", spot.name)?;
                    if let Some(category) = spot.main_category() {
                        write!(f, " ({category})")?;
                    }
                    writeln!(f, " spot {}", spot.id)?;
                }
                None => writeln!(f, "{index}. spot {} (details unavailable)", entry.id)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_count() == 0 {
            return writeln!(f, "No days in this itinerary.");
        }
        for (index, day) in self.days().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Wrapper that displays a session's course header, mode and itinerary.
pub struct SessionView<'a, B: CourseBackend + ?Sized + 'static>(pub &'a EditorSession<B>);

impl<B: CourseBackend + ?Sized + 'static> fmt::Display for SessionView<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let course = session.course();

        writeln!(f, "# {}. {} ({})", course.id, course.title, session.mode())?;
        writeln!(f)?;
        if let Some(error) = session.last_error() {
            writeln!(f, "> {error}")?;
            writeln!(f)?;
        }
        if !session.draft().is_empty() {
            writeln!(f, "- Draft: {}", session.draft().title)?;
            writeln!(f)?;
        }
        write!(f, "{}", session.itinerary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpotDetail;

    #[test]
    fn test_day_display_marks_unresolved_entries() {
        let mut itinerary = Itinerary::from_day_ids(vec![vec![1, 2], vec![]]);
        itinerary.day_mut(1).unwrap().replace_resolved(vec![SpotDetail {
            id: 1,
            name: "Seongsan Ilchulbong".to_string(),
            category: Some("NATURE".to_string()),
            address: None,
            image_urls: vec![],
            rating: None,
        }]);
        let itinerary = itinerary.add_spot(1, 2).unwrap();

        let output = itinerary.to_string();
        assert!(output.contains("## Day 1\n"));
        assert!(output.contains("0. **Seongsan Ilchulbong** (NATURE) spot 1"));
        assert!(output.contains("1. spot 2 (details unavailable)"));
        assert!(output.contains("## Day 2\n\nNothing planned."));
    }

    #[test]
    fn test_failed_day_display() {
        let mut itinerary = Itinerary::from_day_ids(vec![vec![3]]);
        itinerary
            .day_mut(1)
            .unwrap()
            .mark_failed("lookup timed out".to_string());
        assert!(itinerary
            .to_string()
            .starts_with("## Day 1 (failed: lookup timed out)"));
    }
}
