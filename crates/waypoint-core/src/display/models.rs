//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; all output is markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Course, CourseSlot, CourseSummary, EditMode, SlotType, SpotDetail};

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Region: {}", self.region_code)?;
        writeln!(f, "- Days: {}", self.days)?;
        writeln!(f, "- Distance: {:.1} km", self.total_distance)?;
        writeln!(
            f,
            "- Visibility: {}",
            if self.is_public { "public" } else { "private" }
        )?;
        if !self.selected_categories.is_empty() {
            writeln!(f, "- Categories: {}", self.selected_categories.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.scheduled_spots() == 0 {
            return writeln!(f, "\nNo spots scheduled yet.");
        }

        for (index, slots) in self.course_slots.iter().enumerate() {
            writeln!(f, "\n## Day {}", index + 1)?;
            writeln!(f)?;
            if slots.is_empty() {
                writeln!(f, "Nothing planned.")?;
            }
            for slot in slots {
                write!(f, "{slot}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CourseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. **{}** ({})", self.slot, self.slot_name, self.slot_type)?;
        if let Some(id) = self.selected_spot_id {
            write!(f, " spot {id}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SpotDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;
        if let Some(category) = self.main_category() {
            writeln!(f, "- Category: {category}")?;
        }
        if let Some(address) = &self.address {
            writeln!(f, "- Address: {address}")?;
        }
        if let Some(rating) = self.rating {
            writeln!(f, "- Rating: {rating:.1}")?;
        }
        if !self.image_urls.is_empty() {
            writeln!(f, "- Images: {}", self.image_urls.len())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spots = match self.total_spots {
            0 => String::new(),
            1 => " (1 spot)".to_string(),
            n => format!(" ({n} spots)"),
        };

        writeln!(f, "## {} (ID: {}){spots}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Region**: {}", self.region_code)?;
        writeln!(f, "- **Days**: {}", self.days)?;
        if self.is_public {
            writeln!(f, "- **Public**")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn course() -> Course {
        Course {
            id: 4,
            title: "Gyeongju".to_string(),
            days: 2,
            region_code: "GYEONGJU".to_string(),
            total_distance: 8.4,
            course_slots: vec![
                vec![CourseSlot::selected(1, 1, SlotType::Tourism, None, "Bulguksa", 10)],
                vec![],
            ],
            selected_categories: vec!["history".to_string()],
            is_public: true,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_course_display() {
        let output = course().to_string();
        assert!(output.starts_with("# 4. Gyeongju\n"));
        assert!(output.contains("- Distance: 8.4 km"));
        assert!(output.contains("- Visibility: public"));
        assert!(output.contains("## Day 1"));
        assert!(output.contains("1. **Bulguksa** (TOURISM) spot 10"));
        assert!(output.contains("## Day 2\n\nNothing planned."));
    }

    #[test]
    fn test_empty_course_display() {
        let mut course = course();
        course.course_slots = vec![vec![], vec![]];
        assert!(course.to_string().ends_with("No spots scheduled yet.\n"));
    }

    #[test]
    fn test_spot_display_skips_blank_category() {
        let spot = SpotDetail {
            id: 1,
            name: "Tongin Market".to_string(),
            category: Some(" ".to_string()),
            address: None,
            image_urls: vec![],
            rating: Some(4.0),
        };
        let output = spot.to_string();
        assert!(output.contains("### 1. Tongin Market"));
        assert!(!output.contains("Category"));
        assert!(output.contains("- Rating: 4.0"));
    }
}
