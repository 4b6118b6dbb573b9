//! Conversion of a resolved itinerary into the persisted day×slot schedule.

use std::collections::HashSet;

use super::{classify, Itinerary};
use crate::models::{CourseSlot, SlotType};

/// Persisted schedule built from an itinerary's display view.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// One list per day; slots are numbered from 1 without gaps
    pub course_slots: Vec<Vec<CourseSlot>>,
    /// Lower-cased categories of all slots, in first-seen order
    pub selected_categories: Vec<String>,
}

impl Schedule {
    /// Builds the schedule from the resolved spots of every day.
    ///
    /// Slot numbers are recomputed from scratch, so the result never depends
    /// on numbering that was persisted before. Unresolved entries have no
    /// details to describe them and are not part of the schedule.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let mut seen = HashSet::new();
        let mut selected_categories = Vec::new();

        let course_slots = itinerary
            .days()
            .map(|day| {
                day.spots()
                    .zip(1u32..)
                    .map(|(spot, slot)| {
                        let main_category = spot.main_category().map(str::to_string);
                        let slot_type = main_category
                            .as_deref()
                            .map(classify)
                            .unwrap_or(SlotType::Tourism);

                        if let Some(category) = &main_category {
                            let lowered = category.to_lowercase();
                            if seen.insert(lowered.clone()) {
                                selected_categories.push(lowered);
                            }
                        }

                        CourseSlot::selected(
                            day.day(),
                            slot,
                            slot_type,
                            main_category,
                            spot.name.clone(),
                            spot.id,
                        )
                    })
                    .collect()
            })
            .collect();

        Self {
            course_slots,
            selected_categories,
        }
    }

    /// Number of scheduled slots across all days.
    pub fn slot_count(&self) -> usize {
        self.course_slots.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::SpotDetail;

    fn spot(id: u64, name: &str, category: Option<&str>) -> SpotDetail {
        SpotDetail {
            id,
            name: name.to_string(),
            category: category.map(str::to_string),
            address: None,
            image_urls: vec![],
            rating: None,
        }
    }

    fn resolved(days: Vec<Vec<SpotDetail>>) -> Itinerary {
        let ids = days
            .iter()
            .map(|spots| spots.iter().map(|s| s.id).collect())
            .collect();
        let mut itinerary = Itinerary::from_day_ids(ids);
        for (spots, day) in days.into_iter().zip(1u32..) {
            itinerary.day_mut(day).unwrap().replace_resolved(spots);
        }
        itinerary
    }

    #[test]
    fn test_single_cafe_schedule() {
        let itinerary = resolved(vec![vec![spot(1, "Blue Bottle", Some("CAFE"))], vec![]]);

        let schedule = Schedule::from_itinerary(&itinerary);

        let slots = serde_json::to_value(&schedule.course_slots).unwrap();
        assert_eq!(
            slots,
            json!([
                [{
                    "day": 1,
                    "slot": 1,
                    "slotType": "CAFE",
                    "mainCategory": "CAFE",
                    "slotName": "Blue Bottle",
                    "recommendedSpotIds": [],
                    "selectedSpotId": 1,
                    "isContinue": null,
                    "empty": false,
                    "hasRecommendations": false,
                    "hasSelectedSpot": true
                }],
                []
            ])
        );
        assert_eq!(schedule.selected_categories, vec!["cafe"]);
    }

    #[test]
    fn test_slots_are_contiguous_per_day() {
        let itinerary = resolved(vec![
            vec![
                spot(1, "A", Some("RESTAURANT")),
                spot(2, "B", Some("TOURISM")),
                spot(3, "C", Some("HOTEL")),
            ],
            vec![spot(4, "D", None), spot(5, "E", Some("cafe"))],
        ]);

        let schedule = Schedule::from_itinerary(&itinerary);

        for (day, slots) in schedule.course_slots.iter().enumerate() {
            let numbers: Vec<u32> = slots.iter().map(|s| s.slot).collect();
            let expected: Vec<u32> = (1..=slots.len() as u32).collect();
            assert_eq!(numbers, expected);
            assert!(slots.iter().all(|s| s.day == day as u32 + 1));
        }
        assert_eq!(schedule.slot_count(), itinerary.total_spots());
        assert_eq!(
            schedule.course_slots[0]
                .iter()
                .map(|s| s.slot_type)
                .collect::<Vec<_>>(),
            vec![SlotType::Restaurant, SlotType::Tourism, SlotType::Accommodation]
        );
    }

    #[test]
    fn test_blank_category_is_null_and_not_selected() {
        let itinerary = resolved(vec![vec![
            spot(1, "A", Some("  ")),
            spot(2, "B", Some("Cafe")),
            spot(3, "C", Some("CAFE")),
            spot(4, "D", Some("market")),
        ]]);

        let schedule = Schedule::from_itinerary(&itinerary);

        let first = &schedule.course_slots[0][0];
        assert_eq!(first.main_category, None);
        assert_eq!(first.slot_type, SlotType::Tourism);
        assert_eq!(schedule.selected_categories, vec!["cafe", "market"]);
    }
}
