//! Category to slot type mapping.

use crate::models::SlotType;

/// Keywords per slot type, matched against the upper-cased category.
const KEYWORDS: &[(SlotType, &[&str])] = &[
    (SlotType::Restaurant, &["RESTAURANT", "DINING", "EATERY"]),
    (SlotType::Cafe, &["CAFE", "CAFÉ", "COFFEE", "BAKERY", "DESSERT"]),
    (
        SlotType::Accommodation,
        &[
            "ACCOMMODATION",
            "HOTEL",
            "LODGING",
            "STAY",
            "MOTEL",
            "HOSTEL",
            "RESORT",
            "PENSION",
            "GUESTHOUSE",
        ],
    ),
];

/// Maps a free-text spot category to its slot type.
///
/// Matching is case-insensitive and looks for any keyword inside the
/// category, so backend enum tokens such as `CAFE_SMALL` classify the same as
/// plain words. Categories that match nothing, including the empty string,
/// are [`SlotType::Tourism`].
pub fn classify(category: &str) -> SlotType {
    let normalized = category.trim().to_uppercase();
    if normalized.is_empty() {
        return SlotType::Tourism;
    }
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| normalized.contains(word)))
        .map(|(slot_type, _)| *slot_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(classify("restaurant"), SlotType::Restaurant);
        assert_eq!(classify("Fine Dining"), SlotType::Restaurant);
        assert_eq!(classify("CAFE_SMALL"), SlotType::Cafe);
        assert_eq!(classify("café"), SlotType::Cafe);
        assert_eq!(classify("bakery"), SlotType::Cafe);
        assert_eq!(classify("HOTEL"), SlotType::Accommodation);
        assert_eq!(classify("guesthouse"), SlotType::Accommodation);
    }

    #[test]
    fn test_classify_defaults_to_tourism() {
        for category in ["", "   ", "festival", "HISTORY_CULTURE", "NATURE", "THEME_PARK", "MARKET"] {
            assert_eq!(classify(category), SlotType::Tourism, "{category:?}");
        }
    }
}
