//! Pure mapping from a listing to its card display fields.

use wayfarer_types::listing::Listing;

use super::format::{format_count, format_price, format_stars};

/// Description truncation threshold, in characters.
pub const DESCRIPTION_LIMIT: usize = 140;

/// Fallback title for unnamed listings.
const UNNAMED_LISTING: &str = "Vacation rental";

/// Fallback body for listings without a description.
const NO_DESCRIPTION: &str = "No description available.";

/// One labeled stat on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStat {
    pub label: &'static str,
    pub value: String,
}

/// Derived display fields for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub title: String,
    pub price_display: String,
    /// "Bangkok - Entire home/apt" style subtitle, when either part exists.
    pub location_line: Option<String>,
    pub stats: Vec<CardStat>,
    /// Description as shown: full when expanded or short, truncated with an
    /// ellipsis otherwise.
    pub description: String,
    /// Whether the description exceeds the threshold (the toggle is only
    /// shown when it does).
    pub has_long_description: bool,
    pub expanded: bool,
    pub image_url: Option<String>,
    pub listing_url: Option<String>,
}

/// Build the display fields for one listing.
///
/// `expanded` is the card's transient toggle state, owned by the view and
/// scoped to this single card -- it is passed in rather than stored here.
pub fn build_card(listing: &Listing, expanded: bool) -> ListingCard {
    let full_description = listing.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let has_long_description = full_description.chars().count() > DESCRIPTION_LIMIT;

    let description = if has_long_description && !expanded {
        let truncated: String = full_description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{truncated}...")
    } else {
        full_description.to_string()
    };

    let location_line = match (listing.city.as_deref(), listing.room_type.as_deref()) {
        (Some(city), Some(room_type)) => Some(format!("{city} - {room_type}")),
        (Some(city), None) => Some(city.to_string()),
        (None, Some(room_type)) => Some(room_type.to_string()),
        (None, None) => None,
    };

    ListingCard {
        title: listing
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_LISTING.to_string()),
        price_display: format_price(&listing.price),
        location_line,
        stats: vec![
            CardStat { label: "Bedrooms", value: format_count(listing.bedrooms) },
            CardStat { label: "Bathrooms", value: format_count(listing.bathrooms) },
            CardStat { label: "Beds", value: format_count(listing.beds) },
            CardStat { label: "Guests", value: format_count(listing.guests) },
            CardStat { label: "Rating", value: format_stars(listing.stars) },
            CardStat { label: "Reviews", value: format_count(listing.review_count) },
        ],
        description,
        has_long_description,
        expanded,
        image_url: listing.image_url.clone(),
        listing_url: listing.listing_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_types::listing::PriceValue;

    fn base_listing() -> Listing {
        Listing {
            id: "1".to_string(),
            image_url: None,
            listing_url: None,
            name: Some("Sukhumvit Loft".to_string()),
            description: None,
            stars: None,
            price: PriceValue::Missing,
            bedrooms: None,
            bathrooms: None,
            beds: None,
            guests: None,
            review_count: None,
            city: None,
            room_type: None,
        }
    }

    #[test]
    fn test_missing_fields_render_sentinel() {
        let card = build_card(&base_listing(), false);
        for stat in &card.stats {
            assert_eq!(stat.value, "N/A", "stat {} should be N/A", stat.label);
        }
        assert_eq!(card.price_display, "N/A");
    }

    #[test]
    fn test_numeric_string_price_formats() {
        let mut listing = base_listing();
        listing.price = PriceValue::Numeric(1234.5);
        let card = build_card(&listing, false);
        assert_eq!(card.price_display, "1,235");
    }

    #[test]
    fn test_raw_price_shown_unchanged() {
        let mut listing = base_listing();
        listing.price = PriceValue::Raw("N/A-literal".to_string());
        let card = build_card(&listing, false);
        assert_eq!(card.price_display, "N/A-literal");
    }

    #[test]
    fn test_stars_one_decimal() {
        let mut listing = base_listing();
        listing.stars = Some(4.83);
        let card = build_card(&listing, false);
        let rating = card.stats.iter().find(|s| s.label == "Rating").unwrap();
        assert_eq!(rating.value, "4.8");
    }

    #[test]
    fn test_long_description_truncates_to_limit_plus_ellipsis() {
        let mut listing = base_listing();
        listing.description = Some("x".repeat(200));
        let card = build_card(&listing, false);

        assert!(card.has_long_description);
        assert_eq!(card.description.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(card.description.ends_with("..."));
        assert_eq!(
            card.description.chars().take(DESCRIPTION_LIMIT).count(),
            140
        );
    }

    #[test]
    fn test_expand_toggle_restores_and_reverts() {
        let mut listing = base_listing();
        let full = "y".repeat(200);
        listing.description = Some(full.clone());

        let expanded = build_card(&listing, true);
        assert_eq!(expanded.description, full);
        assert!(expanded.expanded);

        let collapsed = build_card(&listing, false);
        assert!(collapsed.description.ends_with("..."));
        assert_ne!(collapsed.description, full);
    }

    #[test]
    fn test_short_description_never_truncated() {
        let mut listing = base_listing();
        listing.description = Some("Cozy place.".to_string());
        let card = build_card(&listing, false);
        assert!(!card.has_long_description);
        assert_eq!(card.description, "Cozy place.");
    }

    #[test]
    fn test_missing_description_fallback() {
        let card = build_card(&base_listing(), false);
        assert_eq!(card.description, "No description available.");
    }

    #[test]
    fn test_location_line_variants() {
        let mut listing = base_listing();
        listing.city = Some("Bangkok".to_string());
        listing.room_type = Some("Entire home/apt".to_string());
        assert_eq!(
            build_card(&listing, false).location_line.as_deref(),
            Some("Bangkok - Entire home/apt")
        );

        listing.room_type = None;
        assert_eq!(
            build_card(&listing, false).location_line.as_deref(),
            Some("Bangkok")
        );

        listing.city = None;
        assert!(build_card(&listing, false).location_line.is_none());
    }

    #[test]
    fn test_unnamed_listing_fallback_title() {
        let mut listing = base_listing();
        listing.name = None;
        assert_eq!(build_card(&listing, false).title, "Vacation rental");
    }
}
