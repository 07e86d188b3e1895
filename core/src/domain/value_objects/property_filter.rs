//! Listing filter applied to the full property list.
//!
//! Mirrors the filter panel of the properties page: every field comes straight
//! from the query string, and a field that is empty, a catch-all choice or
//! unparsable does not restrict the listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Property;

const ALL_CITIES: &str = "All Cities";
const ALL_TYPES: &str = "All Types";
const ALL_AVAILABILITY: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    /// Case-insensitive substring of the city
    pub city: Option<String>,

    /// Case-insensitive property type
    #[serde(rename = "type")]
    pub property_type: Option<String>,

    /// Inclusive lower price bound
    pub min_price: Option<String>,

    /// Inclusive upper price bound
    pub max_price: Option<String>,

    /// "Available" or "Not Available"
    pub availability: Option<String>,

    /// "true" restricts to verified listings
    pub verified: Option<String>,
}

impl PropertyFilter {
    /// Returns the properties matching every active criterion, in input order
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = active(&self.city, ALL_CITIES) {
            if !property.city.to_lowercase().contains(&city.to_lowercase()) {
                return false;
            }
        }

        if let Some(property_type) = active(&self.property_type, ALL_TYPES) {
            if !property.property_type.eq_ignore_ascii_case(property_type) {
                return false;
            }
        }

        if let Some(min) = parse_price(&self.min_price) {
            if property.price < min {
                return false;
            }
        }

        if let Some(max) = parse_price(&self.max_price) {
            if property.price > max {
                return false;
            }
        }

        if let Some(availability) = active(&self.availability, ALL_AVAILABILITY) {
            if property.availability.as_str() != availability {
                return false;
            }
        }

        if self.verified.as_deref() == Some("true") && !property.verified {
            return false;
        }

        true
    }

    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        active(&self.city, ALL_CITIES).is_none()
            && active(&self.property_type, ALL_TYPES).is_none()
            && parse_price(&self.min_price).is_none()
            && parse_price(&self.max_price).is_none()
            && active(&self.availability, ALL_AVAILABILITY).is_none()
            && self.verified.as_deref() != Some("true")
    }
}

fn active<'a>(value: &'a Option<String>, catch_all: &str) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != catch_all)
}

/// Leading-integer parse, so "1500.50" bounds at 1500
fn parse_price(value: &Option<String>) -> Option<i64> {
    let trimmed = value.as_deref()?.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Availability;
    use chrono::NaiveDate;

    fn property(id: i64, city: &str, kind: &str, price: i64, verified: bool, available: bool) -> Property {
        Property {
            id,
            title: format!("Property {}", id),
            description: String::new(),
            city: city.to_string(),
            property_type: kind.to_string(),
            price,
            images: vec![],
            owner_id: 4,
            highlight: false,
            date_posted: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            verified,
            availability: if available {
                Availability::Available
            } else {
                Availability::NotAvailable
            },
        }
    }

    fn listing() -> Vec<Property> {
        vec![
            property(1, "New York", "Apartment", 2400, true, true),
            property(2, "Los Angeles", "House", 3100, false, true),
            property(3, "Chicago", "Condo", 1500, true, false),
            property(4, "Houston", "House", 850, true, true),
        ]
    }

    fn ids(properties: &[Property]) -> Vec<i64> {
        properties.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = PropertyFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&listing())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_city_is_case_insensitive_substring() {
        let filter = PropertyFilter {
            city: Some("york".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![1]);

        let filter = PropertyFilter {
            city: Some("All Cities".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&listing()).len(), 4);
    }

    #[test]
    fn test_type_is_case_insensitive_equality() {
        let filter = PropertyFilter {
            property_type: Some("house".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![2, 4]);

        let filter = PropertyFilter {
            property_type: Some("All Types".to_string()),
            ..Default::default()
        };
        assert!(filter.is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = PropertyFilter {
            min_price: Some("1500".to_string()),
            max_price: Some("2400".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![1, 3]);
    }

    #[test]
    fn test_unparsable_price_is_ignored() {
        let filter = PropertyFilter {
            min_price: Some("cheap".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&listing()).len(), 4);

        let filter = PropertyFilter {
            max_price: Some("1000.99".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![4]);
    }

    #[test]
    fn test_availability_and_verified() {
        let filter = PropertyFilter {
            availability: Some("Not Available".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![3]);

        let filter = PropertyFilter {
            verified: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![1, 3, 4]);

        let filter = PropertyFilter {
            verified: Some("false".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&listing()).len(), 4);
    }

    #[test]
    fn test_combined_criteria() {
        let filter = PropertyFilter {
            property_type: Some("House".to_string()),
            availability: Some("Available".to_string()),
            verified: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listing())), vec![4]);
    }

    #[test]
    fn test_deserializes_from_query_names() {
        let filter: PropertyFilter = serde_json::from_value(serde_json::json!({
            "city": "Chicago",
            "type": "Condo",
            "minPrice": "1000"
        }))
        .unwrap();
        assert_eq!(filter.property_type.as_deref(), Some("Condo"));
        assert_eq!(filter.min_price.as_deref(), Some("1000"));
    }
}
