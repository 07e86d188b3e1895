//! Property listing request types and the listing form model.

use rf_core::{Availability, Property, PropertyDraft, PROPERTY_CITIES, PROPERTY_TYPES};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or editing a listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PropertyRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub property_type: String,

    /// Monthly rent in whole dollars
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub availability: Availability,
}

impl From<PropertyRequest> for PropertyDraft {
    fn from(request: PropertyRequest) -> Self {
        PropertyDraft {
            title: request.title.trim().to_string(),
            description: request.description,
            city: request.city.trim().to_string(),
            property_type: request.property_type.trim().to_string(),
            price: request.price,
            images: request
                .images
                .into_iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
            availability: request.availability,
        }
    }
}

/// Model of the listing form page, optionally prefilled for an edit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFormPage {
    pub cities: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub availability: Vec<&'static str>,
    /// The listing being edited
    pub property: Option<Property>,
}

impl ListingFormPage {
    pub fn new(property: Option<Property>) -> Self {
        Self {
            cities: PROPERTY_CITIES.to_vec(),
            types: PROPERTY_TYPES.to_vec(),
            availability: vec![
                Availability::Available.as_str(),
                Availability::NotAvailable.as_str(),
            ],
            property,
        }
    }
}

/// Query of the listing form page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFormQuery {
    /// Id of the listing to edit
    pub edit: Option<i64>,
}
