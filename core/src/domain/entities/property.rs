//! Property entity representing a rental listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Identifier assigned to properties by the resource store
pub type PropertyId = i64;

/// Image used when a listing is created without pictures
pub const DEFAULT_PROPERTY_IMAGE: &str = "https://picsum.photos/800/600";

/// Cities offered by the listing form
pub const PROPERTY_CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

/// Property types offered by the listing form
pub const PROPERTY_TYPES: [&str; 5] = ["Apartment", "House", "Condo", "Studio", "Villa"];

/// Whether a property can currently be rented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::NotAvailable => "Not Available",
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::Available
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Availability::Available),
            "Not Available" => Ok(Availability::NotAvailable),
            _ => Err(format!("Invalid availability: {}", s)),
        }
    }
}

/// A rental listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: String,
    /// Monthly rent in whole dollars
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: UserId,
    /// Featured on the home page
    #[serde(default)]
    pub highlight: bool,
    pub date_posted: NaiveDate,
    /// Approved by an administrator
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub availability: Availability,
}

impl Property {
    /// Marks the property as verified by an administrator
    pub fn verify(&mut self) {
        self.verified = true;
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// A listing that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: i64,
    pub images: Vec<String>,
    pub owner_id: UserId,
    pub highlight: bool,
    pub date_posted: NaiveDate,
    pub verified: bool,
    pub availability: Availability,
}

impl NewProperty {
    /// Attaches the identifier assigned by the store
    pub fn with_id(self, id: PropertyId) -> Property {
        Property {
            id,
            title: self.title,
            description: self.description,
            city: self.city,
            property_type: self.property_type,
            price: self.price,
            images: self.images,
            owner_id: self.owner_id,
            highlight: self.highlight,
            date_posted: self.date_posted,
            verified: self.verified,
            availability: self.availability,
        }
    }
}

/// Owner-editable fields of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
}

impl PropertyDraft {
    /// A new unverified, unhighlighted listing posted on `today`.
    ///
    /// Without images the listing gets [`DEFAULT_PROPERTY_IMAGE`].
    pub fn into_new(self, owner_id: UserId, today: NaiveDate) -> NewProperty {
        let images = if self.images.is_empty() {
            vec![DEFAULT_PROPERTY_IMAGE.to_string()]
        } else {
            self.images
        };

        NewProperty {
            title: self.title,
            description: self.description,
            city: self.city,
            property_type: self.property_type,
            price: self.price,
            images,
            owner_id,
            highlight: false,
            date_posted: today,
            verified: false,
            availability: self.availability,
        }
    }

    /// Overwrites the editable fields of `property`; empty images keep the
    /// existing ones
    pub fn apply_to(self, property: &mut Property) {
        property.title = self.title;
        property.description = self.description;
        property.city = self.city;
        property.property_type = self.property_type;
        property.price = self.price;
        property.availability = self.availability;
        if !self.images.is_empty() {
            property.images = self.images;
        }
    }
}
