//! Listing, browsing and owner management of properties

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::services::require_role;
use crate::domain::entities::{
    Property, PropertyDraft, PropertyId, Role, User, TIME_SLOTS,
};
use crate::domain::value_objects::{BookingWindow, PropertyFilter};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{PropertyRepository, UserRepository};

/// How many properties each home page section shows
pub const FEATURED_LIMIT: usize = 4;

/// Home page sections
#[derive(Debug, Clone, Serialize)]
pub struct HomeListing {
    /// Highlighted properties
    pub featured: Vec<Property>,
    /// Newest properties by posting date
    pub recent: Vec<Property>,
}

/// Everything the property details page shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub property: Property,
    /// Contact for the listing; absent when the owner no longer exists
    pub owner: Option<User>,
    pub booking_window: BookingWindow,
    pub time_slots: Vec<&'static str>,
}

/// Service for public listings and owner-side listing management
pub struct PropertyService<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    user_repository: Arc<U>,
    property_repository: Arc<P>,
}

impl<U, P> PropertyService<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    pub fn new(user_repository: Arc<U>, property_repository: Arc<P>) -> Self {
        Self {
            user_repository,
            property_repository,
        }
    }

    /// Featured and recent sections of the home page
    pub async fn home(&self) -> DomainResult<HomeListing> {
        let properties = self.property_repository.list().await?;

        let featured = properties
            .iter()
            .filter(|p| p.highlight)
            .take(FEATURED_LIMIT)
            .cloned()
            .collect();

        let mut recent = properties;
        recent.sort_by(|a, b| b.date_posted.cmp(&a.date_posted));
        recent.truncate(FEATURED_LIMIT);

        Ok(HomeListing { featured, recent })
    }

    /// Full listing narrowed by the filter panel
    pub async fn browse(&self, filter: &PropertyFilter) -> DomainResult<Vec<Property>> {
        let properties = self.property_repository.list().await?;
        if filter.is_empty() {
            return Ok(properties);
        }
        let matched = filter.apply(&properties);
        debug!(total = properties.len(), matched = matched.len(), "Filtered listing");
        Ok(matched)
    }

    /// Store-side equality search, parameters passed through untouched
    pub async fn search(&self, params: &[(String, String)]) -> DomainResult<Vec<Property>> {
        self.property_repository.search(params).await
    }

    /// A property with its owner's contact and the bookable dates
    pub async fn details(&self, id: PropertyId) -> DomainResult<PropertyDetails> {
        let property = self.find(id).await?;
        let owner = self.user_repository.find_by_id(property.owner_id).await?;

        Ok(PropertyDetails {
            property,
            owner,
            booking_window: BookingWindow::starting_after(Utc::now().date_naive()),
            time_slots: TIME_SLOTS.to_vec(),
        })
    }

    /// A property the signed-in owner may edit
    pub async fn editable(&self, owner: &User, id: PropertyId) -> DomainResult<Property> {
        require_role(owner, Role::Owner)?;
        let property = self.find(id).await?;
        ensure_owned(owner, &property)?;
        Ok(property)
    }

    /// Publish a new listing for the signed-in owner
    pub async fn create_listing(&self, owner: &User, draft: PropertyDraft) -> DomainResult<Property> {
        require_role(owner, Role::Owner)?;
        validate_draft(&draft)?;

        let property = self
            .property_repository
            .create(draft.into_new(owner.id, Utc::now().date_naive()))
            .await?;
        info!(property_id = property.id, owner_id = owner.id, "Listing created");
        Ok(property)
    }

    /// Edit one of the owner's listings
    pub async fn update_listing(
        &self,
        owner: &User,
        id: PropertyId,
        draft: PropertyDraft,
    ) -> DomainResult<Property> {
        validate_draft(&draft)?;
        let mut property = self.editable(owner, id).await?;
        draft.apply_to(&mut property);

        let property = self.property_repository.replace(property).await?;
        info!(property_id = property.id, "Listing updated");
        Ok(property)
    }

    /// Remove one of the owner's listings
    pub async fn delete_listing(&self, owner: &User, id: PropertyId) -> DomainResult<()> {
        self.editable(owner, id).await?;
        self.property_repository.delete(id).await?;
        info!(property_id = id, owner_id = owner.id, "Listing deleted");
        Ok(())
    }

    async fn find(&self, id: PropertyId) -> DomainResult<Property> {
        self.property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Property {}", id)))
    }
}

fn ensure_owned(owner: &User, property: &Property) -> DomainResult<()> {
    if property.is_owned_by(owner.id) {
        Ok(())
    } else {
        Err(AuthError::NotResourceOwner.into())
    }
}

fn validate_draft(draft: &PropertyDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "title".to_string(),
        });
    }
    if draft.city.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "city".to_string(),
        });
    }
    if draft.price <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "1".to_string(),
            max: i64::MAX.to_string(),
        });
    }
    Ok(())
}
