//! DTOs mirrored from the backend. The backend owns every record; these are
//! the transient copies the screens work with.

pub mod catalog;
pub mod contact;
pub mod facility;
pub mod media;
pub mod property;
pub mod rental;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{
    City, CityDraft, CityZone, CityZoneDraft, Country, CountryDraft, Department, DepartmentDraft,
    Neighborhood, NeighborhoodDraft,
};
pub use contact::{Agent, AgentDraft, OwnerContact, OwnerContactDraft};
pub use facility::{
    Amenity, NearbyFacility, NearbyFacilityLink, PropertyNearbyFacility, PropertyServiceItem,
};
pub use media::{FloorPlan, FloorPlanDraft, GalleryImage, PrivateFile, UploadedFile};
pub use property::{OperationType, Property, PropertyPayload, PropertyStatus};
pub use rental::{RentalConfig, RentalConfigDraft};

/// Backend-assigned identifier shared by every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

pub(crate) fn default_true() -> bool {
    true
}
