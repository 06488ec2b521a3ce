use crate::api::{ApiClient, ApiError};
use crate::models::{EntityId, NearbyFacility, NearbyFacilityLink, PropertyNearbyFacility};

/// Nearby-facility catalog and the per-property associations.
#[derive(Debug, Clone)]
pub struct NearbyFacilityService {
    api: ApiClient,
}

impl NearbyFacilityService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn catalog(&self) -> Result<Vec<NearbyFacility>, ApiError> {
        self.api
            .get("/api/nearby-facilities", "Error al obtener los lugares cercanos")
            .await
    }

    pub async fn get_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Vec<PropertyNearbyFacility>, ApiError> {
        self.api
            .get(
                &format!("/api/properties/{property_id}/nearby-facilities"),
                "Error al obtener los lugares cercanos de la propiedad",
            )
            .await
    }

    /// Associate a facility. A facility that is already linked answers 409,
    /// surfaced as [`ApiError::Conflict`].
    pub async fn add(
        &self,
        property_id: EntityId,
        link: &NearbyFacilityLink,
    ) -> Result<PropertyNearbyFacility, ApiError> {
        self.api
            .post(
                &format!("/api/properties/{property_id}/nearby-facilities"),
                link,
                "Error al asociar el lugar cercano",
            )
            .await
    }

    pub async fn remove(
        &self,
        property_id: EntityId,
        association_id: EntityId,
    ) -> Result<(), ApiError> {
        self.api
            .delete(
                &format!("/api/properties/{property_id}/nearby-facilities/{association_id}"),
                "Error al quitar el lugar cercano",
            )
            .await
    }
}
