use crate::api::{ApiClient, ApiError};
use crate::models::{
    Amenity, EntityId, Property, PropertyPayload, PropertyServiceItem, PropertyStatus,
};

/// The property resource plus the small catalogs the editor needs.
#[derive(Debug, Clone)]
pub struct PropertyService {
    api: ApiClient,
}

impl PropertyService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<Property>, ApiError> {
        self.api
            .get_optional(
                &format!("/api/properties/{id}"),
                "Error al obtener la propiedad",
            )
            .await
    }

    pub async fn create(&self, payload: &PropertyPayload) -> Result<Property, ApiError> {
        self.api
            .post("/api/properties", payload, "Error al crear la propiedad")
            .await
    }

    pub async fn update(
        &self,
        id: EntityId,
        payload: &PropertyPayload,
    ) -> Result<Property, ApiError> {
        self.api
            .put(
                &format!("/api/properties/{id}"),
                payload,
                "Error al actualizar la propiedad",
            )
            .await
    }

    pub async fn publish(&self, id: EntityId) -> Result<Property, ApiError> {
        self.api
            .post_action(
                &format!("/api/properties/{id}/publish"),
                "Error al publicar la propiedad",
            )
            .await
    }

    pub async fn statuses(&self) -> Result<Vec<PropertyStatus>, ApiError> {
        self.api
            .get(
                "/api/property-statuses",
                "Error al obtener los estados de propiedad",
            )
            .await
    }

    pub async fn amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        self.api
            .get("/api/amenities", "Error al obtener las comodidades")
            .await
    }

    pub async fn services(&self) -> Result<Vec<PropertyServiceItem>, ApiError> {
        self.api
            .get("/api/services", "Error al obtener los servicios")
            .await
    }
}
