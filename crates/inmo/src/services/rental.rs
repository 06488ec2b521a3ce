use crate::api::{ApiClient, ApiError};
use crate::models::{EntityId, RentalConfig, RentalConfigDraft};

/// Temporary-rental terms, at most one record per property.
#[derive(Debug, Clone)]
pub struct RentalConfigService {
    api: ApiClient,
}

impl RentalConfigService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Option<RentalConfig>, ApiError> {
        self.api
            .get_optional(
                &format!("/api/rental-configs/property/{property_id}"),
                "Error al obtener la configuración de alquiler",
            )
            .await
    }

    pub async fn create(&self, draft: &RentalConfigDraft) -> Result<RentalConfig, ApiError> {
        self.api
            .post(
                "/api/rental-configs",
                draft,
                "Error al crear la configuración de alquiler",
            )
            .await
    }

    pub async fn update(
        &self,
        id: EntityId,
        draft: &RentalConfigDraft,
    ) -> Result<RentalConfig, ApiError> {
        self.api
            .put(
                &format!("/api/rental-configs/{id}"),
                draft,
                "Error al actualizar la configuración de alquiler",
            )
            .await
    }
}
