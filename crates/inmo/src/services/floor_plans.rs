use crate::api::{ApiClient, ApiError};
use crate::models::{EntityId, FloorPlan, FloorPlanDraft};

#[derive(Debug, Clone)]
pub struct FloorPlanService {
    api: ApiClient,
}

impl FloorPlanService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_property(&self, property_id: EntityId) -> Result<Vec<FloorPlan>, ApiError> {
        self.api
            .get(
                &format!("/api/floor-plans/property/{property_id}"),
                "Error al obtener los planos",
            )
            .await
    }

    pub async fn create(&self, draft: &FloorPlanDraft) -> Result<FloorPlan, ApiError> {
        self.api
            .post("/api/floor-plans", draft, "Error al crear el plano")
            .await
    }

    /// Removes every plan of the property in one call.
    pub async fn delete_by_property(&self, property_id: EntityId) -> Result<(), ApiError> {
        self.api
            .delete(
                &format!("/api/floor-plans/property/{property_id}"),
                "Error al eliminar los planos",
            )
            .await
    }
}
