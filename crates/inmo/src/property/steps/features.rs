use super::StepError;
use crate::models::{Amenity, EntityId, PropertyServiceItem};
use crate::property::form::PropertyForm;
use crate::services::Services;

/// Catalogs behind the amenities and services checkbox grids.
#[derive(Debug, Clone, Default)]
pub struct FeaturesStep {
    amenities: Vec<Amenity>,
    services: Vec<PropertyServiceItem>,
}

impl FeaturesStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    pub fn services(&self) -> &[PropertyServiceItem] {
        &self.services
    }

    pub async fn load(&mut self, services: &Services) -> Result<(), StepError> {
        self.amenities = services.properties.amenities().await?;
        self.services = services.properties.services().await?;
        Ok(())
    }

    pub fn toggle_amenity(&self, form: &mut PropertyForm, id: EntityId) -> bool {
        form.toggle_amenity(id);
        form.data.amenity_ids.contains(&id)
    }

    pub fn toggle_service(&self, form: &mut PropertyForm, id: EntityId) -> bool {
        form.toggle_service(id);
        form.data.service_ids.contains(&id)
    }
}
