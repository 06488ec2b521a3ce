use super::StepError;
use crate::models::{EntityId, NearbyFacility, NearbyFacilityLink, PropertyNearbyFacility};
use crate::property::fields::FieldChange;
use crate::property::form::PropertyForm;
use crate::services::Services;

const ALREADY_ASSOCIATED: &str = "Este lugar ya está asociado a la propiedad";

/// Schools, hospitals, transit and the like near the property.
///
/// Editing a saved property posts and deletes associations immediately. For
/// a new property only the form's list changes; the save workflow creates the
/// associations afterwards.
#[derive(Debug, Clone, Default)]
pub struct NearbyFacilitiesStep {
    catalog: Vec<NearbyFacility>,
    associations: Vec<PropertyNearbyFacility>,
}

impl NearbyFacilitiesStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[NearbyFacility] {
        &self.catalog
    }

    pub async fn load(
        &mut self,
        services: &Services,
        form: &PropertyForm,
    ) -> Result<(), StepError> {
        self.catalog = services.nearby_facilities.catalog().await?;
        if let Some(property_id) = form.property_id() {
            self.associations = services.nearby_facilities.get_by_property(property_id).await?;
        }
        Ok(())
    }

    pub async fn add(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        link: NearbyFacilityLink,
    ) -> Result<(), StepError> {
        let linked = form
            .data
            .nearby_facilities
            .iter()
            .any(|existing| existing.nearby_facility_id == link.nearby_facility_id);
        if linked {
            return Err(StepError::Rejected(ALREADY_ASSOCIATED.to_string()));
        }

        if let Some(property_id) = form.property_id() {
            let association = match services.nearby_facilities.add(property_id, &link).await {
                Ok(association) => association,
                Err(err) if err.is_conflict() => {
                    return Err(StepError::Rejected(ALREADY_ASSOCIATED.to_string()))
                }
                Err(err) => return Err(err.into()),
            };
            self.associations.push(association);
        }

        let mut links = form.data.nearby_facilities.clone();
        links.push(link);
        form.handle_change(FieldChange::NearbyFacilities(links));
        Ok(())
    }

    pub async fn remove(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        facility_id: EntityId,
    ) -> Result<(), StepError> {
        if let Some(property_id) = form.property_id() {
            let association = self
                .associations
                .iter()
                .find(|association| association.nearby_facility_id == facility_id)
                .map(|association| association.id);
            if let Some(association_id) = association {
                services
                    .nearby_facilities
                    .remove(property_id, association_id)
                    .await?;
                self.associations.retain(|association| association.id != association_id);
            }
        }

        let links = form
            .data
            .nearby_facilities
            .iter()
            .filter(|link| link.nearby_facility_id != facility_id)
            .cloned()
            .collect();
        form.handle_change(FieldChange::NearbyFacilities(links));
        Ok(())
    }
}
