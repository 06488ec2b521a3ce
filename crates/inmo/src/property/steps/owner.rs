use super::StepError;
use crate::models::{EntityId, OwnerContact, OwnerContactDraft};
use crate::property::fields::FieldChange;
use crate::property::form::PropertyForm;
use crate::services::{CatalogResource, Services};

/// Pick the owner among known contacts, or register a new one on the spot.
#[derive(Debug, Clone, Default)]
pub struct OwnerInfoStep {
    owners: Vec<OwnerContact>,
}

impl OwnerInfoStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owners(&self) -> &[OwnerContact] {
        &self.owners
    }

    pub fn selected<'a>(&'a self, form: &PropertyForm) -> Option<&'a OwnerContact> {
        let id = form.data.owner_contact_id?;
        self.owners.iter().find(|owner| owner.id == id)
    }

    pub async fn load(&mut self, services: &Services) -> Result<(), StepError> {
        self.owners = services.owners.get_all().await?;
        Ok(())
    }

    pub fn select(&self, form: &mut PropertyForm, owner_id: Option<EntityId>) {
        form.handle_change(FieldChange::OwnerContact(owner_id));
    }

    pub async fn create(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        mut draft: OwnerContactDraft,
    ) -> Result<OwnerContact, StepError> {
        OwnerContact::normalize_draft(&mut draft);
        OwnerContact::validate_draft(&draft).map_err(StepError::Validation)?;
        let owner = services.owners.create(&draft).await?;
        self.owners.push(owner.clone());
        form.handle_change(FieldChange::OwnerContact(Some(owner.id)));
        Ok(owner)
    }
}
