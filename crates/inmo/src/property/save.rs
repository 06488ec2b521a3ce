//! `perform_save`: the one routine behind "save draft", "publish" and the
//! edit page's submit.
//!
//! The property record is created or updated first. Gallery images, private
//! files, floor plans, nearby facilities and rental terms follow one after
//! another, each in its own error boundary. A failing sub-resource becomes a
//! [`SaveWarning`]; the property record that was already written stays as it
//! is, so the two can diverge until the next save.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use super::form::PropertyForm;
use super::payload::build_property_payload;
use crate::api::ApiError;
use crate::models::{EntityId, FloorPlanDraft, Property, RentalConfigDraft};
use crate::services::Services;

const FLOOR_PLAN_UPLOAD_DIR: &str = "floor-plans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStep {
    Images,
    PrivateFiles,
    FloorPlans,
    NearbyFacilities,
    RentalConfig,
}

impl fmt::Display for SaveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaveStep::Images => "imágenes",
            SaveStep::PrivateFiles => "archivos privados",
            SaveStep::FloorPlans => "planos",
            SaveStep::NearbyFacilities => "lugares cercanos",
            SaveStep::RentalConfig => "configuración de alquiler",
        };
        f.write_str(label)
    }
}

/// Non-blocking problem found after the property itself was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveWarning {
    pub step: SaveStep,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub property: Property,
    pub created: bool,
    pub as_draft: bool,
    pub warnings: Vec<SaveWarning>,
}

impl SaveOutcome {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("No se encontró el estado \"Borrador\" en el servidor")]
    DraftStatusMissing,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Runs the save sequence against the backend services.
#[derive(Debug, Clone)]
pub struct PropertySaver {
    services: Services,
}

impl PropertySaver {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub async fn perform_save(
        &self,
        form: &mut PropertyForm,
        as_draft: bool,
    ) -> Result<SaveOutcome, SaveError> {
        let status_id = if as_draft {
            Some(self.draft_status_id().await?)
        } else {
            form.data.status_id
        };

        let payload = build_property_payload(&form.data, status_id);
        let (property, created) = match form.property_id() {
            Some(id) => (self.services.properties.update(id, &payload).await?, false),
            None => (self.services.properties.create(&payload).await?, true),
        };
        let property_id = property.id;
        form.mark_saved(property_id);
        form.set_status(property.status_id.or(status_id));
        info!(%property_id, created, as_draft, "property saved");

        let mut warnings = Vec::new();
        let mut record = |step: SaveStep, message: String| {
            warn!(%property_id, %step, error = %message, "property sub-resource failed to sync");
            warnings.push(SaveWarning { step, message });
        };

        if let Err(err) = self.upload_images(form, property_id).await {
            record(SaveStep::Images, err.to_string());
        }
        for err in self.upload_private_files(form, property_id).await {
            record(SaveStep::PrivateFiles, err.to_string());
        }
        for message in self.sync_floor_plans(form, property_id).await {
            record(SaveStep::FloorPlans, message);
        }
        for err in self.sync_nearby_facilities(form, property_id).await {
            record(SaveStep::NearbyFacilities, err.to_string());
        }
        if form.data.is_temporary_rent() {
            if let Err(err) = self.upsert_rental_config(form, property_id).await {
                record(SaveStep::RentalConfig, err.to_string());
            }
        }

        if !form.pending.is_empty() {
            // Uploads that failed stay pending for the next attempt.
            form.mark_dirty();
        }

        Ok(SaveOutcome {
            property,
            created,
            as_draft,
            warnings,
        })
    }

    async fn draft_status_id(&self) -> Result<EntityId, SaveError> {
        let statuses = self.services.properties.statuses().await?;
        statuses
            .iter()
            .find(|status| status.is_draft())
            .map(|status| status.id)
            .ok_or(SaveError::DraftStatusMissing)
    }

    async fn upload_images(
        &self,
        form: &mut PropertyForm,
        property_id: EntityId,
    ) -> Result<(), ApiError> {
        let images = form.pending.take_images();
        if images.is_empty() {
            return Ok(());
        }
        match self.services.gallery.upload(property_id, images.clone()).await {
            Ok(uploaded) => {
                info!(%property_id, count = uploaded.len(), "gallery images uploaded");
                Ok(())
            }
            Err(err) => {
                form.pending.restore_images(images);
                Err(err)
            }
        }
    }

    async fn upload_private_files(
        &self,
        form: &mut PropertyForm,
        property_id: EntityId,
    ) -> Vec<ApiError> {
        let mut failures = Vec::new();
        for file in form.pending.take_private_files() {
            if let Err(err) = self
                .services
                .private_files
                .upload(property_id, file.clone())
                .await
            {
                form.pending.add_private_file(file);
                failures.push(err);
            }
        }
        failures
    }

    /// Full replacement: every stored plan is deleted, then every local plan
    /// is created again. No per-plan diffing. Returns one message per
    /// failure.
    async fn sync_floor_plans(
        &self,
        form: &mut PropertyForm,
        property_id: EntityId,
    ) -> Vec<String> {
        let mut failures = Vec::new();

        for (index, file) in form.pending.take_floor_plan_images() {
            let Some(plan) = form.data.floor_plans.get_mut(index) else {
                failures.push(format!(
                    "La imagen {} no corresponde a ningún plano y no se subió",
                    file.file_name
                ));
                continue;
            };
            match self
                .services
                .files
                .upload(FLOOR_PLAN_UPLOAD_DIR, file.clone())
                .await
            {
                Ok(uploaded) => plan.image_url = Some(uploaded.url),
                Err(err) => {
                    form.pending.set_floor_plan_image(index, file);
                    failures.push(err.to_string());
                }
            }
        }

        let existing = match self.services.floor_plans.get_by_property(property_id).await {
            Ok(existing) => existing,
            Err(err) => {
                failures.push(err.to_string());
                return failures;
            }
        };
        if !existing.is_empty() {
            if let Err(err) = self.services.floor_plans.delete_by_property(property_id).await {
                // Recreating on top of the old plans would duplicate them.
                failures.push(err.to_string());
                return failures;
            }
        }

        for (order, plan) in form.data.floor_plans.iter().enumerate() {
            let draft = FloorPlanDraft {
                property_id: Some(property_id),
                display_order: order as u32,
                ..plan.clone()
            };
            if let Err(err) = self.services.floor_plans.create(&draft).await {
                failures.push(err.to_string());
            }
        }
        failures
    }

    /// Full replacement: delete every stored association, then create every
    /// local one. A 409 on create means the link already exists.
    async fn sync_nearby_facilities(
        &self,
        form: &PropertyForm,
        property_id: EntityId,
    ) -> Vec<ApiError> {
        let service = &self.services.nearby_facilities;
        let mut failures = Vec::new();

        match service.get_by_property(property_id).await {
            Ok(existing) => {
                for association in existing {
                    if let Err(err) = service.remove(property_id, association.id).await {
                        failures.push(err);
                    }
                }
            }
            Err(err) => failures.push(err),
        }

        for link in &form.data.nearby_facilities {
            match service.add(property_id, link).await {
                Ok(_) => {}
                Err(err) if err.is_conflict() => {}
                Err(err) => failures.push(err),
            }
        }
        failures
    }

    async fn upsert_rental_config(
        &self,
        form: &mut PropertyForm,
        property_id: EntityId,
    ) -> Result<(), ApiError> {
        let service = &self.services.rental_configs;
        let draft = RentalConfigDraft {
            property_id: Some(property_id),
            ..form.data.rental_config.clone()
        };
        let saved = match service.get_by_property(property_id).await? {
            Some(existing) => service.update(existing.id, &draft).await?,
            None => service.create(&draft).await?,
        };
        form.data.rental_config = RentalConfigDraft::from(&saved);
        Ok(())
    }
}
