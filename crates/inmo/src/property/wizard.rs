//! Step navigation and the editor pages built on it.

use tracing::{info, warn};

use super::fields::FieldKey;
use super::form::PropertyForm;
use super::save::{PropertySaver, SaveError, SaveOutcome, SaveStep, SaveWarning};
use super::steps::{steps_for, Step};
use crate::api::ApiError;
use crate::models::{EntityId, Property};
use crate::services::Services;
use crate::validation::FormErrors;

/// Linear step sequence. `current` is the only state; the step list itself is
/// derived from the form every time because the operation type can add or
/// remove the rental step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index into [`Wizard::steps`], clamped to the visible steps.
    pub fn index(&self, form: &PropertyForm) -> usize {
        let last = steps_for(&form.data).len().saturating_sub(1);
        self.current.min(last)
    }

    pub fn steps(&self, form: &PropertyForm) -> Vec<Step> {
        steps_for(&form.data)
    }

    pub fn current_step(&self, form: &PropertyForm) -> Step {
        let steps = steps_for(&form.data);
        steps[self.index(form)]
    }

    pub fn is_last(&self, form: &PropertyForm) -> bool {
        self.index(form) + 1 == steps_for(&form.data).len()
    }

    /// Validate the current step and advance when it passes.
    pub fn next(&mut self, form: &mut PropertyForm) -> bool {
        let from = self.index(form);
        self.go_to(form, from + 1)
    }

    pub fn back(&mut self, form: &PropertyForm) {
        self.current = self.index(form).saturating_sub(1);
    }

    /// Jump to `target`. Moving forward checks every step being crossed and
    /// stays put when any of them has errors; moving back is never blocked.
    pub fn go_to(&mut self, form: &mut PropertyForm, target: usize) -> bool {
        let steps = steps_for(&form.data);
        if target >= steps.len() {
            return false;
        }
        let from = self.index(form);
        if target > from {
            let crossed: Vec<FieldKey> = steps[from..target]
                .iter()
                .flat_map(|step| step.required_fields().iter().copied())
                .collect();
            if !form.validate(&crossed) {
                return false;
            }
        }
        self.current = target;
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("La propiedad {0} no existe")]
    NotFound(EntityId),
    #[error("Revise los campos marcados: {0}")]
    Validation(FormErrors),
    #[error("Guarde la propiedad como borrador antes de publicarla")]
    NotSaved,
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// New and edit property pages: the form, the wizard position and the save
/// entry points.
#[derive(Debug, Clone)]
pub struct PropertyEditor {
    saver: PropertySaver,
    form: PropertyForm,
    wizard: Wizard,
    load_warnings: Vec<SaveWarning>,
}

impl PropertyEditor {
    pub fn new_property(services: Services) -> Self {
        Self::with_form(services, PropertyForm::new())
    }

    pub fn with_form(services: Services, form: PropertyForm) -> Self {
        Self {
            saver: PropertySaver::new(services),
            form,
            wizard: Wizard::new(),
            load_warnings: Vec::new(),
        }
    }

    /// Load an existing property. Sub-resources that fail to load leave their
    /// section empty and are reported through [`PropertyEditor::load_warnings`].
    pub async fn open(services: Services, id: EntityId) -> Result<Self, EditorError> {
        let property = services
            .properties
            .get_by_id(id)
            .await?
            .ok_or(EditorError::NotFound(id))?;

        let mut load_warnings = Vec::new();
        let mut note = |step: SaveStep, err: ApiError| {
            warn!(property_id = %id, %step, error = %err, "property section failed to load");
            load_warnings.push(SaveWarning {
                step,
                message: err.to_string(),
            });
        };

        let floor_plans = services
            .floor_plans
            .get_by_property(id)
            .await
            .unwrap_or_else(|err| {
                note(SaveStep::FloorPlans, err);
                Vec::new()
            });
        let nearby = services
            .nearby_facilities
            .get_by_property(id)
            .await
            .unwrap_or_else(|err| {
                note(SaveStep::NearbyFacilities, err);
                Vec::new()
            });
        let is_temporary_rent = property
            .operation_type
            .map(|operation| operation.is_temporary_rent())
            .unwrap_or(false);
        let rental = if is_temporary_rent {
            services
                .rental_configs
                .get_by_property(id)
                .await
                .unwrap_or_else(|err| {
                    note(SaveStep::RentalConfig, err);
                    None
                })
        } else {
            None
        };

        let form = PropertyForm::for_property(&property, &floor_plans, &nearby, rental.as_ref());
        info!(property_id = %id, "property opened for editing");
        Ok(Self {
            saver: PropertySaver::new(services),
            form,
            wizard: Wizard::new(),
            load_warnings,
        })
    }

    pub fn services(&self) -> &Services {
        self.saver.services()
    }

    pub fn form(&self) -> &PropertyForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PropertyForm {
        &mut self.form
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step(&self.form)
    }

    pub fn load_warnings(&self) -> &[SaveWarning] {
        &self.load_warnings
    }

    pub fn is_new(&self) -> bool {
        self.form.property_id().is_none()
    }

    pub fn next(&mut self) -> bool {
        self.wizard.next(&mut self.form)
    }

    pub fn back(&mut self) {
        self.wizard.back(&self.form);
    }

    pub fn go_to(&mut self, target: usize) -> bool {
        self.wizard.go_to(&mut self.form, target)
    }

    /// Full validation across every visible step, then a regular save.
    pub async fn submit(&mut self) -> Result<SaveOutcome, EditorError> {
        let keys: Vec<FieldKey> = steps_for(&self.form.data)
            .iter()
            .flat_map(|step| step.required_fields().iter().copied())
            .collect();
        if !self.form.validate(&keys) {
            return Err(EditorError::Validation(self.form.errors().clone()));
        }
        Ok(self.saver.perform_save(&mut self.form, false).await?)
    }

    /// Save with the draft status and without validation.
    pub async fn save_draft(&mut self) -> Result<SaveOutcome, EditorError> {
        Ok(self.saver.perform_save(&mut self.form, true).await?)
    }

    pub async fn publish(&mut self) -> Result<Property, EditorError> {
        let id = self.form.property_id().ok_or(EditorError::NotSaved)?;
        let property = self.services().properties.publish(id).await?;
        self.form.set_status(property.status_id);
        info!(property_id = %id, "property published");
        Ok(property)
    }

    /// Whether leaving the page would lose edits or unsent files.
    pub fn has_unsaved_changes(&self) -> bool {
        self.form.is_dirty() || !self.form.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, OperationType};

    fn valid_first_step(form: &mut PropertyForm) {
        form.data.title = "Casa en Equipetrol".to_string();
        form.data.operation_type = Some(OperationType::Sale);
        form.data.property_type_id = Some(EntityId(1));
        form.data.price = Some(185_000.0);
    }

    #[test]
    fn next_is_blocked_by_current_step_errors() {
        let mut form = PropertyForm::new();
        let mut wizard = Wizard::new();
        assert!(!wizard.next(&mut form));
        assert_eq!(wizard.current_step(&form), Step::TypeAndOperation);
        assert!(form.error(FieldKey::Title).is_some());

        valid_first_step(&mut form);
        assert!(wizard.next(&mut form));
        assert_eq!(wizard.current_step(&form), Step::Characteristics);
    }

    #[test]
    fn jumping_ahead_validates_every_crossed_step() {
        let mut form = PropertyForm::new();
        valid_first_step(&mut form);
        let mut wizard = Wizard::new();

        // Location is crossed on the way to multimedia and has no address yet.
        assert!(!wizard.go_to(&mut form, 3));
        assert_eq!(wizard.index(&form), 0);
        assert!(form.error(FieldKey::Address).is_some());

        assert!(wizard.go_to(&mut form, 2));
        assert_eq!(wizard.current_step(&form), Step::Location);
    }

    #[test]
    fn back_is_unconditional_and_stops_at_first() {
        let mut form = PropertyForm::new();
        valid_first_step(&mut form);
        let mut wizard = Wizard::new();
        assert!(wizard.next(&mut form));
        form.data.title.clear();
        wizard.back(&form);
        assert_eq!(wizard.index(&form), 0);
        wizard.back(&form);
        assert_eq!(wizard.index(&form), 0);
    }

    #[test]
    fn index_is_clamped_when_rental_step_disappears() {
        let mut form = PropertyForm::new();
        form.data.operation_type = Some(OperationType::TemporaryRent);
        let mut wizard = Wizard::new();
        wizard.current = 11;
        assert_eq!(wizard.current_step(&form), Step::RentalConfig);

        form.data.operation_type = Some(OperationType::Rent);
        assert_eq!(wizard.current_step(&form), Step::OwnerInfo);
        assert!(wizard.is_last(&form));
    }
}
