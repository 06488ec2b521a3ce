use super::StepError;
use crate::api::FilePart;
use crate::models::FloorPlanDraft;
use crate::property::fields::FieldChange;
use crate::property::form::PropertyForm;

/// Floor plans are always edited locally and written by the save workflow.
/// Their images wait in the pending uploads, keyed by plan index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorPlansStep;

impl FloorPlansStep {
    pub fn add(&self, form: &mut PropertyForm, plan: FloorPlanDraft) -> usize {
        let mut plans = form.data.floor_plans.clone();
        plans.push(FloorPlanDraft {
            display_order: plans.len() as u32,
            ..plan
        });
        let index = plans.len() - 1;
        form.handle_change(FieldChange::FloorPlans(plans));
        index
    }

    pub fn update(
        &self,
        form: &mut PropertyForm,
        index: usize,
        edit: impl FnOnce(&mut FloorPlanDraft),
    ) -> bool {
        let mut plans = form.data.floor_plans.clone();
        let Some(plan) = plans.get_mut(index) else {
            return false;
        };
        edit(plan);
        form.handle_change(FieldChange::FloorPlans(plans));
        true
    }

    pub fn remove(&self, form: &mut PropertyForm, index: usize) -> Option<FloorPlanDraft> {
        if index >= form.data.floor_plans.len() {
            return None;
        }
        let mut plans = form.data.floor_plans.clone();
        let removed = plans.remove(index);
        for (order, plan) in plans.iter_mut().enumerate() {
            plan.display_order = order as u32;
        }
        form.pending.remove_floor_plan(index);
        form.handle_change(FieldChange::FloorPlans(plans));
        Some(removed)
    }

    pub fn attach_image(
        &self,
        form: &mut PropertyForm,
        index: usize,
        file: FilePart,
    ) -> Result<(), StepError> {
        if index >= form.data.floor_plans.len() {
            return Err(StepError::Rejected(format!("No existe el plano {}", index + 1)));
        }
        if !file.is_image() {
            return Err(StepError::Rejected(format!(
                "El archivo {} no es una imagen",
                file.file_name
            )));
        }
        form.pending.set_floor_plan_image(index, file);
        form.mark_dirty();
        Ok(())
    }

    /// Drop the image chosen for a plan before it was uploaded.
    pub fn detach_image(&self, form: &mut PropertyForm, index: usize) -> Option<FilePart> {
        let removed = form.pending.clear_floor_plan_image(index);
        if removed.is_some() {
            form.mark_dirty();
        }
        removed
    }
}
