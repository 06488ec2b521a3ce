use super::StepError;
use crate::api::FilePart;
use crate::models::{EntityId, PrivateFile};
use crate::property::form::PropertyForm;
use crate::services::Services;

#[derive(Debug, Clone, PartialEq)]
pub enum PrivateFileEntry {
    Stored(PrivateFile),
    Pending { index: usize, file_name: String },
}

/// Deeds, contracts and other documents kept off the public listing.
#[derive(Debug, Clone, Default)]
pub struct PrivateFilesStep {
    stored: Vec<PrivateFile>,
}

impl PrivateFilesStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, form: &PropertyForm) -> Vec<PrivateFileEntry> {
        let stored = self.stored.iter().cloned().map(PrivateFileEntry::Stored);
        let pending = form
            .pending
            .private_files()
            .iter()
            .enumerate()
            .map(|(index, file)| PrivateFileEntry::Pending {
                index,
                file_name: file.file_name.clone(),
            });
        stored.chain(pending).collect()
    }

    pub async fn load(
        &mut self,
        services: &Services,
        form: &PropertyForm,
    ) -> Result<(), StepError> {
        if let Some(property_id) = form.property_id() {
            self.stored = services.private_files.get_by_property(property_id).await?;
        }
        Ok(())
    }

    pub async fn add(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        file: FilePart,
    ) -> Result<(), StepError> {
        match form.property_id() {
            Some(property_id) => {
                let stored = services.private_files.upload(property_id, file).await?;
                self.stored.push(stored);
            }
            None => {
                form.pending.add_private_file(file);
                form.mark_dirty();
            }
        }
        Ok(())
    }

    pub async fn remove_stored(
        &mut self,
        services: &Services,
        file_id: EntityId,
    ) -> Result<(), StepError> {
        services.private_files.delete(file_id).await?;
        self.stored.retain(|file| file.id != file_id);
        Ok(())
    }

    pub fn remove_pending(&mut self, form: &mut PropertyForm, index: usize) -> bool {
        form.pending.remove_private_file(index).is_some()
    }
}
