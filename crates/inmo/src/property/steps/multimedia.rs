use super::StepError;
use crate::api::FilePart;
use crate::models::{EntityId, GalleryImage};
use crate::property::form::PropertyForm;
use crate::services::Services;

/// One thumbnail in the gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEntry {
    Stored(GalleryImage),
    Pending { index: usize, file_name: String },
}

/// Gallery management. With a saved property every action goes straight to
/// the gallery endpoints; a new property buffers files in the form's pending
/// uploads until the first save.
#[derive(Debug, Clone, Default)]
pub struct MultimediaStep {
    stored: Vec<GalleryImage>,
}

impl MultimediaStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, form: &PropertyForm) -> Vec<GalleryEntry> {
        let stored = self.stored.iter().cloned().map(GalleryEntry::Stored);
        let pending = form
            .pending
            .images()
            .iter()
            .enumerate()
            .map(|(index, file)| GalleryEntry::Pending {
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
            self.stored = services.gallery.get_by_property(property_id).await?;
            self.stored.sort_by_key(|image| image.display_order);
        }
        Ok(())
    }

    pub async fn add_images(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        files: Vec<FilePart>,
    ) -> Result<(), StepError> {
        let rejected = files
            .iter()
            .find(|file| !file.is_image())
            .map(|file| file.file_name.clone());
        if let Some(name) = rejected {
            return Err(StepError::Rejected(format!(
                "El archivo {name} no es una imagen"
            )));
        }
        match form.property_id() {
            Some(property_id) => {
                let uploaded = services.gallery.upload(property_id, files).await?;
                self.stored.extend(uploaded);
            }
            None => {
                for file in files {
                    form.pending.add_image(file);
                }
                form.mark_dirty();
            }
        }
        Ok(())
    }

    pub async fn remove_stored(
        &mut self,
        services: &Services,
        image_id: EntityId,
    ) -> Result<(), StepError> {
        services.gallery.delete(image_id).await?;
        self.stored.retain(|image| image.id != image_id);
        Ok(())
    }

    pub fn remove_pending(&mut self, form: &mut PropertyForm, index: usize) -> bool {
        form.pending.remove_image(index).is_some()
    }

    /// Drag-and-drop. Stored images persist the new order right away; pending
    /// ones only move locally.
    pub async fn move_image(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        from: usize,
        to: usize,
    ) -> Result<bool, StepError> {
        let Some(property_id) = form.property_id() else {
            return Ok(form.pending.move_image(from, to));
        };
        if from >= self.stored.len() || to >= self.stored.len() {
            return Ok(false);
        }

        let previous = self.stored.clone();
        let image = self.stored.remove(from);
        self.stored.insert(to, image);
        let order: Vec<EntityId> = self.stored.iter().map(|image| image.id).collect();
        if let Err(err) = services.gallery.reorder(property_id, &order).await {
            self.stored = previous;
            return Err(err.into());
        }
        for (position, image) in self.stored.iter_mut().enumerate() {
            image.display_order = position as u32;
        }
        Ok(true)
    }
}
