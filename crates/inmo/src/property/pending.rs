use std::collections::BTreeMap;

use crate::api::FilePart;

/// Files picked while the property has no id yet. They live here until the
/// save workflow uploads them.
///
/// Floor-plan images are keyed by the index of the plan they belong to, so
/// removing a plan shifts every later key down by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingUploads {
    images: Vec<FilePart>,
    floor_plan_images: BTreeMap<usize, FilePart>,
    private_files: Vec<FilePart>,
}

impl PendingUploads {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.floor_plan_images.is_empty() && self.private_files.is_empty()
    }

    pub fn images(&self) -> &[FilePart] {
        &self.images
    }

    /// Returns the index the image was stored at.
    pub fn add_image(&mut self, file: FilePart) -> usize {
        self.images.push(file);
        self.images.len() - 1
    }

    pub fn remove_image(&mut self, index: usize) -> Option<FilePart> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Drag-and-drop reorder. Out of range indices are ignored.
    pub fn move_image(&mut self, from: usize, to: usize) -> bool {
        if from >= self.images.len() || to >= self.images.len() {
            return false;
        }
        let file = self.images.remove(from);
        self.images.insert(to, file);
        true
    }

    pub fn take_images(&mut self) -> Vec<FilePart> {
        std::mem::take(&mut self.images)
    }

    /// Put back images whose upload failed, ahead of anything added since.
    pub fn restore_images(&mut self, mut files: Vec<FilePart>) {
        files.append(&mut self.images);
        self.images = files;
    }

    pub fn floor_plan_image(&self, plan_index: usize) -> Option<&FilePart> {
        self.floor_plan_images.get(&plan_index)
    }

    pub fn set_floor_plan_image(&mut self, plan_index: usize, file: FilePart) -> Option<FilePart> {
        self.floor_plan_images.insert(plan_index, file)
    }

    pub fn clear_floor_plan_image(&mut self, plan_index: usize) -> Option<FilePart> {
        self.floor_plan_images.remove(&plan_index)
    }

    /// Forget the image of a removed plan and reindex the plans after it.
    pub fn remove_floor_plan(&mut self, plan_index: usize) -> Option<FilePart> {
        let removed = self.floor_plan_images.remove(&plan_index);
        let shifted = std::mem::take(&mut self.floor_plan_images)
            .into_iter()
            .map(|(index, file)| {
                if index > plan_index {
                    (index - 1, file)
                } else {
                    (index, file)
                }
            })
            .collect();
        self.floor_plan_images = shifted;
        removed
    }

    pub fn take_floor_plan_images(&mut self) -> BTreeMap<usize, FilePart> {
        std::mem::take(&mut self.floor_plan_images)
    }

    pub fn private_files(&self) -> &[FilePart] {
        &self.private_files
    }

    pub fn add_private_file(&mut self, file: FilePart) -> usize {
        self.private_files.push(file);
        self.private_files.len() - 1
    }

    pub fn remove_private_file(&mut self, index: usize) -> Option<FilePart> {
        (index < self.private_files.len()).then(|| self.private_files.remove(index))
    }

    pub fn take_private_files(&mut self) -> Vec<FilePart> {
        std::mem::take(&mut self.private_files)
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.floor_plan_images.clear();
        self.private_files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FilePart {
        FilePart::new("files", name, name.as_bytes().to_vec())
    }

    #[test]
    fn removing_a_plan_shifts_later_images() {
        let mut pending = PendingUploads::default();
        pending.set_floor_plan_image(0, file("a.png"));
        pending.set_floor_plan_image(1, file("b.png"));
        pending.set_floor_plan_image(3, file("d.png"));

        let removed = pending.remove_floor_plan(1).expect("plan 1 had an image");
        assert_eq!(removed.file_name, "b.png");
        assert_eq!(pending.floor_plan_image(0).map(|f| f.file_name.as_str()), Some("a.png"));
        assert!(pending.floor_plan_image(1).is_none());
        assert_eq!(pending.floor_plan_image(2).map(|f| f.file_name.as_str()), Some("d.png"));
        assert!(pending.floor_plan_image(3).is_none());
    }

    #[test]
    fn reorder_and_remove_images() {
        let mut pending = PendingUploads::default();
        pending.add_image(file("1.jpg"));
        pending.add_image(file("2.jpg"));
        pending.add_image(file("3.jpg"));

        assert!(pending.move_image(2, 0));
        assert!(!pending.move_image(5, 0));
        let names: Vec<_> = pending.images().iter().map(|f| f.file_name.clone()).collect();
        assert_eq!(names, ["3.jpg", "1.jpg", "2.jpg"]);

        assert!(pending.remove_image(7).is_none());
        assert_eq!(pending.remove_image(1).map(|f| f.file_name), Some("1.jpg".to_string()));
        assert_eq!(pending.images().len(), 2);
    }

    #[test]
    fn restored_images_go_first() {
        let mut pending = PendingUploads::default();
        pending.add_image(file("old.jpg"));
        let taken = pending.take_images();
        pending.add_image(file("new.jpg"));
        pending.restore_images(taken);
        let names: Vec<_> = pending.images().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, ["old.jpg", "new.jpg"]);
        assert!(!pending.is_empty());
        pending.clear();
        assert!(pending.is_empty());
    }
}
