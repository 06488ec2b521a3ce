use serde::Serialize;

use crate::api::{ApiClient, ApiError, FilePart};
use crate::models::{EntityId, GalleryImage, PrivateFile, UploadedFile};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReorderRequest<'a> {
    image_ids: &'a [EntityId],
}

/// Property photo gallery.
#[derive(Debug, Clone)]
pub struct GalleryImageService {
    api: ApiClient,
}

impl GalleryImageService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Vec<GalleryImage>, ApiError> {
        self.api
            .get(
                &format!("/api/gallery-images/property/{property_id}"),
                "Error al obtener las imágenes de la propiedad",
            )
            .await
    }

    /// Upload one or more images; the backend appends them to the gallery.
    pub async fn upload(
        &self,
        property_id: EntityId,
        files: Vec<FilePart>,
    ) -> Result<Vec<GalleryImage>, ApiError> {
        let files = files
            .into_iter()
            .map(|file| FilePart {
                field: "files".to_string(),
                ..file
            })
            .collect();
        self.api
            .upload(
                &format!("/api/gallery-images/property/{property_id}"),
                files,
                "Error al subir las imágenes",
            )
            .await
    }

    /// Persist a new display order. `image_ids` lists every image in order.
    pub async fn reorder(
        &self,
        property_id: EntityId,
        image_ids: &[EntityId],
    ) -> Result<(), ApiError> {
        self.api
            .put_unit(
                &format!("/api/gallery-images/property/{property_id}/reorder"),
                &ReorderRequest { image_ids },
                "Error al reordenar las imágenes",
            )
            .await
    }

    pub async fn delete(&self, image_id: EntityId) -> Result<(), ApiError> {
        self.api
            .delete(
                &format!("/api/gallery-images/{image_id}"),
                "Error al eliminar la imagen",
            )
            .await
    }
}

/// Documents attached to a property that never reach the public site.
#[derive(Debug, Clone)]
pub struct PrivateFileService {
    api: ApiClient,
}

impl PrivateFileService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Vec<PrivateFile>, ApiError> {
        self.api
            .get(
                &format!("/api/private-files/property/{property_id}"),
                "Error al obtener los archivos privados",
            )
            .await
    }

    pub async fn upload(
        &self,
        property_id: EntityId,
        file: FilePart,
    ) -> Result<PrivateFile, ApiError> {
        let file = FilePart {
            field: "file".to_string(),
            ..file
        };
        self.api
            .upload(
                &format!("/api/private-files/property/{property_id}"),
                vec![file],
                "Error al subir el archivo privado",
            )
            .await
    }

    pub async fn delete(&self, file_id: EntityId) -> Result<(), ApiError> {
        self.api
            .delete(
                &format!("/api/private-files/{file_id}"),
                "Error al eliminar el archivo privado",
            )
            .await
    }
}

/// Generic storage upload returning a public URL.
#[derive(Debug, Clone)]
pub struct FileService {
    api: ApiClient,
}

impl FileService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn upload(
        &self,
        subdirectory: &str,
        file: FilePart,
    ) -> Result<UploadedFile, ApiError> {
        let subdirectory = subdirectory.trim_matches('/');
        let file = FilePart {
            field: "file".to_string(),
            ..file
        };
        self.api
            .upload(
                &format!("/api/files/upload/{subdirectory}"),
                vec![file],
                "Error al subir el archivo",
            )
            .await
    }
}
