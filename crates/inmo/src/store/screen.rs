use crate::api::ApiError;
use crate::models::EntityId;
use crate::services::CatalogResource;
use crate::validation::FormErrors;

use super::catalog_store::CatalogStore;

#[derive(Debug, thiserror::Error)]
pub enum CatalogScreenError {
    #[error("formulario inválido: {0}")]
    Validation(FormErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no hay ningún formulario abierto")]
    NoOpenForm,
    #[error("no hay ninguna eliminación pendiente")]
    NothingToDelete,
    #[error("registro {0} no encontrado en la lista")]
    UnknownRow(EntityId),
}

/// Create/edit modal of a catalog screen.
#[derive(Debug, Clone)]
pub struct CatalogForm<D> {
    pub editing: Option<EntityId>,
    pub draft: D,
    pub errors: FormErrors,
}

/// Table + modal CRUD screen for one catalog resource.
#[derive(Debug)]
pub struct CatalogScreen<R: CatalogResource> {
    store: CatalogStore<R>,
    form: Option<CatalogForm<R::Draft>>,
    pending_delete: Option<EntityId>,
}

impl<R: CatalogResource> CatalogScreen<R> {
    pub fn new(store: CatalogStore<R>) -> Self {
        Self {
            store,
            form: None,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &CatalogStore<R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore<R> {
        &mut self.store
    }

    pub fn form(&self) -> Option<&CatalogForm<R::Draft>> {
        self.form.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open_create(&mut self) {
        self.form = Some(CatalogForm {
            editing: None,
            draft: R::Draft::default(),
            errors: FormErrors::new(),
        });
    }

    /// Open the modal prefilled with a row that is already in the list.
    pub fn open_edit(&mut self, id: EntityId) -> Result<(), CatalogScreenError> {
        let row = self.store.find(id).ok_or(CatalogScreenError::UnknownRow(id))?;
        self.form = Some(CatalogForm {
            editing: Some(id),
            draft: row.to_draft(),
            errors: FormErrors::new(),
        });
        Ok(())
    }

    /// Mutate the open draft. Returns false when no form is open.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut R::Draft)) -> bool {
        match self.form.as_mut() {
            Some(form) => {
                edit(&mut form.draft);
                true
            }
            None => false,
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Validate, then create or update depending on how the modal was opened.
    /// The modal closes only on success.
    pub async fn submit(&mut self) -> Result<R, CatalogScreenError> {
        let form = self.form.as_mut().ok_or(CatalogScreenError::NoOpenForm)?;
        R::normalize_draft(&mut form.draft);
        if let Err(errors) = R::validate_draft(&form.draft) {
            form.errors = errors.clone();
            return Err(CatalogScreenError::Validation(errors));
        }
        form.errors.clear();

        let draft = form.draft.clone();
        let editing = form.editing;
        let saved = match editing {
            Some(id) => self.store.update(id, &draft).await?,
            None => self.store.create(&draft).await?,
        };
        self.form = None;
        Ok(saved)
    }

    pub fn request_delete(&mut self, id: EntityId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<EntityId> {
        self.pending_delete
    }

    pub async fn confirm_delete(&mut self) -> Result<EntityId, CatalogScreenError> {
        let id = self
            .pending_delete
            .ok_or(CatalogScreenError::NothingToDelete)?;
        self.store.remove(id).await?;
        self.pending_delete = None;
        Ok(id)
    }
}
