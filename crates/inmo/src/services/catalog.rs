use std::fmt::Debug;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::models::{
    Agent, AgentDraft, City, CityDraft, CityZone, CityZoneDraft, Country, CountryDraft,
    Department, DepartmentDraft, EntityId, Neighborhood, NeighborhoodDraft, OwnerContact,
    OwnerContactDraft,
};
use crate::validation::{check_optional_email, is_blank, require_name, FormErrors};

/// Reference entity managed through the uniform CRUD screens.
pub trait CatalogResource:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Body sent on create and update.
    type Draft: Clone + Debug + Default + Send + Sync + Serialize;

    /// Collection path, e.g. `/api/countries`.
    const PATH: &'static str;
    /// Singular noun with article, used in messages ("el país").
    const SINGULAR: &'static str;
    /// Plural noun with article ("los países").
    const PLURAL: &'static str;

    fn id(&self) -> EntityId;
    fn name(&self) -> &str;

    /// Editable copy of a stored record, used to open the edit modal.
    fn to_draft(&self) -> Self::Draft;

    /// Required-field checks run before any call is made.
    fn validate_draft(draft: &Self::Draft) -> Result<(), FormErrors>;

    /// Canonicalize user input before it is sent.
    fn normalize_draft(_draft: &mut Self::Draft) {}
}

/// Catalog entry listed under a parent (cities under a department...).
pub trait ChildResource: CatalogResource {
    /// Path segment between the collection and the parent id.
    const PARENT_SEGMENT: &'static str;

    fn parent_id(&self) -> EntityId;
}

/// `getAll`/`getById`/`create`/`update`/`delete` for one catalog resource.
#[derive(Debug, Clone)]
pub struct CatalogService<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: CatalogResource> CatalogService<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<R>, ApiError> {
        let context = format!("Error al obtener {}", R::PLURAL);
        self.api.get(R::PATH, &context).await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<R>, ApiError> {
        let context = format!("Error al obtener {}", R::SINGULAR);
        self.api
            .get_optional(&format!("{}/{id}", R::PATH), &context)
            .await
    }

    pub async fn create(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let context = format!("Error al crear {}", R::SINGULAR);
        self.api.post(R::PATH, draft, &context).await
    }

    pub async fn update(&self, id: EntityId, draft: &R::Draft) -> Result<R, ApiError> {
        let context = format!("Error al actualizar {}", R::SINGULAR);
        self.api
            .put(&format!("{}/{id}", R::PATH), draft, &context)
            .await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let context = format!("Error al eliminar {}", R::SINGULAR);
        self.api
            .delete(&format!("{}/{id}", R::PATH), &context)
            .await
    }
}

impl<R: ChildResource> CatalogService<R> {
    pub async fn get_by_parent(&self, parent_id: EntityId) -> Result<Vec<R>, ApiError> {
        let context = format!("Error al obtener {}", R::PLURAL);
        let path = format!("{}/{}/{parent_id}", R::PATH, R::PARENT_SEGMENT);
        self.api.get(&path, &context).await
    }
}

fn require_parent(errors: &mut FormErrors, field: &str, value: Option<EntityId>, message: &str) {
    if value.is_none() {
        errors.insert(field, message);
    }
}

impl CatalogResource for Country {
    type Draft = CountryDraft;

    const PATH: &'static str = "/api/countries";
    const SINGULAR: &'static str = "el país";
    const PLURAL: &'static str = "los países";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> CountryDraft {
        CountryDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            phone_code: self.phone_code.clone(),
        }
    }

    fn validate_draft(draft: &CountryDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        let code = draft.code.trim();
        if code.chars().count() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.insert("code", "El código debe tener 2 letras");
        }
        errors.into_result()
    }

    fn normalize_draft(draft: &mut CountryDraft) {
        draft.name = draft.name.trim().to_string();
        draft.code = draft.code.trim().to_ascii_uppercase();
        draft.phone_code = draft
            .phone_code
            .take()
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());
    }
}

impl CatalogResource for Department {
    type Draft = DepartmentDraft;

    const PATH: &'static str = "/api/departments";
    const SINGULAR: &'static str = "el departamento";
    const PLURAL: &'static str = "los departamentos";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> DepartmentDraft {
        DepartmentDraft {
            name: self.name.clone(),
            country_id: Some(self.country_id),
            description: self.description.clone(),
            active: self.active,
        }
    }

    fn validate_draft(draft: &DepartmentDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        require_parent(&mut errors, "countryId", draft.country_id, "Seleccione un país");
        errors.into_result()
    }
}

impl ChildResource for Department {
    const PARENT_SEGMENT: &'static str = "country";

    fn parent_id(&self) -> EntityId {
        self.country_id
    }
}

impl CatalogResource for City {
    type Draft = CityDraft;

    const PATH: &'static str = "/api/cities";
    const SINGULAR: &'static str = "la ciudad";
    const PLURAL: &'static str = "las ciudades";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> CityDraft {
        CityDraft {
            name: self.name.clone(),
            department_id: Some(self.department_id),
            state: self.state.clone(),
        }
    }

    fn validate_draft(draft: &CityDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        require_parent(
            &mut errors,
            "departmentId",
            draft.department_id,
            "Seleccione un departamento",
        );
        errors.into_result()
    }
}

impl ChildResource for City {
    const PARENT_SEGMENT: &'static str = "department";

    fn parent_id(&self) -> EntityId {
        self.department_id
    }
}

impl CatalogResource for CityZone {
    type Draft = CityZoneDraft;

    const PATH: &'static str = "/api/city-zones";
    const SINGULAR: &'static str = "la zona";
    const PLURAL: &'static str = "las zonas";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> CityZoneDraft {
        CityZoneDraft {
            name: self.name.clone(),
            city_id: Some(self.city_id),
            description: self.description.clone(),
            active: self.active,
        }
    }

    fn validate_draft(draft: &CityZoneDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        require_parent(&mut errors, "cityId", draft.city_id, "Seleccione una ciudad");
        errors.into_result()
    }
}

impl ChildResource for CityZone {
    const PARENT_SEGMENT: &'static str = "city";

    fn parent_id(&self) -> EntityId {
        self.city_id
    }
}

impl CatalogResource for Neighborhood {
    type Draft = NeighborhoodDraft;

    const PATH: &'static str = "/api/neighborhoods";
    const SINGULAR: &'static str = "el barrio";
    const PLURAL: &'static str = "los barrios";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> NeighborhoodDraft {
        NeighborhoodDraft {
            name: self.name.clone(),
            city_id: Some(self.city_id),
        }
    }

    fn validate_draft(draft: &NeighborhoodDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        require_parent(&mut errors, "cityId", draft.city_id, "Seleccione una ciudad");
        errors.into_result()
    }
}

impl ChildResource for Neighborhood {
    const PARENT_SEGMENT: &'static str = "city";

    fn parent_id(&self) -> EntityId {
        self.city_id
    }
}

impl CatalogResource for Agent {
    type Draft = AgentDraft;

    const PATH: &'static str = "/api/agents";
    const SINGULAR: &'static str = "el agente";
    const PLURAL: &'static str = "los agentes";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> AgentDraft {
        AgentDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            photo_url: self.photo_url.clone(),
            active: self.active,
        }
    }

    fn validate_draft(draft: &AgentDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        check_optional_email(&mut errors, "email", draft.email.as_deref());
        errors.into_result()
    }
}

impl CatalogResource for OwnerContact {
    type Draft = OwnerContactDraft;

    const PATH: &'static str = "/api/owner-contacts";
    const SINGULAR: &'static str = "el propietario";
    const PLURAL: &'static str = "los propietarios";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> OwnerContactDraft {
        OwnerContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            document_id: self.document_id.clone(),
            notes: self.notes.clone(),
        }
    }

    fn validate_draft(draft: &OwnerContactDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        require_name(&mut errors, &draft.name);
        check_optional_email(&mut errors, "email", draft.email.as_deref());
        let no_channel = draft.email.as_deref().map(is_blank).unwrap_or(true)
            && draft.phone.as_deref().map(is_blank).unwrap_or(true);
        if no_channel {
            errors.insert("phone", "Ingrese un teléfono o correo de contacto");
        }
        errors.into_result()
    }
}
