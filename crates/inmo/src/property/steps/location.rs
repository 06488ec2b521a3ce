use tracing::debug;

use super::StepError;
use crate::models::{
    City, CityDraft, CityZone, Country, Department, EntityId, Neighborhood, NeighborhoodDraft,
};
use crate::property::fields::FieldChange;
use crate::property::form::PropertyForm;
use crate::services::Services;
use crate::validation::is_blank;

/// Cascading country → department → city → zone/neighborhood selects, plus
/// the inline "register new city/neighborhood" flows.
#[derive(Debug, Clone, Default)]
pub struct LocationStep {
    countries: Vec<Country>,
    departments: Vec<Department>,
    cities: Vec<City>,
    zones: Vec<CityZone>,
    neighborhoods: Vec<Neighborhood>,
}

impl LocationStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn zones(&self) -> &[CityZone] {
        &self.zones
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Fill every select from what the form already holds, for the edit page.
    pub async fn load(
        &mut self,
        services: &Services,
        form: &PropertyForm,
    ) -> Result<(), StepError> {
        self.countries = services.countries.get_all().await?;
        self.departments = match form.data.country_id {
            Some(id) => services.departments.get_by_parent(id).await?,
            None => Vec::new(),
        };
        self.cities = match form.data.department_id {
            Some(id) => services.cities.get_by_parent(id).await?,
            None => Vec::new(),
        };
        self.load_city_children(services, form.data.city_id).await
    }

    pub async fn select_country(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        country_id: Option<EntityId>,
    ) -> Result<(), StepError> {
        form.handle_change(FieldChange::Country(country_id));
        form.handle_change(FieldChange::Department(None));
        form.handle_change(FieldChange::City(None));
        self.clear_city_children(form);
        self.cities.clear();
        self.departments = match country_id {
            Some(id) => services.departments.get_by_parent(id).await?,
            None => Vec::new(),
        };
        Ok(())
    }

    pub async fn select_department(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        department_id: Option<EntityId>,
    ) -> Result<(), StepError> {
        form.handle_change(FieldChange::Department(department_id));
        form.handle_change(FieldChange::City(None));
        self.clear_city_children(form);
        self.cities = match department_id {
            Some(id) => services.cities.get_by_parent(id).await?,
            None => Vec::new(),
        };
        Ok(())
    }

    pub async fn select_city(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        city_id: Option<EntityId>,
    ) -> Result<(), StepError> {
        form.handle_change(FieldChange::City(city_id));
        self.clear_city_children(form);
        self.load_city_children(services, city_id).await
    }

    /// Create a city under the selected department and select it. Nothing is
    /// sent when the name is blank or no department is selected.
    pub async fn register_city(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        name: &str,
    ) -> Result<City, StepError> {
        if is_blank(name) {
            return Err(StepError::field("newCityName", "Ingrese el nombre de la ciudad"));
        }
        let Some(department_id) = form.data.department_id else {
            return Err(StepError::field(
                "newCityName",
                "Seleccione un departamento antes de registrar la ciudad",
            ));
        };

        let draft = CityDraft {
            name: name.trim().to_string(),
            department_id: Some(department_id),
            state: None,
        };
        let city = services.cities.create(&draft).await?;
        debug!(city_id = %city.id, "city registered from the property editor");
        self.cities.push(city.clone());
        self.select_city(services, form, Some(city.id)).await?;
        Ok(city)
    }

    /// Create a neighborhood in the selected city and select it.
    pub async fn register_neighborhood(
        &mut self,
        services: &Services,
        form: &mut PropertyForm,
        name: &str,
    ) -> Result<Neighborhood, StepError> {
        if is_blank(name) {
            return Err(StepError::field(
                "newNeighborhoodName",
                "Ingrese el nombre del barrio",
            ));
        }
        let Some(city_id) = form.data.city_id else {
            return Err(StepError::field(
                "newNeighborhoodName",
                "Seleccione una ciudad antes de registrar el barrio",
            ));
        };

        let draft = NeighborhoodDraft {
            name: name.trim().to_string(),
            city_id: Some(city_id),
        };
        let neighborhood = services.neighborhoods.create(&draft).await?;
        self.neighborhoods.push(neighborhood.clone());
        form.handle_change(FieldChange::Neighborhood(Some(neighborhood.id)));
        Ok(neighborhood)
    }

    fn clear_city_children(&mut self, form: &mut PropertyForm) {
        form.handle_change(FieldChange::CityZone(None));
        form.handle_change(FieldChange::Neighborhood(None));
        self.zones.clear();
        self.neighborhoods.clear();
    }

    async fn load_city_children(
        &mut self,
        services: &Services,
        city_id: Option<EntityId>,
    ) -> Result<(), StepError> {
        match city_id {
            Some(id) => {
                self.zones = services.city_zones.get_by_parent(id).await?;
                self.neighborhoods = services.neighborhoods.get_by_parent(id).await?;
            }
            None => {
                self.zones.clear();
                self.neighborhoods.clear();
            }
        }
        Ok(())
    }
}
