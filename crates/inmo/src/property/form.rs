use serde::{Deserialize, Serialize};

use super::fields::{FieldChange, FieldKey};
use super::pending::PendingUploads;
use super::validation;
use crate::models::{
    EntityId, FloorPlan, FloorPlanDraft, NearbyFacilityLink, OperationType, Property,
    PropertyNearbyFacility, RentalConfig, RentalConfigDraft,
};
use crate::validation::FormErrors;

fn default_currency() -> String {
    "USD".to_string()
}

/// Everything the wizard collects, one field per input across all steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFormData {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub operation_type: Option<OperationType>,
    pub property_type_id: Option<EntityId>,
    pub status_id: Option<EntityId>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking_spaces: Option<u32>,
    pub area: Option<f64>,
    pub lot_size: Option<f64>,
    pub year_built: Option<i32>,
    pub floor: Option<i32>,
    pub address: String,
    pub country_id: Option<EntityId>,
    pub department_id: Option<EntityId>,
    pub city_id: Option<EntityId>,
    pub city_zone_id: Option<EntityId>,
    pub neighborhood_id: Option<EntityId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub images: Vec<String>,
    pub amenity_ids: Vec<EntityId>,
    pub service_ids: Vec<EntityId>,
    pub featured: bool,
    pub premium: bool,
    pub visible: bool,
    pub agent_id: Option<EntityId>,
    pub owner_contact_id: Option<EntityId>,
    pub floor_plans: Vec<FloorPlanDraft>,
    pub nearby_facilities: Vec<NearbyFacilityLink>,
    pub rental_config: RentalConfigDraft,
}

impl Default for PropertyFormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: None,
            currency: default_currency(),
            operation_type: None,
            property_type_id: None,
            status_id: None,
            bedrooms: None,
            bathrooms: None,
            parking_spaces: None,
            area: None,
            lot_size: None,
            year_built: None,
            floor: None,
            address: String::new(),
            country_id: None,
            department_id: None,
            city_id: None,
            city_zone_id: None,
            neighborhood_id: None,
            latitude: None,
            longitude: None,
            images: Vec::new(),
            amenity_ids: Vec::new(),
            service_ids: Vec::new(),
            featured: false,
            premium: false,
            visible: true,
            agent_id: None,
            owner_contact_id: None,
            floor_plans: Vec::new(),
            nearby_facilities: Vec::new(),
            rental_config: RentalConfigDraft::default(),
        }
    }
}

impl PropertyFormData {
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            description: property.description.clone().unwrap_or_default(),
            price: property.price,
            currency: property.currency.clone().unwrap_or_else(default_currency),
            operation_type: property.operation_type,
            property_type_id: property.property_type_id,
            status_id: property.status_id,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            parking_spaces: property.parking_spaces,
            area: property.area,
            lot_size: property.lot_size,
            year_built: property.year_built,
            floor: property.floor,
            address: property.address.clone().unwrap_or_default(),
            country_id: property.country_id,
            department_id: property.department_id,
            city_id: property.city_id,
            city_zone_id: property.city_zone_id,
            neighborhood_id: property.neighborhood_id,
            latitude: property.latitude,
            longitude: property.longitude,
            images: property.images.clone(),
            amenity_ids: property.amenity_ids.clone(),
            service_ids: property.service_ids.clone(),
            featured: property.featured,
            premium: property.premium,
            visible: property.visible,
            agent_id: property.agent_id,
            owner_contact_id: property.owner_contact_id,
            floor_plans: Vec::new(),
            nearby_facilities: Vec::new(),
            rental_config: RentalConfigDraft::default(),
        }
    }

    pub fn is_temporary_rent(&self) -> bool {
        self.operation_type
            .map(|operation| operation.is_temporary_rent())
            .unwrap_or(false)
    }

    fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Title(value) => self.title = value,
            FieldChange::Description(value) => self.description = value,
            FieldChange::Price(value) => self.price = value,
            FieldChange::Currency(value) => self.currency = value,
            FieldChange::OperationType(value) => self.operation_type = value,
            FieldChange::PropertyType(value) => self.property_type_id = value,
            FieldChange::Status(value) => self.status_id = value,
            FieldChange::Bedrooms(value) => self.bedrooms = value,
            FieldChange::Bathrooms(value) => self.bathrooms = value,
            FieldChange::ParkingSpaces(value) => self.parking_spaces = value,
            FieldChange::Area(value) => self.area = value,
            FieldChange::LotSize(value) => self.lot_size = value,
            FieldChange::YearBuilt(value) => self.year_built = value,
            FieldChange::Floor(value) => self.floor = value,
            FieldChange::Address(value) => self.address = value,
            FieldChange::Country(value) => self.country_id = value,
            FieldChange::Department(value) => self.department_id = value,
            FieldChange::City(value) => self.city_id = value,
            FieldChange::CityZone(value) => self.city_zone_id = value,
            FieldChange::Neighborhood(value) => self.neighborhood_id = value,
            FieldChange::Latitude(value) => self.latitude = value,
            FieldChange::Longitude(value) => self.longitude = value,
            FieldChange::Images(value) => self.images = value,
            FieldChange::Amenities(value) => self.amenity_ids = value,
            FieldChange::Services(value) => self.service_ids = value,
            FieldChange::Featured(value) => self.featured = value,
            FieldChange::Premium(value) => self.premium = value,
            FieldChange::Visible(value) => self.visible = value,
            FieldChange::Agent(value) => self.agent_id = value,
            FieldChange::OwnerContact(value) => self.owner_contact_id = value,
            FieldChange::FloorPlans(value) => self.floor_plans = value,
            FieldChange::NearbyFacilities(value) => self.nearby_facilities = value,
            FieldChange::RentalConfig(value) => self.rental_config = value,
        }
    }
}

/// Form state of the property editor: field values, inline errors, files
/// waiting for upload and whether anything changed since the last save.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub data: PropertyFormData,
    errors: FormErrors,
    pub pending: PendingUploads,
    property_id: Option<EntityId>,
    dirty: bool,
}

impl PropertyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: PropertyFormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Form for an existing property, including the sub-resources the
    /// editor shows on their own steps.
    pub fn for_property(
        property: &Property,
        floor_plans: &[FloorPlan],
        nearby: &[PropertyNearbyFacility],
        rental: Option<&RentalConfig>,
    ) -> Self {
        let mut data = PropertyFormData::from_property(property);
        let mut plans: Vec<&FloorPlan> = floor_plans.iter().collect();
        plans.sort_by_key(|plan| plan.display_order);
        data.floor_plans = plans.into_iter().map(FloorPlanDraft::from).collect();
        data.nearby_facilities = nearby.iter().map(NearbyFacilityLink::from).collect();
        if let Some(rental) = rental {
            data.rental_config = RentalConfigDraft::from(rental);
        }

        Self {
            data,
            property_id: Some(property.id),
            ..Self::default()
        }
    }

    pub fn property_id(&self) -> Option<EntityId> {
        self.property_id
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(key.as_str())
    }

    /// Generic change handler every step funnels its inputs through.
    pub fn handle_change(&mut self, change: FieldChange) {
        for key in change.keys() {
            self.errors.remove(key.as_str());
        }
        self.data.apply(change);
        self.dirty = true;
    }

    /// Swap in a whole set of values, e.g. read from a file. Errors reset.
    pub fn replace_data(&mut self, data: PropertyFormData) {
        self.data = data;
        self.errors.clear();
        self.dirty = true;
    }

    /// Check only `keys`, replacing their previous errors. True when none of
    /// them failed.
    pub fn validate(&mut self, keys: &[FieldKey]) -> bool {
        let mut valid = true;
        for key in keys {
            self.errors.remove(key.as_str());
            if let Some(message) = validation::check(&self.data, *key) {
                self.errors.insert(key.as_str(), message);
                valid = false;
            }
        }
        valid
    }

    /// Errors for `keys` without touching the form's error map.
    pub fn check(&self, keys: &[FieldKey]) -> FormErrors {
        let mut errors = FormErrors::new();
        for key in keys {
            if let Some(message) = validation::check(&self.data, *key) {
                errors.insert(key.as_str(), message);
            }
        }
        errors
    }

    pub fn toggle_amenity(&mut self, id: EntityId) {
        let ids = toggled(&self.data.amenity_ids, id);
        self.handle_change(FieldChange::Amenities(ids));
    }

    pub fn toggle_service(&mut self, id: EntityId) {
        let ids = toggled(&self.data.service_ids, id);
        self.handle_change(FieldChange::Services(ids));
    }

    pub(crate) fn mark_saved(&mut self, property_id: EntityId) {
        self.property_id = Some(property_id);
        self.dirty = false;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status_id: Option<EntityId>) {
        self.data.status_id = status_id;
    }
}

fn toggled(ids: &[EntityId], id: EntityId) -> Vec<EntityId> {
    if ids.contains(&id) {
        ids.iter().copied().filter(|existing| *existing != id).collect()
    } else {
        let mut ids = ids.to_vec();
        ids.push(id);
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_clears_only_its_error() {
        let mut form = PropertyForm::new();
        assert!(!form.validate(&[FieldKey::Title, FieldKey::Price]));
        assert!(form.error(FieldKey::Title).is_some());
        assert!(form.error(FieldKey::Price).is_some());

        form.handle_change(FieldChange::Title("Casa".to_string()));
        assert!(form.error(FieldKey::Title).is_none());
        assert!(form.error(FieldKey::Price).is_some());
        assert!(form.is_dirty());
    }

    #[test]
    fn toggles_add_then_remove() {
        let mut form = PropertyForm::new();
        form.toggle_amenity(EntityId(4));
        form.toggle_amenity(EntityId(9));
        form.toggle_amenity(EntityId(4));
        assert_eq!(form.data.amenity_ids, vec![EntityId(9)]);
        form.toggle_service(EntityId(1));
        assert_eq!(form.data.service_ids, vec![EntityId(1)]);
    }

    #[test]
    fn form_data_deserializes_with_defaults() {
        let data: PropertyFormData =
            serde_json::from_str(r#"{"title":"Depto centro","price":1200}"#).expect("valid json");
        assert_eq!(data.title, "Depto centro");
        assert_eq!(data.currency, "USD");
        assert!(data.visible);
        assert!(data.floor_plans.is_empty());
    }
}
