use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rental::RentalConfigDraft;
use super::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Sale,
    Rent,
    TemporaryRent,
}

impl OperationType {
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Sale => "Venta",
            OperationType::Rent => "Alquiler",
            OperationType::TemporaryRent => "Alquiler temporal",
        }
    }

    pub fn is_temporary_rent(&self) -> bool {
        matches!(self, OperationType::TemporaryRent)
    }
}

/// Publication status ("Borrador", "Disponible", "Vendida"...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStatus {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl PropertyStatus {
    pub fn is_draft(&self) -> bool {
        let code_is_draft = self
            .code
            .as_deref()
            .map(|code| code.eq_ignore_ascii_case("draft"))
            .unwrap_or(false);
        code_is_draft
            || self.name.trim().eq_ignore_ascii_case("borrador")
            || self.name.trim().eq_ignore_ascii_case("draft")
    }
}

/// Property as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub operation_type: Option<OperationType>,
    #[serde(default)]
    pub property_type_id: Option<EntityId>,
    #[serde(default)]
    pub status_id: Option<EntityId>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country_id: Option<EntityId>,
    #[serde(default)]
    pub department_id: Option<EntityId>,
    #[serde(default)]
    pub city_id: Option<EntityId>,
    #[serde(default)]
    pub city_zone_id: Option<EntityId>,
    #[serde(default)]
    pub neighborhood_id: Option<EntityId>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub parking_spaces: Option<u32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub lot_size: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenity_ids: Vec<EntityId>,
    #[serde(default)]
    pub service_ids: Vec<EntityId>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub agent_id: Option<EntityId>,
    #[serde(default)]
    pub owner_contact_id: Option<EntityId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update body. Unset values are omitted rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_zone_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_spaces: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    pub images: Vec<String>,
    pub amenity_ids: Vec<EntityId>,
    pub service_ids: Vec<EntityId>,
    pub featured: bool,
    pub premium: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_contact_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_config: Option<RentalConfigDraft>,
}
