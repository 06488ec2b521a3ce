use serde::{Deserialize, Serialize};

use super::EntityId;

/// Temporary-rental terms attached to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfig {
    pub id: EntityId,
    pub property_id: EntityId,
    pub nightly_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaning_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<f64>,
    pub min_nights: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_rules: Option<String>,
}

/// Editable rental terms. All fields optional until the step is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfigDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaning_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_rules: Option<String>,
}

impl From<&RentalConfig> for RentalConfigDraft {
    fn from(config: &RentalConfig) -> Self {
        Self {
            property_id: Some(config.property_id),
            nightly_price: Some(config.nightly_price),
            weekly_price: config.weekly_price,
            monthly_price: config.monthly_price,
            cleaning_fee: config.cleaning_fee,
            security_deposit: config.security_deposit,
            min_nights: Some(config.min_nights),
            max_nights: config.max_nights,
            max_guests: config.max_guests,
            check_in_time: config.check_in_time.clone(),
            check_out_time: config.check_out_time.clone(),
            house_rules: config.house_rules.clone(),
        }
    }
}
