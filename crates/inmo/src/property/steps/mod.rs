//! Wizard steps. Each one covers a slice of [`PropertyFormData`] and names the
//! fields that must be valid before the wizard moves past it. Steps with their
//! own backend calls or local state live in the submodules.

mod features;
mod floor_plans;
mod location;
mod multimedia;
mod nearby;
mod owner;
mod private_files;

pub use features::FeaturesStep;
pub use floor_plans::FloorPlansStep;
pub use location::LocationStep;
pub use multimedia::{GalleryEntry, MultimediaStep};
pub use nearby::NearbyFacilitiesStep;
pub use owner::OwnerInfoStep;
pub use private_files::{PrivateFileEntry, PrivateFilesStep};

use std::fmt;

use serde::Serialize;

use super::fields::FieldKey;
use super::form::PropertyFormData;
use crate::api::ApiError;
use crate::validation::FormErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    TypeAndOperation,
    Characteristics,
    Location,
    Multimedia,
    Amenities,
    Services,
    PrivateFiles,
    Visibility,
    FloorPlans,
    NearbyFacilities,
    OwnerInfo,
    RentalConfig,
}

impl Step {
    pub const ALL: [Step; 12] = [
        Step::TypeAndOperation,
        Step::Characteristics,
        Step::Location,
        Step::Multimedia,
        Step::Amenities,
        Step::Services,
        Step::PrivateFiles,
        Step::Visibility,
        Step::FloorPlans,
        Step::NearbyFacilities,
        Step::OwnerInfo,
        Step::RentalConfig,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::TypeAndOperation => "Tipo y operación",
            Step::Characteristics => "Características",
            Step::Location => "Ubicación",
            Step::Multimedia => "Multimedia",
            Step::Amenities => "Comodidades",
            Step::Services => "Servicios",
            Step::PrivateFiles => "Archivos privados",
            Step::Visibility => "Visibilidad",
            Step::FloorPlans => "Planos",
            Step::NearbyFacilities => "Lugares cercanos",
            Step::OwnerInfo => "Propietario",
            Step::RentalConfig => "Alquiler temporal",
        }
    }

    /// Fields checked when the wizard crosses this step.
    pub fn required_fields(&self) -> &'static [FieldKey] {
        match self {
            Step::TypeAndOperation => &[
                FieldKey::Title,
                FieldKey::Description,
                FieldKey::OperationType,
                FieldKey::PropertyType,
                FieldKey::Price,
                FieldKey::Currency,
            ],
            Step::Characteristics => &[FieldKey::Area, FieldKey::LotSize, FieldKey::YearBuilt],
            Step::Location => &[
                FieldKey::Address,
                FieldKey::Country,
                FieldKey::Department,
                FieldKey::City,
                FieldKey::Latitude,
                FieldKey::Longitude,
            ],
            Step::FloorPlans => &[FieldKey::FloorPlans],
            Step::RentalConfig => &[
                FieldKey::RentalNightlyPrice,
                FieldKey::RentalMinNights,
                FieldKey::RentalMaxNights,
            ],
            Step::Multimedia
            | Step::Amenities
            | Step::Services
            | Step::PrivateFiles
            | Step::Visibility
            | Step::NearbyFacilities
            | Step::OwnerInfo => &[],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Steps shown for the current form. The rental step only exists for
/// temporary rentals.
pub fn steps_for(data: &PropertyFormData) -> Vec<Step> {
    Step::ALL
        .into_iter()
        .filter(|step| *step != Step::RentalConfig || data.is_temporary_rent())
        .collect()
}

/// Failure of an action run from inside a step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepError {
    #[error("{0}")]
    Validation(FormErrors),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StepError {
    pub(crate) fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FormErrors::new();
        errors.insert(field, message);
        StepError::Validation(errors)
    }
}
