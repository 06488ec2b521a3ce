use crate::api::ApiError;
use crate::config::ConfigError;
use crate::models::EntityId;
use crate::property::{EditorError, SaveError, StepError};
use crate::store::CatalogScreenError;
use crate::telemetry::TelemetryError;
use crate::validation::FormErrors;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Api(ApiError),
    Validation(FormErrors),
    NotFound(EntityId),
    Save(SaveError),
    Input(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Api(err) => write!(f, "{}", err),
            AppError::Validation(errors) => write!(f, "validation failed: {}", errors),
            AppError::NotFound(id) => write!(f, "record {} not found", id),
            AppError::Save(err) => write!(f, "save failed: {}", err),
            AppError::Input(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Api(err) => Some(err),
            AppError::Validation(errors) => Some(errors),
            AppError::Save(err) => Some(err),
            AppError::NotFound(_) | AppError::Input(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ApiError> for AppError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<FormErrors> for AppError {
    fn from(value: FormErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<SaveError> for AppError {
    fn from(value: SaveError) -> Self {
        match value {
            SaveError::Api(err) => Self::Api(err),
            other => Self::Save(other),
        }
    }
}

impl From<EditorError> for AppError {
    fn from(value: EditorError) -> Self {
        match value {
            EditorError::NotFound(id) => Self::NotFound(id),
            EditorError::Validation(errors) => Self::Validation(errors),
            EditorError::NotSaved => Self::Input(EditorError::NotSaved.to_string()),
            EditorError::Save(err) => err.into(),
            EditorError::Api(err) => Self::Api(err),
        }
    }
}

impl From<StepError> for AppError {
    fn from(value: StepError) -> Self {
        match value {
            StepError::Validation(errors) => Self::Validation(errors),
            StepError::Rejected(message) => Self::Input(message),
            StepError::Api(err) => Self::Api(err),
        }
    }
}

impl From<CatalogScreenError> for AppError {
    fn from(value: CatalogScreenError) -> Self {
        match value {
            CatalogScreenError::Validation(errors) => Self::Validation(errors),
            CatalogScreenError::Api(err) => Self::Api(err),
            CatalogScreenError::UnknownRow(id) => Self::NotFound(id),
            other => Self::Input(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_not_found_maps_to_not_found() {
        let err = AppError::from(EditorError::NotFound(EntityId(42)));
        assert!(matches!(err, AppError::NotFound(EntityId(42))));
        assert_eq!(err.to_string(), "record 42 not found");
    }

    #[test]
    fn save_api_failures_keep_the_backend_message() {
        let api = ApiError::Status {
            status: 500,
            message: "Error al crear la propiedad: boom".to_string(),
        };
        let err = AppError::from(EditorError::Save(SaveError::Api(api.clone())));
        assert_eq!(err.to_string(), api.to_string());
    }
}
