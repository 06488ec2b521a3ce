use chrono::{Datelike, Utc};

use super::fields::FieldKey;
use super::form::PropertyFormData;
use crate::validation::{char_len, is_blank};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const ADDRESS_MIN_CHARS: usize = 5;
const OLDEST_YEAR_BUILT: i32 = 1800;

fn positive(value: Option<f64>) -> bool {
    value.map(|v| v.is_finite() && v > 0.0).unwrap_or(false)
}

/// Message for `key` when its current value is invalid.
pub fn check(data: &PropertyFormData, key: FieldKey) -> Option<String> {
    let message = match key {
        FieldKey::Title => {
            let len = char_len(&data.title);
            if len == 0 {
                "El título es obligatorio".to_string()
            } else if len < TITLE_MIN_CHARS {
                format!("El título debe tener al menos {TITLE_MIN_CHARS} caracteres")
            } else if len > TITLE_MAX_CHARS {
                format!("El título no puede superar los {TITLE_MAX_CHARS} caracteres")
            } else {
                return None;
            }
        }
        FieldKey::Description if char_len(&data.description) > DESCRIPTION_MAX_CHARS => {
            format!("La descripción no puede superar los {DESCRIPTION_MAX_CHARS} caracteres")
        }
        FieldKey::Price if !positive(data.price) => "El precio debe ser mayor a 0".to_string(),
        FieldKey::Currency => {
            let currency = data.currency.trim();
            if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
                return None;
            }
            "Seleccione una moneda".to_string()
        }
        FieldKey::OperationType if data.operation_type.is_none() => {
            "Seleccione el tipo de operación".to_string()
        }
        FieldKey::PropertyType if data.property_type_id.is_none() => {
            "Seleccione el tipo de propiedad".to_string()
        }
        FieldKey::Area if data.area.is_some() && !positive(data.area) => {
            "El área debe ser mayor a 0".to_string()
        }
        FieldKey::LotSize
            if data
                .lot_size
                .map(|v| !v.is_finite() || v < 0.0)
                .unwrap_or(false) =>
        {
            "La superficie del terreno no puede ser negativa".to_string()
        }
        FieldKey::YearBuilt => {
            let latest = Utc::now().year() + 5;
            match data.year_built {
                Some(year) if !(OLDEST_YEAR_BUILT..=latest).contains(&year) => {
                    format!(
                        "El año de construcción debe estar entre {OLDEST_YEAR_BUILT} y {latest}"
                    )
                }
                _ => return None,
            }
        }
        FieldKey::Address => {
            let len = char_len(&data.address);
            if len == 0 {
                "La dirección es obligatoria".to_string()
            } else if len < ADDRESS_MIN_CHARS {
                format!("La dirección debe tener al menos {ADDRESS_MIN_CHARS} caracteres")
            } else {
                return None;
            }
        }
        FieldKey::Country if data.country_id.is_none() => "Seleccione un país".to_string(),
        FieldKey::Department if data.department_id.is_none() => {
            "Seleccione un departamento".to_string()
        }
        FieldKey::City if data.city_id.is_none() => "Seleccione una ciudad".to_string(),
        FieldKey::Latitude
            if data
                .latitude
                .map(|v| !(-90.0..=90.0).contains(&v))
                .unwrap_or(false) =>
        {
            "La latitud debe estar entre -90 y 90".to_string()
        }
        FieldKey::Longitude
            if data
                .longitude
                .map(|v| !(-180.0..=180.0).contains(&v))
                .unwrap_or(false) =>
        {
            "La longitud debe estar entre -180 y 180".to_string()
        }
        FieldKey::FloorPlans if data.floor_plans.iter().any(|plan| is_blank(&plan.name)) => {
            "Cada plano necesita un nombre".to_string()
        }
        FieldKey::RentalNightlyPrice
            if data.is_temporary_rent() && !positive(data.rental_config.nightly_price) =>
        {
            "El precio por noche debe ser mayor a 0".to_string()
        }
        FieldKey::RentalMinNights
            if data.is_temporary_rent() && data.rental_config.min_nights.unwrap_or(0) < 1 =>
        {
            "La estadía mínima debe ser de al menos 1 noche".to_string()
        }
        FieldKey::RentalMaxNights if data.is_temporary_rent() => {
            let config = &data.rental_config;
            match (config.min_nights, config.max_nights) {
                (Some(min), Some(max)) if max < min => {
                    "La estadía máxima debe ser mayor o igual a la mínima".to_string()
                }
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(message)
}
