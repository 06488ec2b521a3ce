use super::form::PropertyFormData;
use crate::models::{EntityId, PropertyPayload, RentalConfigDraft};

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Two decimals is what the backend stores for money and surfaces.
fn money(value: Option<f64>) -> Option<f64> {
    finite(value).map(|v| (v * 100.0).round() / 100.0)
}

fn unique<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut seen: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

fn rental_payload(draft: &RentalConfigDraft) -> RentalConfigDraft {
    RentalConfigDraft {
        property_id: draft.property_id,
        nightly_price: money(draft.nightly_price),
        weekly_price: money(draft.weekly_price),
        monthly_price: money(draft.monthly_price),
        cleaning_fee: money(draft.cleaning_fee),
        security_deposit: money(draft.security_deposit),
        min_nights: draft.min_nights,
        max_nights: draft.max_nights,
        max_guests: draft.max_guests,
        check_in_time: draft.check_in_time.as_deref().and_then(text),
        check_out_time: draft.check_out_time.as_deref().and_then(text),
        house_rules: draft.house_rules.as_deref().and_then(text),
    }
}

/// Shape the form into one create/update body. Blank strings and
/// non-finite numbers are omitted instead of being sent empty.
pub fn build_property_payload(
    data: &PropertyFormData,
    status_id: Option<EntityId>,
) -> PropertyPayload {
    let images: Vec<String> = data.images.iter().filter_map(|url| text(url)).collect();

    PropertyPayload {
        title: text(&data.title),
        description: text(&data.description),
        price: money(data.price),
        currency: text(&data.currency).map(|c| c.to_ascii_uppercase()),
        operation_type: data.operation_type,
        property_type_id: data.property_type_id,
        status_id: status_id.or(data.status_id),
        address: text(&data.address),
        country_id: data.country_id,
        department_id: data.department_id,
        city_id: data.city_id,
        city_zone_id: data.city_zone_id,
        neighborhood_id: data.neighborhood_id,
        latitude: finite(data.latitude),
        longitude: finite(data.longitude),
        bedrooms: data.bedrooms,
        bathrooms: data.bathrooms,
        parking_spaces: data.parking_spaces,
        area: money(data.area),
        lot_size: money(data.lot_size),
        year_built: data.year_built,
        floor: data.floor,
        images: unique(&images),
        amenity_ids: unique(&data.amenity_ids),
        service_ids: unique(&data.service_ids),
        featured: data.featured,
        premium: data.premium,
        visible: data.visible,
        agent_id: data.agent_id,
        owner_contact_id: data.owner_contact_id,
        rental_config: data
            .is_temporary_rent()
            .then(|| rental_payload(&data.rental_config)),
    }
}
