mod common;

use common::{services, FakeBackend};
use inmo::api::Method;
use inmo::models::{EntityId, OperationType};
use inmo::property::{EditorError, FieldChange, FieldKey, PropertyEditor, SaveStep, Step};
use serde_json::json;

#[tokio::test]
async fn opening_a_missing_property_is_not_found() {
    let backend = FakeBackend::new();
    let err = PropertyEditor::open(services(&backend), EntityId(99))
        .await
        .unwrap_err();
    assert!(matches!(err, EditorError::NotFound(EntityId(99))));
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn opening_loads_sub_resources_into_the_form() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/properties/10",
        json!({
            "id": 10,
            "title": "Cabaña en Samaipata",
            "operationType": "temporary_rent",
            "price": 90.0,
            "currency": "BOB"
        }),
    );
    backend.ok(
        Method::Get,
        "/api/floor-plans/property/10",
        json!([
            { "id": 2, "propertyId": 10, "name": "Altillo", "displayOrder": 1 },
            { "id": 1, "propertyId": 10, "name": "Planta baja", "displayOrder": 0 }
        ]),
    );
    backend.ok(
        Method::Get,
        "/api/properties/10/nearby-facilities",
        json!([{ "id": 5, "propertyId": 10, "nearbyFacilityId": 3, "walkingTime": 10 }]),
    );
    backend.ok(
        Method::Get,
        "/api/rental-configs/property/10",
        json!({ "id": 4, "propertyId": 10, "nightlyPrice": 90.0, "minNights": 2 }),
    );

    let editor = PropertyEditor::open(services(&backend), EntityId(10))
        .await
        .expect("opened");
    let data = &editor.form().data;

    assert!(editor.load_warnings().is_empty());
    assert!(!editor.is_new());
    assert_eq!(data.currency, "BOB");
    let names: Vec<&str> = data.floor_plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Planta baja", "Altillo"]);
    assert_eq!(data.nearby_facilities[0].walking_time, Some(10));
    assert_eq!(data.rental_config.nightly_price, Some(90.0));
    assert_eq!(editor.wizard().steps(editor.form()).len(), 12);
    assert!(!editor.has_unsaved_changes());
}

#[tokio::test]
async fn sub_resource_load_failures_become_warnings() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/properties/10",
        json!({ "id": 10, "title": "Casa", "operationType": "sale" }),
    );
    backend.respond(
        Method::Get,
        "/api/floor-plans/property/10",
        500,
        json!({ "message": "timeout" }),
    );
    backend.ok(Method::Get, "/api/properties/10/nearby-facilities", json!([]));

    let editor = PropertyEditor::open(services(&backend), EntityId(10))
        .await
        .expect("opened despite the failing section");

    assert_eq!(editor.load_warnings().len(), 1);
    assert_eq!(editor.load_warnings()[0].step, SaveStep::FloorPlans);
    assert!(editor.form().data.floor_plans.is_empty());
    // Sales have no rental terms to fetch.
    assert!(backend
        .trace()
        .iter()
        .all(|(_, path)| !path.starts_with("/api/rental-configs")));
}

#[tokio::test]
async fn submit_validates_every_step_before_calling() {
    let backend = FakeBackend::new();
    let mut editor = PropertyEditor::new_property(services(&backend));
    editor
        .form_mut()
        .handle_change(FieldChange::OperationType(Some(OperationType::TemporaryRent)));

    let err = editor.submit().await.unwrap_err();
    let EditorError::Validation(errors) = err else {
        panic!("expected validation errors");
    };
    assert!(errors.contains(FieldKey::Title.as_str()));
    assert!(errors.contains(FieldKey::Address.as_str()));
    assert!(errors.contains(FieldKey::RentalNightlyPrice.as_str()));
    assert_eq!(backend.call_count(), 0);
    assert!(editor.has_unsaved_changes());
}

#[tokio::test]
async fn draft_then_publish() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/property-statuses",
        json!([{ "id": 4, "name": "Borrador" }, { "id": 5, "name": "Publicada" }]),
    );
    backend.ok(
        Method::Post,
        "/api/properties",
        json!({ "id": 10, "title": "Lote", "statusId": 4 }),
    );
    backend.ok(Method::Get, "/api/floor-plans/property/10", json!([]));
    backend.ok(Method::Get, "/api/properties/10/nearby-facilities", json!([]));
    backend.ok(
        Method::Post,
        "/api/properties/10/publish",
        json!({ "id": 10, "title": "Lote", "statusId": 5 }),
    );

    let mut editor = PropertyEditor::new_property(services(&backend));
    assert!(matches!(editor.publish().await, Err(EditorError::NotSaved)));

    editor
        .form_mut()
        .handle_change(FieldChange::Title("Lote".to_string()));
    assert!(editor.has_unsaved_changes());

    let outcome = editor.save_draft().await.expect("draft saved");
    assert!(outcome.created);
    assert!(!editor.has_unsaved_changes());

    let published = editor.publish().await.expect("published");
    assert_eq!(published.status_id, Some(EntityId(5)));
    assert_eq!(editor.form().data.status_id, Some(EntityId(5)));
}

#[tokio::test]
async fn navigation_follows_the_visible_steps() {
    let backend = FakeBackend::new();
    let mut editor = PropertyEditor::new_property(services(&backend));
    assert_eq!(editor.current_step(), Step::TypeAndOperation);
    assert!(!editor.next());

    let form = editor.form_mut();
    form.handle_change(FieldChange::Title("Oficina en el centro".to_string()));
    form.handle_change(FieldChange::OperationType(Some(OperationType::Rent)));
    form.handle_change(FieldChange::PropertyType(Some(EntityId(3))));
    form.handle_change(FieldChange::Price(Some(800.0)));

    assert!(editor.next());
    assert_eq!(editor.current_step(), Step::Characteristics);
    assert!(editor.go_to(0));
    editor.back();
    assert_eq!(editor.current_step(), Step::TypeAndOperation);
}
