mod common;

use common::{json_body, services, FakeBackend};
use inmo::api::{FilePart, Method};
use inmo::models::{EntityId, NearbyFacilityLink, OwnerContactDraft, Property};
use inmo::property::steps::{
    GalleryEntry, LocationStep, MultimediaStep, NearbyFacilitiesStep, OwnerInfoStep,
    PrivateFilesStep,
};
use inmo::property::{FieldKey, PropertyForm, StepError};
use serde_json::json;

fn saved_form(id: i64) -> PropertyForm {
    let property: Property =
        serde_json::from_value(json!({ "id": id, "title": "Casa" })).expect("valid property");
    PropertyForm::for_property(&property, &[], &[], None)
}

#[tokio::test]
async fn registering_a_city_without_name_or_department_sends_nothing() {
    let backend = FakeBackend::new();
    let services = services(&backend);
    let mut step = LocationStep::new();
    let mut form = PropertyForm::new();

    let err = step
        .register_city(&services, &mut form, "Warnes")
        .await
        .unwrap_err();
    match err {
        StepError::Validation(errors) => assert!(errors.contains("newCityName")),
        other => panic!("unexpected error {other:?}"),
    }

    form.data.department_id = Some(EntityId(7));
    let err = step.register_city(&services, &mut form, "   ").await.unwrap_err();
    assert!(matches!(err, StepError::Validation(_)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn registered_city_is_selected_and_its_children_loaded() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Post,
        "/api/cities",
        json!({ "id": 12, "name": "Warnes", "departmentId": 7 }),
    );
    backend.ok(Method::Get, "/api/city-zones/city/12", json!([]));
    backend.ok(
        Method::Get,
        "/api/neighborhoods/city/12",
        json!([{ "id": 1, "name": "Centro", "cityId": 12 }]),
    );
    let services = services(&backend);
    let mut step = LocationStep::new();
    let mut form = PropertyForm::new();
    form.data.department_id = Some(EntityId(7));

    let city = step
        .register_city(&services, &mut form, " Warnes ")
        .await
        .expect("city created");

    assert_eq!(city.id, EntityId(12));
    assert_eq!(form.data.city_id, Some(EntityId(12)));
    assert_eq!(step.cities().len(), 1);
    assert_eq!(step.neighborhoods().len(), 1);
    let body = json_body(&backend.calls_to(Method::Post, "/api/cities")[0]);
    assert_eq!(body["name"], json!("Warnes"));
    assert_eq!(body["departmentId"], json!(7));
}

#[tokio::test]
async fn changing_country_clears_lower_levels() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/departments/country/2",
        json!([{ "id": 20, "name": "Lima", "countryId": 2, "active": true }]),
    );
    let services = services(&backend);
    let mut step = LocationStep::new();
    let mut form = PropertyForm::new();
    form.data.country_id = Some(EntityId(1));
    form.data.department_id = Some(EntityId(7));
    form.data.city_id = Some(EntityId(12));
    form.data.neighborhood_id = Some(EntityId(3));
    form.validate(&[FieldKey::Country]);

    step.select_country(&services, &mut form, Some(EntityId(2)))
        .await
        .expect("departments load");

    assert_eq!(form.data.country_id, Some(EntityId(2)));
    assert_eq!(form.data.department_id, None);
    assert_eq!(form.data.city_id, None);
    assert_eq!(form.data.neighborhood_id, None);
    assert_eq!(step.departments().len(), 1);
    assert!(step.cities().is_empty());
}

#[tokio::test]
async fn registering_a_neighborhood_needs_a_city() {
    let backend = FakeBackend::new();
    let services = services(&backend);
    let mut step = LocationStep::new();
    let mut form = PropertyForm::new();

    let err = step
        .register_neighborhood(&services, &mut form, "Las Palmas")
        .await
        .unwrap_err();
    assert!(matches!(err, StepError::Validation(_)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn multimedia_buffers_until_the_property_exists() {
    let backend = FakeBackend::new();
    let services = services(&backend);
    let mut step = MultimediaStep::new();
    let mut form = PropertyForm::new();

    step.add_images(
        &services,
        &mut form,
        vec![
            FilePart::new("files", "sala.jpg", vec![1]),
            FilePart::new("files", "cocina.jpg", vec![2]),
        ],
    )
    .await
    .expect("buffered");
    assert!(step
        .move_image(&services, &mut form, 1, 0)
        .await
        .expect("local reorder"));

    assert_eq!(backend.call_count(), 0);
    let names: Vec<String> = step
        .entries(&form)
        .into_iter()
        .map(|entry| match entry {
            GalleryEntry::Pending { file_name, .. } => file_name,
            GalleryEntry::Stored(image) => image.url,
        })
        .collect();
    assert_eq!(names, ["cocina.jpg", "sala.jpg"]);

    let err = step
        .add_images(&services, &mut form, vec![FilePart::new("files", "notas.txt", vec![3])])
        .await
        .unwrap_err();
    assert!(matches!(err, StepError::Rejected(_)));
}

#[tokio::test]
async fn multimedia_uploads_and_reorders_directly_when_editing() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Post,
        "/api/gallery-images/property/10",
        json!([
            { "id": 1, "propertyId": 10, "url": "https://cdn/1.jpg", "displayOrder": 0 },
            { "id": 2, "propertyId": 10, "url": "https://cdn/2.jpg", "displayOrder": 1 }
        ]),
    );
    backend.respond(
        Method::Put,
        "/api/gallery-images/property/10/reorder",
        204,
        serde_json::Value::Null,
    );
    let services = services(&backend);
    let mut step = MultimediaStep::new();
    let mut form = saved_form(10);

    step.add_images(
        &services,
        &mut form,
        vec![
            FilePart::new("files", "1.jpg", vec![1]),
            FilePart::new("files", "2.jpg", vec![2]),
        ],
    )
    .await
    .expect("uploaded");
    assert!(form.pending.is_empty());

    step.move_image(&services, &mut form, 1, 0)
        .await
        .expect("reordered");
    let reorder = backend.calls_to(Method::Put, "/api/gallery-images/property/10/reorder");
    assert_eq!(json_body(&reorder[0]), json!({ "imageIds": [2, 1] }));
}

#[tokio::test]
async fn nearby_conflict_reports_already_associated() {
    let backend = FakeBackend::new();
    backend.respond(
        Method::Post,
        "/api/properties/10/nearby-facilities",
        409,
        serde_json::Value::Null,
    );
    let services = services(&backend);
    let mut step = NearbyFacilitiesStep::new();
    let mut form = saved_form(10);
    let link = NearbyFacilityLink {
        nearby_facility_id: EntityId(4),
        distance: Some(250.0),
        walking_time: Some(3),
    };

    let err = step.add(&services, &mut form, link).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Este lugar ya está asociado a la propiedad"
    );
    assert!(form.data.nearby_facilities.is_empty());
}

#[tokio::test]
async fn nearby_edits_are_local_for_new_properties() {
    let backend = FakeBackend::new();
    let services = services(&backend);
    let mut step = NearbyFacilitiesStep::new();
    let mut form = PropertyForm::new();
    let link = NearbyFacilityLink {
        nearby_facility_id: EntityId(4),
        distance: None,
        walking_time: None,
    };

    step.add(&services, &mut form, link.clone()).await.expect("added");
    assert!(step.add(&services, &mut form, link).await.is_err());
    step.remove(&services, &mut form, EntityId(4))
        .await
        .expect("removed");

    assert!(form.data.nearby_facilities.is_empty());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn private_files_go_pending_without_an_id() {
    let backend = FakeBackend::new();
    let services = services(&backend);
    let mut step = PrivateFilesStep::new();
    let mut form = PropertyForm::new();

    step.add(&services, &mut form, FilePart::new("file", "escritura.pdf", vec![1]))
        .await
        .expect("buffered");
    assert_eq!(form.pending.private_files().len(), 1);
    assert!(step.remove_pending(&mut form, 0));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn owner_is_validated_then_created_and_selected() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Post,
        "/api/owner-contacts",
        json!({ "id": 8, "name": "Lucía Rojas", "phone": "+591 70000000" }),
    );
    let services = services(&backend);
    let mut step = OwnerInfoStep::new();
    let mut form = PropertyForm::new();

    let invalid = OwnerContactDraft {
        name: "Lucía Rojas".to_string(),
        email: Some("lucia@".to_string()),
        ..OwnerContactDraft::default()
    };
    let err = step.create(&services, &mut form, invalid).await.unwrap_err();
    match err {
        StepError::Validation(errors) => assert!(errors.contains("email")),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(backend.call_count(), 0);

    let draft = OwnerContactDraft {
        name: "Lucía Rojas".to_string(),
        phone: Some("+591 70000000".to_string()),
        ..OwnerContactDraft::default()
    };
    let owner = step.create(&services, &mut form, draft).await.expect("created");
    assert_eq!(form.data.owner_contact_id, Some(owner.id));
    assert_eq!(step.selected(&form).map(|o| o.name.as_str()), Some("Lucía Rojas"));
}
