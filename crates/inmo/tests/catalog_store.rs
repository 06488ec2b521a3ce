mod common;

use common::{json_body, services, FakeBackend};
use inmo::api::Method;
use inmo::models::{CityDraft, CountryDraft, EntityId};
use inmo::services::CatalogService;
use inmo::store::{CatalogScreen, CatalogScreenError, CatalogStore};
use serde_json::json;

#[tokio::test]
async fn created_row_appears_exactly_once() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/cities",
        json!([{ "id": 1, "name": "Santa Cruz", "departmentId": 7 }]),
    );
    backend.ok(
        Method::Post,
        "/api/cities",
        json!({ "id": 2, "name": "Montero", "departmentId": 7 }),
    );
    let mut store = CatalogStore::new(services(&backend).cities);
    store.reload().await.expect("list loads");

    let draft = CityDraft {
        name: "Montero".to_string(),
        department_id: Some(EntityId(7)),
        state: None,
    };
    store.create(&draft).await.expect("created");
    // A second answer with the same id must replace, not duplicate.
    store.create(&draft).await.expect("created again");

    let ids: Vec<EntityId> = store.items().iter().map(|city| city.id).collect();
    assert_eq!(ids, vec![EntityId(1), EntityId(2)]);
    assert!(store.error().is_none());
}

#[tokio::test]
async fn update_replaces_and_remove_filters() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/countries",
        json!([
            { "id": 1, "name": "Bolivia", "code": "BO" },
            { "id": 2, "name": "Peru", "code": "PE" }
        ]),
    );
    backend.ok(
        Method::Put,
        "/api/countries/2",
        json!({ "id": 2, "name": "Perú", "code": "PE" }),
    );
    backend.respond(Method::Delete, "/api/countries/1", 204, serde_json::Value::Null);

    let mut store = CatalogStore::new(services(&backend).countries);
    store.reload().await.expect("list loads");

    let draft = CountryDraft {
        name: "Perú".to_string(),
        code: "PE".to_string(),
        phone_code: None,
    };
    store.update(EntityId(2), &draft).await.expect("updated");
    assert_eq!(store.find(EntityId(2)).map(|c| c.name.as_str()), Some("Perú"));

    store.remove(EntityId(1)).await.expect("removed");
    assert!(store.find(EntityId(1)).is_none());
    assert_eq!(store.items().len(), 1);
}

#[tokio::test]
async fn failed_call_keeps_list_and_records_error() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/agents",
        json!([{ "id": 5, "name": "Ana Suárez", "active": true }]),
    );
    backend.respond(
        Method::Delete,
        "/api/agents/5",
        500,
        json!({ "message": "tiene propiedades asignadas" }),
    );

    let mut store = CatalogStore::new(services(&backend).agents);
    store.reload().await.expect("list loads");
    let err = store.remove(EntityId(5)).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(store.items().len(), 1);
    assert_eq!(
        store.error(),
        Some("Error al eliminar el agente: tiene propiedades asignadas (HTTP 500)")
    );

    store.reload().await.expect("reload succeeds");
    assert!(store.error().is_none());
}

#[tokio::test]
async fn parent_filter_uses_nested_path() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/departments/country/1",
        json!([{ "id": 7, "name": "Santa Cruz", "countryId": 1, "active": true }]),
    );
    let mut store = CatalogStore::new(services(&backend).departments);
    store.reload_for_parent(EntityId(1)).await.expect("loads");
    assert_eq!(store.parent(), Some(EntityId(1)));
    assert_eq!(store.items()[0].name, "Santa Cruz");
}

#[tokio::test]
async fn screen_validates_before_calling_backend() {
    let backend = FakeBackend::new();
    let mut screen = CatalogScreen::new(CatalogStore::new(services(&backend).cities));

    screen.open_create();
    screen.edit_draft(|draft| draft.name = "  ".to_string());
    let err = screen.submit().await.unwrap_err();
    match err {
        CatalogScreenError::Validation(errors) => {
            assert!(errors.contains("name"));
            assert!(errors.contains("departmentId"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(backend.call_count(), 0);
    assert!(screen.is_form_open());
}

#[tokio::test]
async fn screen_submit_normalizes_country_code() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Post,
        "/api/countries",
        json!({ "id": 3, "name": "Chile", "code": "CL" }),
    );
    let service: CatalogService<_> = services(&backend).countries;
    let mut screen = CatalogScreen::new(CatalogStore::new(service));

    screen.open_create();
    screen.edit_draft(|draft| {
        draft.name = " Chile ".to_string();
        draft.code = "cl".to_string();
    });
    let created = screen.submit().await.expect("created");

    assert_eq!(created.code, "CL");
    assert!(!screen.is_form_open());
    let body = json_body(&backend.calls_to(Method::Post, "/api/countries")[0]);
    assert_eq!(body["code"], json!("CL"));
    assert_eq!(body["name"], json!("Chile"));
}

#[tokio::test]
async fn delete_needs_confirmation() {
    let backend = FakeBackend::new();
    backend.ok(
        Method::Get,
        "/api/neighborhoods",
        json!([{ "id": 9, "name": "Equipetrol", "cityId": 1 }]),
    );
    backend.respond(Method::Delete, "/api/neighborhoods/9", 204, serde_json::Value::Null);
    let mut screen = CatalogScreen::new(CatalogStore::new(services(&backend).neighborhoods));
    screen.store_mut().reload().await.expect("loads");

    assert!(matches!(
        screen.confirm_delete().await,
        Err(CatalogScreenError::NothingToDelete)
    ));
    screen.request_delete(EntityId(9));
    screen.cancel_delete();
    assert!(screen.pending_delete().is_none());

    screen.request_delete(EntityId(9));
    let removed = screen.confirm_delete().await.expect("deleted");
    assert_eq!(removed, EntityId(9));
    assert!(screen.store().items().is_empty());
}
