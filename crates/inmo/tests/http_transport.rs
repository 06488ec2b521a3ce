use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use inmo::api::{ApiClient, ApiError, FilePart};
use inmo::config::ApiConfig;
use inmo::models::{CountryDraft, EntityId, NearbyFacilityLink};
use inmo::services::Services;
use serde_json::{json, Value};

async fn country(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 1 {
        (
            StatusCode::OK,
            Json(json!({ "id": 1, "name": "Bolivia", "code": "BO", "phoneCode": "+591" })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "no existe" })))
    }
}

async fn create_country(Json(body): Json<Value>) -> impl IntoResponse {
    let mut created = body;
    created["id"] = json!(7);
    (StatusCode::CREATED, Json(created))
}

async fn link_facility() -> impl IntoResponse {
    (
        StatusCode::CONFLICT,
        Json(json!({ "message": "el lugar ya fue asociado" })),
    )
}

async fn upload_private_file(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let text = String::from_utf8_lossy(&body);
    if !content_type.starts_with("multipart/form-data")
        || !text.contains("name=\"file\"")
        || !text.contains("filename=\"contrato.pdf\"")
    {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "multipart inválido" })));
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 3,
            "propertyId": 1,
            "fileName": "contrato.pdf",
            "url": "https://files.example.com/3",
            "size": 4
        })),
    )
}

async fn spawn_backend() -> Services {
    let router = Router::new()
        .route("/api/countries/:id", get(country))
        .route("/api/countries", post(create_country))
        .route("/api/properties/:id/nearby-facilities", post(link_facility))
        .route("/api/private-files/property/:id", post(upload_private_file));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend");
    });

    let config = ApiConfig::new(format!("http://{addr}/"), Duration::from_secs(5)).expect("config");
    Services::new(ApiClient::http(&config).expect("client"))
}

#[tokio::test]
async fn get_by_id_maps_404_to_none() {
    let services = spawn_backend().await;

    let found = services.countries.get_by_id(EntityId(1)).await.expect("request ok");
    assert_eq!(found.map(|c| c.phone_code), Some(Some("+591".to_string())));

    let missing = services.countries.get_by_id(EntityId(2)).await.expect("request ok");
    assert!(missing.is_none());
}

#[tokio::test]
async fn json_bodies_round_trip_through_http() {
    let services = spawn_backend().await;
    let draft = CountryDraft {
        name: "Paraguay".to_string(),
        code: "PY".to_string(),
        phone_code: None,
    };
    let created = services.countries.create(&draft).await.expect("created");
    assert_eq!(created.id, EntityId(7));
    assert_eq!(created.code, "PY");
}

#[tokio::test]
async fn conflict_status_becomes_conflict_error() {
    let services = spawn_backend().await;
    let link = NearbyFacilityLink {
        nearby_facility_id: EntityId(2),
        distance: None,
        walking_time: None,
    };
    let err = services
        .nearby_facilities
        .add(EntityId(1), &link)
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(
        err,
        ApiError::Conflict {
            message: "Error al asociar el lugar cercano: el lugar ya fue asociado".to_string()
        }
    );
}

#[tokio::test]
async fn uploads_are_sent_as_multipart() {
    let services = spawn_backend().await;
    let file = FilePart::new("ignored", "contrato.pdf", b"%PDF".to_vec());
    let stored = services
        .private_files
        .upload(EntityId(1), file)
        .await
        .expect("uploaded");
    assert_eq!(stored.file_name, "contrato.pdf");
    assert_eq!(stored.size, Some(4));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let config = ApiConfig::new("http://127.0.0.1:9", Duration::from_millis(500)).expect("config");
    let services = Services::new(ApiClient::http(&config).expect("client"));
    let err = services.countries.get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}
