use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::router::doctor_routes;
use doctor_cell::{Doctor, DoctorService, UpdateDoctorRequest};
use shared_config::KeyStrategy;
use shared_database::{AppState, Database};
use shared_utils::test_utils::{send_json, MockPostgrestResponses, TestConfig, TestUser};

fn create_test_app(state: std::sync::Arc<AppState>) -> Router {
    doctor_routes(state)
}

fn doctor_json(first_name: &str, hospital_name: &str) -> Value {
    let mut body = TestUser::unique(first_name).to_json();
    body["specialisation"] = json!("Cardiology");
    body["hospitalName"] = json!(hospital_name);
    body
}

#[tokio::test]
async fn test_doctors_sharing_a_hospital_persist_independently() {
    let state = TestConfig::default().memory_state();

    let (status, first) = send_json(
        create_test_app(state.clone()),
        Method::POST,
        "/",
        Some(doctor_json("Ada", "General Hospital")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = send_json(
        create_test_app(state.clone()),
        Method::POST,
        "/",
        Some(doctor_json("Brian", "General Hospital")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(first["id"], second["id"]);

    let (_, listed) = send_json(create_test_app(state), Method::GET, "/", None).await;
    assert_eq!(listed["total"], 2);
    assert_eq!(listed["doctors"][0]["hospitalName"], "General Hospital");
    assert_eq!(listed["doctors"][1]["hospitalName"], "General Hospital");
}

#[tokio::test]
async fn test_hospital_name_is_not_a_foreign_key() {
    // No hospital with this name exists anywhere; the doctor is stored regardless.
    let service = DoctorService::new(&Database::memory(KeyStrategy::Generated));
    let doctor = Doctor::new("Ada", "Byrne", "ada@x.com", "555", "pw", "Oncology", "Nowhere Clinic");

    let stored = service.create_doctor(doctor.clone()).await.unwrap();

    assert_eq!(stored.record, doctor);
    assert_eq!(stored.record.full_name(), "Ada Byrne");
}

#[tokio::test]
async fn test_patch_doctor_changes_specialisation_only() {
    let service = DoctorService::new(&Database::memory(KeyStrategy::Sequential));
    let doctor = Doctor::new("Ada", "Byrne", "ada@x.com", "555", "pw", "Oncology", "General Hospital");
    let created = service.create_doctor(doctor.clone()).await.unwrap();

    let changes = UpdateDoctorRequest {
        specialisation: Some("Radiology".to_string()),
        ..Default::default()
    };
    service.patch_doctor(&created.id, changes).await.unwrap();

    let found = service.get_doctor(&created.id).await.unwrap().unwrap();
    assert_eq!(found.record.specialisation, "Radiology");
    assert_eq!(found.record.user, doctor.user);
    assert_eq!(found.record.hospital_name, doctor.hospital_name);
}

#[tokio::test]
async fn test_get_missing_doctor() {
    let state = TestConfig::default().memory_state();

    let (status, body) = send_json(create_test_app(state), Method::GET, "/12", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Doctor 12 not found");
}

#[tokio::test]
async fn test_create_doctor_maps_columns_for_relational_store() {
    let mock_server = MockServer::start().await;
    let body = doctor_json("Ada", "General Hospital");

    Mock::given(method("POST"))
        .and(path("/rest/v1/doctor"))
        .and(body_partial_json(json!({
            "first_name": "Ada",
            "hospital_name": "General Hospital",
            "specialisation": "Cardiology"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockPostgrestResponses::row(3, body.clone())
        ])))
        .mount(&mock_server)
        .await;

    let state = TestConfig::relational(&mock_server.uri()).relational_state();
    let (status, created) = send_json(create_test_app(state), Method::POST, "/", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], "3");
    assert_eq!(created["hospitalName"], "General Hospital");
}

#[tokio::test]
async fn test_delete_doctor_from_relational_store() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/doctor"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockPostgrestResponses::row(3, doctor_json("Ada", "General Hospital"))
        ])))
        .mount(&mock_server)
        .await;

    let state = TestConfig::relational(&mock_server.uri()).relational_state();
    let (status, body) = send_json(create_test_app(state), Method::DELETE, "/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": true, "id": "3" }));
}

#[tokio::test]
async fn test_patch_null_description_clears_it() {
    let state = TestConfig::default().memory_state();
    let mut body = doctor_json("Ada", "General Hospital");
    body["description"] = json!("Consultant");

    let (_, created) = send_json(create_test_app(state.clone()), Method::POST, "/", Some(body)).await;
    let item = format!("/{}", created["id"].as_str().unwrap());

    let (status, patched) = send_json(
        create_test_app(state.clone()),
        Method::PATCH,
        &item,
        Some(json!({ "description": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(patched["description"].is_null());
    assert_eq!(patched["specialisation"], "Cardiology");

    let (status, untouched) = send_json(
        create_test_app(state),
        Method::PATCH,
        &item,
        Some(json!({ "specialisation": "Radiology" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(untouched["description"].is_null());
}
