use axum::http::{Method, StatusCode};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{appointment_routes, Appointment, AppointmentService, UpdateAppointmentRequest};
use shared_config::KeyStrategy;
use shared_database::Database;
use shared_utils::test_utils::{send_json, MockPostgrestResponses, TestConfig};

fn checkup() -> Appointment {
    Appointment::new("2024-12-25", "10:00", "Dr. Ada Byrne", "General Hospital")
}

#[tokio::test]
async fn test_create_appointment_returns_id() {
    let state = TestConfig::default().memory_state();

    let (status, body) = send_json(
        appointment_routes(state),
        Method::POST,
        "/",
        Some(json!({
            "date": "2024-12-25",
            "time": "10:00",
            "doctorName": "Dr. Ada Byrne",
            "hospitalName": "General Hospital"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["doctorName"], "Dr. Ada Byrne");
}

#[tokio::test]
async fn test_double_booking_is_not_detected() {
    let service = AppointmentService::new(&Database::memory(KeyStrategy::Sequential));

    let first = service.create_appointment(checkup()).await.unwrap();
    let second = service.create_appointment(checkup()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.record, second.record);
    assert_eq!(service.list_appointments().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_free_text_fields_are_kept_verbatim() {
    let service = AppointmentService::new(&Database::memory(KeyStrategy::Generated));
    let odd = Appointment::new("next tuesday", "after lunch", "", "Unknown Clinic");

    let stored = service.create_appointment(odd.clone()).await.unwrap();

    assert_eq!(service.get_appointment(&stored.id).await.unwrap().unwrap().record, odd);
}

#[tokio::test]
async fn test_patch_moves_time_only() {
    let service = AppointmentService::new(&Database::memory(KeyStrategy::Sequential));
    let created = service.create_appointment(checkup()).await.unwrap();

    let changes = UpdateAppointmentRequest {
        time: Some("14:30".to_string()),
        ..Default::default()
    };
    let moved = service.patch_appointment(&created.id, changes).await.unwrap().unwrap();

    assert_eq!(moved.record.time, "14:30");
    assert_eq!(moved.record.date, "2024-12-25");
    assert_eq!(moved.record.doctor_name, "Dr. Ada Byrne");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let state = TestConfig::default().memory_state();
    let created = AppointmentService::new(&state.database)
        .create_appointment(checkup())
        .await
        .unwrap();
    let item = format!("/{}", created.id);

    let (status, _) = send_json(appointment_routes(state.clone()), Method::DELETE, &item, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(appointment_routes(state), Method::GET, &item, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_appointments_from_relational_store() {
    let mock_server = MockServer::start().await;
    let record = serde_json::to_value(checkup()).unwrap();

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointment"))
        .and(query_param("order", "id.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockPostgrestResponses::row(1, record.clone()),
            MockPostgrestResponses::row(2, record)
        ])))
        .mount(&mock_server)
        .await;

    let state = TestConfig::relational(&mock_server.uri()).relational_state();
    let (status, body) = send_json(appointment_routes(state), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["appointments"][1]["id"], "2");
    assert_eq!(body["appointments"][1]["hospitalName"], "General Hospital");
}

#[tokio::test]
async fn test_store_outage_is_a_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointment"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is down"))
        .mount(&mock_server)
        .await;

    let state = TestConfig::relational(&mock_server.uri()).relational_state();
    let (status, body) = send_json(appointment_routes(state), Method::GET, "/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("database is down"));
}
