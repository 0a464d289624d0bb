// libs/appointment-cell/tests/handlers_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use appointment_cell::{appointment_routes, AppointmentBookingService};
use shared_database::Fixture;
use shared_utils::test_utils::TestFixtures;

async fn post_booking(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/book-appointment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn booking_request() -> Value {
    json!({
        "doctorId": 3,
        "doctorName": "Dr. Heart 3",
        "patientName": "Jane Doe",
        "patientPhone": "555-0101",
        "appointmentDate": "2026-11-02",
        "appointmentTime": "10:30",
        "notes": "Follow-up"
    })
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[tokio::test]
async fn test_first_booking_creates_log() {
    let fixtures = TestFixtures::new();

    let (status, body) = post_booking(appointment_routes(fixtures.to_arc()), booking_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Appointment booked successfully");
    assert_eq!(body["appointment_id"], "APT0001");
    assert_eq!(body["appointment"]["id"], "APT0001");
    assert_eq!(body["appointment"]["status"], "confirmed");
    assert_eq!(body["appointment"]["patientName"], "Jane Doe");

    let created_at = body["appointment"]["created_at"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S.000Z").is_ok());

    let log = fixtures.read(Fixture::Appointments);
    assert_eq!(log.as_array().unwrap().len(), 1);
    assert_eq!(log[0], body["appointment"]);
}

#[tokio::test]
async fn test_stored_appointment_keeps_field_order() {
    let fixtures = TestFixtures::new();

    post_booking(appointment_routes(fixtures.to_arc()), booking_request()).await;

    let log = fixtures.read(Fixture::Appointments);
    let keys: Vec<&str> = log[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "doctorId",
            "doctorName",
            "patientName",
            "patientPhone",
            "appointmentDate",
            "appointmentTime",
            "notes",
            "status",
            "created_at",
        ]
    );
}

#[tokio::test]
async fn test_booking_appends_after_existing_entries() {
    let fixtures = TestFixtures::new().with_appointments(7);

    let (status, body) = post_booking(appointment_routes(fixtures.to_arc()), booking_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointment_id"], "APT0008");

    let log = fixtures.read(Fixture::Appointments);
    let entries = log.as_array().unwrap();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["id"], "APT0001");
    assert_eq!(entries[7]["id"], "APT0008");
}

#[tokio::test]
async fn test_status_cannot_be_overridden_by_caller() {
    let fixtures = TestFixtures::new();
    let mut request = booking_request();
    request["status"] = json!("cancelled");

    let (_, body) = post_booking(appointment_routes(fixtures.to_arc()), request).await;

    assert_eq!(body["appointment"]["status"], "confirmed");
}

#[tokio::test]
async fn test_corrupt_log_reports_error_with_200() {
    let fixtures = TestFixtures::new();
    fixtures.write_raw(Fixture::Appointments, "[{ \"id\": ");

    let (status, body) = post_booking(appointment_routes(fixtures.to_arc()), booking_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to book appointment");
    assert!(body["error"].as_str().unwrap().contains("doctors-appointments.json"));
}

#[tokio::test]
async fn test_non_array_log_reports_error() {
    let fixtures = TestFixtures::new();
    fixtures.write(Fixture::Appointments, &json!({ "appointments": [] }));

    let (status, body) = post_booking(appointment_routes(fixtures.to_arc()), booking_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "appointments log is not a JSON array");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let fixtures = TestFixtures::new();

    let request = Request::builder()
        .method("POST")
        .uri("/book-appointment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2, 3]"))
        .unwrap();
    let response = appointment_routes(fixtures.to_arc()).oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
    assert!(!fixtures.path().join(Fixture::Appointments.file_name()).exists());
}

#[tokio::test]
async fn test_concurrent_bookings_get_distinct_ids() {
    let fixtures = TestFixtures::new().with_appointments(2);
    let service = Arc::new(AppointmentBookingService::new(&fixtures.to_app_config()));

    let mut tasks = Vec::new();
    for n in 0..10 {
        let service = Arc::clone(&service);
        tasks.push(tokio::spawn(async move {
            service
                .book_appointment(as_object(json!({ "patientName": format!("Patient {}", n) })))
                .await
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        let confirmation = task.await.unwrap();
        assert_matches!(confirmation, Ok(_));
        ids.push(confirmation.unwrap().appointment_id);
    }
    ids.sort();

    let expected: Vec<String> = (3..=12).map(|n| format!("APT{:04}", n)).collect();
    assert_eq!(ids, expected);
    assert_eq!(fixtures.read(Fixture::Appointments).as_array().unwrap().len(), 12);
}
