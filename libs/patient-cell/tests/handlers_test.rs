// libs/patient-cell/tests/handlers_test.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use patient_cell::create_patient_router;
use shared_database::Fixture;
use shared_utils::test_utils::TestFixtures;

const BOUNDARY: &str = "adif-test-boundary";

fn multipart_body(field: &str, filename: &str, contents: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n{contents}\r\n--{b}--\r\n",
        b = BOUNDARY,
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post_upload(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

fn patient_info() -> Value {
    json!({
        "patient": { "name": "Jane Doe", "age": 42 },
        "diagnoses": ["Hypertension"],
        "status": "pending"
    })
}

#[tokio::test]
async fn test_get_patients_returns_fixture_verbatim() {
    let fixtures = TestFixtures::new();
    let patients = json!({ "patients": [{ "id": "P001", "name": "John" }], "total": 1 });
    fixtures.write(Fixture::Patients, &patients);

    let (status, body) = get_json(create_patient_router(fixtures.to_arc()), "/patients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, patients);
}

#[tokio::test]
async fn test_get_patients_missing_fixture() {
    let fixtures = TestFixtures::new();

    let (status, body) = get_json(create_patient_router(fixtures.to_arc()), "/patients").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Patients data not found", "patients": [] }));
}

#[tokio::test]
async fn test_get_patient_info() {
    let fixtures = TestFixtures::new();
    fixtures.write(Fixture::PatientInfo, &patient_info());

    let (status, body) = get_json(create_patient_router(fixtures.to_arc()), "/patient-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, patient_info());

    let empty = TestFixtures::new();
    let (status, body) = get_json(create_patient_router(empty.to_arc()), "/patient-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Patient info not found", "patient": {} }));
}

#[tokio::test]
async fn test_process_patient_file_merges_processing_fields() {
    let fixtures = TestFixtures::new();
    fixtures.write(Fixture::PatientInfo, &patient_info());

    let (status, body) = post_upload(
        create_patient_router(fixtures.to_arc()),
        "/patient-info",
        multipart_body("file", "report.pdf", "%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patient"]["name"], "Jane Doe");
    assert_eq!(body["processed_file"], "report.pdf");
    assert_eq!(body["status"], "success");
    let processing_time = body["processing_time"].as_u64().unwrap();
    assert!((100..=500).contains(&processing_time));
}

#[tokio::test]
async fn test_process_patient_file_without_template() {
    let fixtures = TestFixtures::new();

    let (status, body) = post_upload(
        create_patient_router(fixtures.to_arc()),
        "/patient-info",
        multipart_body("file", "scan.png", "bytes"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "error": "Patient info template not found",
            "processed_file": "scan.png",
            "status": "error"
        })
    );
}

#[tokio::test]
async fn test_upload_without_file_part_is_rejected() {
    let fixtures = TestFixtures::new();
    fixtures.write(Fixture::PatientInfo, &patient_info());

    let (status, body) = post_upload(
        create_patient_router(fixtures.to_arc()),
        "/patient-info",
        multipart_body("notes", "notes.txt", "hello"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn test_upload_returns_healthcare_data() {
    let fixtures = TestFixtures::new();
    let healthcare = json!({
        "filename": "sample.csv",
        "processing_ms": 230,
        "features": [{ "id": "f1", "name": "Glucose", "confidence": 0.93, "vector": [0.1, 0.2] }]
    });
    fixtures.write(Fixture::HealthcareData, &healthcare);

    let (status, body) = post_upload(
        create_patient_router(fixtures.to_arc()),
        "/upload",
        multipart_body("file", "labs.csv", "a,b\n1,2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, healthcare);
}

#[tokio::test]
async fn test_upload_without_healthcare_data_echoes_filename() {
    let fixtures = TestFixtures::new();

    let (status, body) = post_upload(
        create_patient_router(fixtures.to_arc()),
        "/upload",
        multipart_body("file", "labs.csv", "a,b"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Healthcare data not found");
    assert_eq!(body["filename"], "labs.csv");
    assert_eq!(body["status"], "error");
}
