use crate::backend::{BackendError, UploadKind};
use crate::config::DashboardConfig;
use crate::errors::ServerError;
use crate::router::{handle, upload_rejection};
use crate::state::AppState;
use crate::tests::utils::{body_string, test_state, FakeBackend};
use astra::{Body, Request};
use http::Method;
use std::sync::Arc;

const BOUNDARY: &str = "----dashboard-test";

fn multipart_upload(path: &str, csv: &str) -> Request {
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"rides.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{BOUNDARY}--\r\n"
    );
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[test]
fn upload_is_forwarded_with_its_content_type() {
    let (state, fake) = test_state();
    fake.set_upload(Ok("Arquivo CSV carregado e armazenado com sucesso".to_string()));

    let resp = handle(multipart_upload("/upload_csv", "id,status\n1,FINALIZADA"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("upload-ok"));
    assert!(body.contains("Arquivo CSV carregado e armazenado com sucesso"));

    let uploads = fake.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, UploadKind::Csv);
    assert!(uploads[0].1.contains(BOUNDARY));
    assert!(uploads[0].2 > 0);
}

#[test]
fn legacy_upload_paths_route_to_their_endpoint() {
    let (state, fake) = test_state();
    fake.set_upload(Ok("ok".to_string()));

    for (path, kind) in [
        ("/upload", UploadKind::LegacyCsv),
        ("/upload_favelas", UploadKind::Favelas),
        ("/upload_censo", UploadKind::Censo),
    ] {
        handle(multipart_upload(path, "{}"), &state).unwrap();
        assert_eq!(fake.uploads.lock().unwrap().last().unwrap().0, kind);
    }
}

#[test]
fn backend_error_is_shown_inline() {
    let (state, fake) = test_state();
    fake.set_upload(Err(BackendError::Api(
        "Tipo de arquivo não suportado. Envie um CSV".to_string(),
    )));

    let body = body_string(handle(multipart_upload("/upload_csv", "x"), &state).unwrap());
    assert!(body.contains("upload-error"));
    assert!(body.contains("Tipo de arquivo não suportado. Envie um CSV"));
}

#[test]
fn non_multipart_post_is_rejected_without_forwarding() {
    let (state, fake) = test_state();

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload_csv")
        .body(Body::from("file=x"))
        .unwrap();

    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains("Nenhum arquivo enviado"));
    assert!(fake.uploads.lock().unwrap().is_empty());
}

#[test]
fn oversized_upload_is_rejected_without_forwarding() {
    let fake = Arc::new(FakeBackend::default());
    let config = DashboardConfig {
        max_upload_bytes: 64,
        ..DashboardConfig::default()
    };
    let state = AppState::new(config, Box::new(fake.clone()));

    let big = "x".repeat(1024);
    let body = body_string(handle(multipart_upload("/upload_csv", &big), &state).unwrap());
    assert!(body.contains("upload-error"));
    assert!(body.contains("Arquivo excede o tamanho máximo permitido"));
    assert!(fake.uploads.lock().unwrap().is_empty());
}

#[test]
fn read_failures_and_size_limit_are_reported_differently() {
    let too_large = upload_rejection(&ServerError::PayloadTooLarge(64));
    let unreadable = upload_rejection(&ServerError::BadRequest("connection reset".into()));

    assert_eq!(too_large, "Arquivo excede o tamanho máximo permitido");
    assert_ne!(unreadable, too_large);
    assert!(unreadable.contains("Falha ao receber o arquivo"));
}
