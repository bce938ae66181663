//! Integration tests for the FormCaptureClient using mockito for HTTP mocking.

use contact_desk::client::FORM_CONTENT_TYPE;
use contact_desk::{ContactForm, FormCaptureClient, FormCaptureError, FormPayload};
use mockito::{Matcher, Server};

fn sample_payload() -> FormPayload {
    let form = ContactForm::new(
        "Ana",
        "ana@x.com",
        "48999998888",
        "Quero um orçamento de cozinha",
    );
    FormPayload::from_form("contato", &form)
}

#[test]
fn test_submit_posts_urlencoded_form_to_root() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/")
        .match_header("content-type", FORM_CONTENT_TYPE)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("form-name".into(), "contato".into()),
            Matcher::UrlEncoded("name".into(), "Ana".into()),
            Matcher::UrlEncoded("email".into(), "ana@x.com".into()),
            Matcher::UrlEncoded("phone".into(), "48999998888".into()),
            Matcher::UrlEncoded("message".into(), "Quero um orçamento de cozinha".into()),
        ]))
        .with_status(200)
        .with_body("<html>ok</html>")
        .create();

    let client = FormCaptureClient::with_base_url(server.url());
    let result = client.submit(&sample_payload());

    mock.assert();
    assert!(result.is_ok());
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_submit_sends_empty_phone() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::UrlEncoded("phone".into(), "".into()))
        .with_status(200)
        .create();

    let form = ContactForm::new("Ana", "ana@x.com", "", "Quero um orçamento");
    let client = FormCaptureClient::with_base_url(server.url());
    client
        .submit(&FormPayload::from_form("contato", &form))
        .unwrap();

    mock.assert();
}

#[test]
fn test_submit_server_error_is_api_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let client = FormCaptureClient::with_base_url(server.url());
    let result = client.submit(&sample_payload());

    mock.assert();
    match result {
        Err(FormCaptureError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_submit_not_found_is_api_error() {
    let mut server = Server::new();

    let mock = server.mock("POST", "/").with_status(404).create();

    let client = FormCaptureClient::with_base_url(server.url());
    let result = client.submit(&sample_payload());

    mock.assert();
    assert!(matches!(
        result,
        Err(FormCaptureError::ApiError { status: 404, .. })
    ));
}

#[test]
fn test_submit_unreachable_endpoint() {
    let client = FormCaptureClient::with_base_url("http://127.0.0.1:9".to_string());
    let result = client.submit(&sample_payload());

    assert!(matches!(
        result,
        Err(FormCaptureError::HttpError(_)) | Err(FormCaptureError::Timeout)
    ));
    assert_eq!(client.metrics().http_errors_total(), 1);
}
