use async_trait::async_trait;
use formwright_engine::SubmissionPayload;
use formwright_submit::{
    SubmissionOutcome, SubmitError, SubmitResult, SubmitTransport, Submitter, SubmitterConfig,
    WebhookTransport,
};
use formwright_types::{FieldId, FieldValue};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> SubmissionPayload {
    let mut values = BTreeMap::new();
    values.insert(FieldId::from("email"), FieldValue::text("ada@example.com"));
    values.insert(FieldId::from("qty"), FieldValue::Number(7.0));
    values.insert(FieldId::from("agree"), FieldValue::Bool(true));
    SubmissionPayload::new(values)
}

fn expected_body() -> serde_json::Value {
    serde_json::json!({
        "agree": true,
        "email": "ada@example.com",
        "qty": 7.0
    })
}

/// Transport that records calls instead of sending them.
#[derive(Clone, Default)]
struct RecordingTransport {
    calls: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

#[async_trait]
impl SubmitTransport for RecordingTransport {
    async fn post_json(&self, endpoint: &str, body: &serde_json::Value) -> SubmitResult<u16> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body.clone()));
        Ok(204)
    }
}

/// Transport whose every call fails to encode.
struct BrokenEncoder;

#[async_trait]
impl SubmitTransport for BrokenEncoder {
    async fn post_json(&self, _endpoint: &str, _body: &serde_json::Value) -> SubmitResult<u16> {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        Err(SubmitError::from(err))
    }
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn config_defaults_to_preview() {
    let cfg = SubmitterConfig::default();
    assert_eq!(cfg.endpoint, None);
    assert_eq!(cfg.timeout(), Duration::from_secs(30));
}

#[test]
fn config_partial_json_fills_defaults() {
    let cfg: SubmitterConfig =
        serde_json::from_str(r#"{"endpoint": "https://hooks.example.com/f"}"#).unwrap();
    assert_eq!(cfg.endpoint.as_deref(), Some("https://hooks.example.com/f"));
    assert_eq!(cfg.timeout_secs, 30);
}

// ── Preview ─────────────────────────────────────────────────────

#[tokio::test]
async fn without_endpoint_previews_and_sends_nothing() {
    let transport = RecordingTransport::default();
    let submitter = Submitter::with_transport(None, transport.clone());

    let outcome = submitter.submit(&payload()).await;
    let SubmissionOutcome::Preview(json) = outcome else {
        panic!("expected a preview, got {outcome:?}");
    };
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, expected_body());
    assert!(json.contains("\n  \"email\""));
    assert!(transport.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_endpoint_counts_as_none() {
    let submitter = Submitter::with_transport(Some("  ".into()), RecordingTransport::default());
    assert_eq!(submitter.endpoint(), None);
    assert!(matches!(
        submitter.submit(&payload()).await,
        SubmissionOutcome::Preview(_)
    ));
}

#[tokio::test]
async fn with_endpoint_posts_once_through_transport() {
    let transport = RecordingTransport::default();
    let submitter =
        Submitter::with_transport(Some("https://hooks.example.com/f".into()), transport.clone());

    let outcome = submitter.submit(&payload()).await;
    assert_eq!(outcome, SubmissionOutcome::Posted { status: 204 });

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://hooks.example.com/f");
    assert_eq!(calls[0].1, expected_body());
}

#[tokio::test]
async fn encoding_failure_is_failed_outcome() {
    let submitter = Submitter::with_transport(Some("https://hooks.example.com/f".into()), BrokenEncoder);
    match submitter.submit(&payload()).await {
        SubmissionOutcome::Failed(message) => {
            assert!(message.starts_with("Submission failed: serialization error"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn payload_encodes_to_json_object() {
    assert_eq!(payload().to_json().unwrap(), expected_body());
}

// ── Webhook transport ───────────────────────────────────────────

#[tokio::test]
async fn webhook_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = SubmitterConfig::with_endpoint(format!("{}/hook", server.uri()));
    let submitter = Submitter::from_config(&config).unwrap();

    let outcome = submitter.submit(&payload()).await;
    assert_eq!(outcome, SubmissionOutcome::Posted { status: 200 });
}

#[tokio::test]
async fn webhook_non_success_is_failed_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SubmitterConfig::with_endpoint(format!("{}/hook", server.uri()));
    let submitter = Submitter::from_config(&config).unwrap();

    let outcome = submitter.submit(&payload()).await;
    assert!(!outcome.is_success());
    match outcome {
        SubmissionOutcome::Failed(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("boom"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn webhook_rejection_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad field"))
        .mount(&server)
        .await;

    let transport = WebhookTransport::new(Duration::from_secs(5)).unwrap();
    let err = transport
        .post_json(&server.uri(), &expected_body())
        .await
        .unwrap_err();
    match err {
        SubmitError::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body, "bad field");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let transport = WebhookTransport::new(Duration::from_secs(2)).unwrap();
    let err = transport
        .post_json("http://127.0.0.1:9/hook", &expected_body())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
}

#[tokio::test]
async fn empty_payload_posts_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = Submitter::from_config(&SubmitterConfig::with_endpoint(server.uri())).unwrap();
    let outcome = submitter.submit(&SubmissionPayload::default()).await;
    assert_eq!(outcome, SubmissionOutcome::Posted { status: 201 });
}
