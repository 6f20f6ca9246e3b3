use analyze_client::{AnalyzeClient, Error};
use dia_analyze_interface::{AnalyzeRequest, FileUpload, SubmitFailure};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn audio_request() -> AnalyzeRequest {
    AnalyzeRequest::new(FileUpload::new("talk.wav", "audio/wav", vec![0u8; 16]))
}

fn scored_request() -> AnalyzeRequest {
    audio_request().with_reference(FileUpload::new(
        "talk.rttm",
        "text/plain",
        b"SPEAKER talk 1 0.00 1.30 <NA> <NA> Speaker_0 <NA> <NA>\n".to_vec(),
    ))
}

async fn upload_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> AnalyzeClient {
    AnalyzeClient::builder().api_base(server.uri()).build()
}

#[tokio::test]
async fn success_body_is_parsed_and_normalized() {
    let server = upload_server(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "duration": 1.3,
        "language": "en",
        "timeline_data": [
            {"text": "hi", "speaker": "Speaker_0", "start": 0.0, "end": 0.5},
            {"text": "bye", "speaker": "Speaker_1", "start": 0.5, "end": 1.3}
        ]
    })))
    .await;

    let response = client_for(&server).analyze(audio_request()).await.unwrap();

    assert_eq!(response.duration, 1.3);
    assert_eq!(response.language.as_deref(), Some("en"));
    assert_eq!(response.der, None);
    assert_eq!(response.timeline_data.len(), 2);
}

#[tokio::test]
async fn form_always_carries_the_audio_part() {
    let server = upload_server(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .await;

    client_for(&server).analyze(audio_request()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"audio_file\""));
    assert!(body.contains("filename=\"talk.wav\""));
    assert!(!body.contains("name=\"rttm_file\""));
}

#[tokio::test]
async fn reference_part_is_present_only_when_supplied() {
    let server = upload_server(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .await;

    client_for(&server).analyze(scored_request()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"audio_file\""));
    assert!(body.contains("name=\"rttm_file\""));
    assert!(body.contains("filename=\"talk.rttm\""));
}

#[tokio::test]
async fn service_detail_is_surfaced_on_rejection() {
    let server = upload_server(
        ResponseTemplate::new(422)
            .set_body_json(serde_json::json!({"detail": "unsupported format"})),
    )
    .await;

    let err = client_for(&server)
        .analyze(audio_request())
        .await
        .unwrap_err();

    match err {
        Error::Service { status, detail } => {
            assert_eq!(status, 422);
            assert_eq!(detail.as_deref(), Some("unsupported format"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_rejection_body_yields_no_detail() {
    let server =
        upload_server(ResponseTemplate::new(500).set_body_string("internal server error")).await;

    let err = client_for(&server)
        .analyze(audio_request())
        .await
        .unwrap_err();

    match err {
        Error::Service { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, None);
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_failure() {
    let server = upload_server(ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = client_for(&server)
        .analyze(audio_request())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(matches!(
        err.into_failure(),
        SubmitFailure::Transport { .. }
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Bind-then-drop guarantees nothing is listening on the port.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = AnalyzeClient::builder().api_base(uri).build();
    let err = client.analyze(audio_request()).await.unwrap_err();

    assert!(matches!(
        err.into_failure(),
        SubmitFailure::Transport { .. }
    ));
}
