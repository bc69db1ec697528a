use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use voxbridge_handler::{AppState, Config, router};
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUDIO: &[u8] = &[0x49, 0x44, 0x33, 0x03, 0x00, 0x00, 0xfe, 0xed];

fn app(config: Config) -> Router {
    router(AppState::new(&config))
}

fn openai_config(server: &MockServer) -> Config {
    Config {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: Some(server.uri()),
        ..Default::default()
    }
}

fn azure_config(server: &MockServer) -> Config {
    Config {
        azure_speech_key: Some("sub-key".into()),
        azure_speech_region: Some("westeurope".into()),
        azure_token_url: Some(format!("{}/sts/v1.0/issueToken", server.uri())),
        azure_tts_url: Some(format!("{}/cognitiveservices/v1", server.uri())),
        ..Default::default()
    }
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, bytes)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, headers, bytes) = send(app, "POST", uri, &body.to_string()).await;
    assert_cors(&headers);
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type, Authorization");
}

async fn mount_openai_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
        .mount(server)
        .await;
}

async fn mount_azure_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sts/v1.0/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("token-abc"))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
        .mount(server)
        .await;
}

// ==================== Preamble ====================

#[tokio::test]
async fn options_is_empty_200_with_cors() {
    let app = app(Config::default());
    for uri in ["/api/cedar-tts", "/api/azure-tts"] {
        let (status, headers, body) = send(&app, "OPTIONS", uri, "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_cors(&headers);
    }
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let app = app(Config::default());
    for uri in ["/api/cedar-tts", "/api/azure-tts"] {
        let (status, headers, body) = send(&app, "GET", uri, "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(&headers);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn missing_text_echoes_body() {
    let app = app(Config::default());
    let received = json!({"message": {"content": ""}, "call": {"id": "call-1"}, "text": ""});

    for uri in ["/api/cedar-tts", "/api/azure-tts"] {
        let (status, body) = post_json(&app, uri, received.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing text", "received": received}));
    }
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let app = app(Config::default());
    let (status, headers, body) = send(&app, "POST", "/api/cedar-tts", "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Invalid JSON body");
    assert!(body["details"].is_string());
}

// ==================== OpenAI ====================

#[tokio::test]
async fn cedar_text_sources_and_precedence() {
    let server = MockServer::start().await;
    for expected in ["from content", "from message text", "from top level"] {
        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .and(body_json(json!({
                "model": "tts-1-hd",
                "input": expected,
                "voice": "cedar",
                "response_format": "mp3",
                "speed": 1.0,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
            .expect(2)
            .mount(&server)
            .await;
    }
    let app = app(openai_config(&server));

    let cases = [
        (json!({"message": {"content": "from content"}}), "from content"),
        (
            json!({"message": {"content": "from content", "text": "from message text"}, "text": "from top level"}),
            "from content",
        ),
        (json!({"message": {"text": "from message text"}}), "from message text"),
        (
            json!({"message": {"text": "from message text"}, "text": "from top level"}),
            "from message text",
        ),
        (json!({"text": "from top level"}), "from top level"),
        (json!({"message": {}, "text": "from top level"}), "from top level"),
    ];

    for (body, expected) in cases {
        let (status, resp) = post_json(&app, "/api/cedar-tts", body).await;
        assert_eq!(status, StatusCode::OK, "{expected}");
        assert_eq!(
            resp["message"],
            format!("Cedar audio generated successfully ({} characters)", expected.chars().count())
        );
    }
}

#[tokio::test]
async fn cedar_success_envelope() {
    let server = MockServer::start().await;
    mount_openai_success(&server).await;
    let app = app(openai_config(&server));

    let (status, body) = post_json(&app, "/api/cedar-tts", json!({"text": "Ça marche"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["audioUrl"],
        format!("data:audio/mp3;base64,{}", STANDARD.encode(AUDIO))
    );
    assert_eq!(body["message"], "Cedar audio generated successfully (9 characters)");
    assert!(body.get("voice").is_none());
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn cedar_repeated_requests_are_identical_but_for_timestamp() {
    let server = MockServer::start().await;
    mount_openai_success(&server).await;
    let app = app(openai_config(&server));

    let (_, mut first) = post_json(&app, "/api/cedar-tts", json!({"text": "encore"})).await;
    let (_, mut second) = post_json(&app, "/api/cedar-tts", json!({"text": "encore"})).await;

    first.as_object_mut().unwrap().remove("timestamp");
    second.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first, second);
}

#[tokio::test]
async fn cedar_accepts_bodies_over_two_megabytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(openai_config(&server));

    let text = "a".repeat(3 * 1024 * 1024);
    let (status, body) = post_json(&app, "/api/cedar-tts", json!({ "text": text })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        format!("Cedar audio generated successfully ({} characters)", 3 * 1024 * 1024)
    );
}

#[tokio::test]
async fn cedar_upstream_error_relayed_verbatim() {
    let server = MockServer::start().await;
    // The provider body reaches the caller unfiltered, including anything
    // sensitive it may contain.
    let upstream = r#"{"error":{"message":"Incorrect API key provided: sk-test","code":"invalid_api_key"}}"#;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(401).set_body_string(upstream))
        .mount(&server)
        .await;
    let app = app(openai_config(&server));

    let (status, body) = post_json(&app, "/api/cedar-tts", json!({"text": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenAI TTS error");
    assert_eq!(body["details"], upstream);
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn cedar_missing_key_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(Config {
        openai_base_url: Some(server.uri()),
        ..Default::default()
    });

    let (status, body) = post_json(&app, "/api/cedar-tts", json!({"text": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenAI configuration missing");
    assert_eq!(body["message"], "OPENAI_API_KEY must be set");
}

#[tokio::test]
async fn cedar_transport_failure_is_internal_error() {
    // Nothing listens on port 1.
    let config = Config {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: Some("http://127.0.0.1:1".into()),
        ..Default::default()
    };

    let (status, body) =
        post_json(&app(config.clone()), "/api/cedar-tts", json!({"text": "hi"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["message"].as_str().unwrap().starts_with("http error"));
    assert!(body["timestamp"].is_string());
    assert!(body.get("stack").is_none());

    let dev = Config {
        expose_stack: true,
        ..config
    };
    let (_, body) = post_json(&app(dev), "/api/cedar-tts", json!({"text": "hi"})).await;
    assert!(body["stack"].as_str().unwrap().contains("caused by"));
}

// ==================== Azure ====================

#[tokio::test]
async fn azure_success_envelope() {
    let server = MockServer::start().await;
    mount_azure_success(&server).await;
    let app = app(azure_config(&server));

    let (status, body) = post_json(
        &app,
        "/api/azure-tts",
        json!({"message": {"content": "Bonjour"}, "voice": "vivienne"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["voice"], "fr-FR-VivienneMultilingualNeural");
    assert_eq!(
        body["audioUrl"],
        format!("data:audio/mp3;base64,{}", STANDARD.encode(AUDIO))
    );
    assert_eq!(body["message"], "Azure audio generated successfully (7 characters)");
}

#[tokio::test]
async fn azure_unknown_voice_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sts/v1.0/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("token-abc"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .and(body_string_contains("name='fr-FR-DeniseNeural'"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
        .expect(3)
        .mount(&server)
        .await;
    let app = app(azure_config(&server));

    for body in [
        json!({"text": "Salut", "voice": "cedar"}),
        json!({"text": "Salut"}),
        json!({"text": "Salut", "voice": 7}),
    ] {
        let (status, resp) = post_json(&app, "/api/azure-tts", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp["voice"], "fr-FR-DeniseNeural");
    }
}

#[tokio::test]
async fn azure_escapes_text_in_markup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sts/v1.0/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("token-abc"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .and(body_string_contains(">Tom &amp; Jerry &lt;3</voice>"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(AUDIO.to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(azure_config(&server));

    let (status, _) = post_json(&app, "/api/azure-tts", json!({"text": "Tom & Jerry <3"})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn azure_missing_config_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let without_region = Config {
        azure_speech_region: None,
        ..azure_config(&server)
    };
    let without_key = Config {
        azure_speech_key: None,
        ..azure_config(&server)
    };

    for config in [without_region, without_key] {
        let (status, body) = post_json(&app(config), "/api/azure-tts", json!({"text": "hi"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Azure Speech configuration missing");
        assert_eq!(
            body["message"],
            "AZURE_SPEECH_KEY and AZURE_SPEECH_REGION must be set"
        );
    }
}

#[tokio::test]
async fn azure_token_error_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sts/v1.0/issueToken"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(azure_config(&server));

    let (status, body) = post_json(&app, "/api/azure-tts", json!({"text": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Azure token error");
    assert_eq!(body["details"], "Access denied");
}

#[tokio::test]
async fn azure_synthesis_error_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sts/v1.0/issueToken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("token-abc"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&server)
        .await;
    let app = app(azure_config(&server));

    let (status, body) = post_json(&app, "/api/azure-tts", json!({"text": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Azure TTS error", "details": "Too many requests", "status": 429})
    );
}
