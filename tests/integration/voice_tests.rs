//! Voice endpoint integration tests
//!
//! Drives POST /api/voice/speak and /api/voice/transcribe against mocked
//! vendor APIs: default parameter forwarding, byte-exact relaying, filename
//! defaulting and error mapping.

use actix_web::{App, test};
use mentorra_gateway::ErrorBody;
use mentorra_gateway::server::routes;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[actix_web::test]
async fn speak_forwards_default_parameters() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    let audio = b"fake-mp3-audio-chunk-one-chunk-two".to_vec();

    // Defaults: stock voice, monolingual model, mp3 output format
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb/stream"))
        .and(query_param("output_format", "mp3_44100_128"))
        .and(header("xi-api-key", "el-test"))
        .and(body_string_contains("eleven_monolingual_v1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .expect(1)
        .mount(&elevenlabs)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/voice/speak")
        .set_json(json!({"text": "Welcome back, founder."}))
        .to_request();

    let response = test::call_service(&app, req).await;
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("audio/mpeg")
    );

    // Concatenation equality: relayed bytes match the vendor stream exactly
    let body = test::read_body(response).await;
    assert_eq!(body.as_ref(), audio.as_slice());
}

#[actix_web::test]
async fn speak_forwards_explicit_parameters() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/custom-voice/stream"))
        .and(query_param("output_format", "pcm_16000"))
        .and(body_string_contains("eleven_multilingual_v2"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pcm-bytes".to_vec()))
        .expect(1)
        .mount(&elevenlabs)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/voice/speak")
        .set_json(json!({
            "text": "Custom voice please",
            "voice_id": "custom-voice",
            "model_id": "eleven_multilingual_v2",
            "output_format": "pcm_16000"
        }))
        .to_request();

    let response = test::call_service(&app, req).await;
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("audio/pcm")
    );
}

#[actix_web::test]
async fn speak_rejects_empty_text_without_calling_vendor() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    // No mock mounted: any vendor call would 404 and the .expect(0) below
    // would flag it.
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb/stream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&elevenlabs)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/voice/speak")
        .set_json(json!({"text": "   "}))
        .to_request();

    let response = test::call_service(&app, req).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: ErrorBody = test::read_body_json(response).await;
    assert_eq!(body.code, "INVALID_INPUT");
}

#[actix_web::test]
async fn speak_maps_vendor_failure_to_502() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb/stream"))
        .respond_with(ResponseTemplate::new(500).set_body_string("synthesis failed"))
        .mount(&elevenlabs)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/voice/speak")
        .set_json(json!({"text": "hello"}))
        .to_request();

    let response = test::call_service(&app, req).await;
    assert_eq!(response.status().as_u16(), 502);

    let body: ErrorBody = test::read_body_json(response).await;
    assert_eq!(body.code, "UPSTREAM_ERROR");
    assert!(!body.detail.is_empty());
}

#[actix_web::test]
async fn transcribe_defaults_filename_and_relays_transcript() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    // Upload without a filename hint must be forwarded as audio.mp3
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_string_contains("filename=\"audio.mp3\""))
        .and(body_string_contains("whisper-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"text": "hello from the founder"})),
        )
        .expect(1)
        .mount(&openai)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let (content_type, body) = common::multipart_payload(None, b"fake-mp3-bytes");
    let req = test::TestRequest::post()
        .uri("/api/voice/transcribe")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, req).await;
    assert!(response.status().is_success());

    let result: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(result, json!({"text": "hello from the founder"}));
}

#[actix_web::test]
async fn transcribe_forwards_caller_filename() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains("filename=\"standup.wav\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "standup notes"})))
        .expect(1)
        .mount(&openai)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let (content_type, body) = common::multipart_payload(Some("standup.wav"), b"fake-wav-bytes");
    let req = test::TestRequest::post()
        .uri("/api/voice/transcribe")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, req).await;
    assert!(response.status().is_success());
}

#[actix_web::test]
async fn transcribe_rejects_missing_file() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    // Multipart body with no file field at all
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = common::MULTIPART_BOUNDARY
    );
    let req = test::TestRequest::post()
        .uri("/api/voice/transcribe")
        .insert_header((
            "content-type",
            format!(
                "multipart/form-data; boundary={}",
                common::MULTIPART_BOUNDARY
            ),
        ))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, req).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: ErrorBody = test::read_body_json(response).await;
    assert_eq!(error.code, "INVALID_INPUT");
    assert!(error.detail.contains("No audio file"));
}

#[actix_web::test]
async fn transcribe_maps_malformed_vendor_output_to_502() {
    let openai = MockServer::start().await;
    let elevenlabs = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("this is not json"),
        )
        .mount(&openai)
        .await;

    let state = common::test_state(&openai.uri(), &elevenlabs.uri());
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;

    let (content_type, body) = common::multipart_payload(Some("clip.mp3"), b"fake-mp3-bytes");
    let req = test::TestRequest::post()
        .uri("/api/voice/transcribe")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, req).await;
    assert_eq!(response.status().as_u16(), 502);

    let error: ErrorBody = test::read_body_json(response).await;
    assert_eq!(error.code, "MALFORMED_RESPONSE");
}
