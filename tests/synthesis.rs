//! Synthesis requests against a mock speech service

mod common;

use azure_tts::error_code::RemoteErrorCode;
use azure_tts::{ssml, AudioOutput, EndpointSet, Error, SpeechClientBuilder};
use common::{sample_request, silent_endpoint, MockServerFixture, TEST_KEY, TOKEN_PATH, VOICES_PATH};
use mockito::Matcher;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn success_returns_body_unchanged() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let audio: Vec<u8> = vec![0x49, 0x44, 0x33, 0x00, 0xff, 0xfe, 0x01];
    let synth = fixture.mock_synthesis(200, &audio).await;

    let client = fixture.builder().build().await.unwrap();
    let bytes = client
        .synthesize(&sample_request(), AudioOutput::Audio16khz32kbitrateMonoMp3)
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), audio.as_slice());
    synth.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn request_carries_required_headers_and_payload() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let request = sample_request();
    let expected_body = ssml::render(&request).unwrap();

    let synth = fixture
        .server
        .mock("POST", common::SYNTHESIS_PATH)
        .match_header("x-microsoft-outputformat", "riff-24khz-16bit-mono-pcm")
        .match_header("content-type", "application/ssml+xml")
        .match_header("authorization", "Bearer tok")
        .match_header("user-agent", "azuretts")
        .match_body(Matcher::Exact(expected_body))
        .with_status(200)
        .with_body("RIFF")
        .expect(1)
        .create_async()
        .await;

    let client = fixture.builder().build().await.unwrap();
    let bytes = client
        .synthesize(&request, AudioOutput::Riff24khz16bitMonoPcm)
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), b"RIFF");
    synth.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let mut fixture = MockServerFixture::new().await;
    let token = fixture
        .server
        .mock("POST", TOKEN_PATH)
        .match_header("user-agent", "narrator/2.0")
        .with_status(200)
        .with_body("tok")
        .create_async()
        .await;

    let client = fixture
        .builder()
        .user_agent("narrator/2.0")
        .build()
        .await
        .unwrap();

    token.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn non_success_statuses_map_through_status_table() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let client = fixture.builder().build().await.unwrap();

    let table = [
        (400, RemoteErrorCode::InvalidRequest),
        (401, RemoteErrorCode::Unauthorized),
        (403, RemoteErrorCode::Forbidden),
        (413, RemoteErrorCode::PayloadTooLarge),
        (415, RemoteErrorCode::UnsupportedMediaType),
        (429, RemoteErrorCode::TooManyRequests),
        (502, RemoteErrorCode::BadGateway),
        (500, RemoteErrorCode::Unexpected),
        (503, RemoteErrorCode::Unexpected),
    ];

    for (status, code) in table {
        let mock = fixture.mock_synthesis(status, "ignored").await;
        let err = client
            .synthesize(&sample_request(), AudioOutput::Audio16khz32kbitrateMonoMp3)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(status as u16), "status {status}");
        assert_eq!(err.remote_code(), Some(code), "status {status}");
        assert!(
            err.to_string().starts_with(&format!("{status} - ")),
            "unexpected message: {err}"
        );
        mock.remove_async().await;
    }

    client.shutdown();
}

#[tokio::test]
async fn unauthorized_does_not_trigger_refresh() {
    let mut fixture = MockServerFixture::new().await;
    let token = fixture
        .server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_body("tok")
        .expect(1)
        .create_async()
        .await;
    let _synth = fixture.mock_synthesis(401, "").await;

    let client = fixture.builder().build().await.unwrap();
    let err = client
        .synthesize(&sample_request(), AudioOutput::Audio16khz32kbitrateMonoMp3)
        .await
        .unwrap_err();

    assert_eq!(err.remote_code(), Some(RemoteErrorCode::Unauthorized));
    token.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let first = fixture
        .server
        .mock("POST", common::SYNTHESIS_PATH)
        .match_body(Matcher::Regex("first line".to_string()))
        .with_status(200)
        .with_body("audio-one")
        .create_async()
        .await;
    let second = fixture
        .server
        .mock("POST", common::SYNTHESIS_PATH)
        .match_body(Matcher::Regex("second line".to_string()))
        .with_status(200)
        .with_body("audio-two")
        .create_async()
        .await;

    let client = fixture.builder().build().await.unwrap();
    let a = sample_request().with_text("first line");
    let b = sample_request().with_text("second line");

    let (one, two) = futures::future::join(
        client.synthesize(&a, AudioOutput::Audio16khz32kbitrateMonoMp3),
        client.synthesize(&b, AudioOutput::Audio16khz32kbitrateMonoMp3),
    )
    .await;

    assert_eq!(one.unwrap().as_ref(), b"audio-one");
    assert_eq!(two.unwrap().as_ref(), b"audio-two");
    first.assert_async().await;
    second.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn cancellation_aborts_in_flight_call() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let (silent_url, _listener) = silent_endpoint().await;

    let endpoints = EndpointSet::custom(
        &format!("{}{}", fixture.base_url, TOKEN_PATH),
        &silent_url,
        &format!("{}{}", fixture.base_url, VOICES_PATH),
    )
    .unwrap();
    let client = SpeechClientBuilder::new()
        .subscription_key(TEST_KEY)
        .endpoints(endpoints)
        .build()
        .await
        .unwrap();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = client
        .synthesize_with_cancellation(
            &sample_request(),
            AudioOutput::Audio16khz32kbitrateMonoMp3,
            &cancel,
        )
        .await
        .unwrap_err();

    assert!(err.is_cancelled(), "unexpected error: {err}");
    assert_eq!(client.token_manager().current().as_str(), "tok");
    client.shutdown();
}

#[tokio::test]
async fn unresponsive_service_times_out() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let (silent_url, _listener) = silent_endpoint().await;

    let endpoints = EndpointSet::custom(
        &format!("{}{}", fixture.base_url, TOKEN_PATH),
        &silent_url,
        &format!("{}{}", fixture.base_url, VOICES_PATH),
    )
    .unwrap();
    let client = SpeechClientBuilder::new()
        .subscription_key(TEST_KEY)
        .endpoints(endpoints)
        .synthesize_timeout(Duration::from_millis(150))
        .build()
        .await
        .unwrap();

    let err = client
        .synthesize(&sample_request(), AudioOutput::Audio16khz32kbitrateMonoMp3)
        .await
        .unwrap_err();

    match err {
        Error::Timeout { operation, after } => {
            assert_eq!(operation, "synthesize");
            assert_eq!(after, Duration::from_millis(150));
        }
        other => panic!("expected timeout, got {other}"),
    }
    client.shutdown();
}

#[tokio::test]
async fn list_voices_decodes_catalogue() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let voices = fixture
        .server
        .mock("GET", VOICES_PATH)
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"Name": "Microsoft Server Speech Text to Speech Voice (en-US, AvaMultilingualNeural)",
                 "ShortName": "en-US-AvaMultilingualNeural", "Gender": "Female", "Locale": "en-US",
                 "LocalName": "Ava Multilingual", "SampleRateHertz": "24000", "VoiceType": "Neural", "Status": "GA"},
                {"Name": "Microsoft Server Speech Text to Speech Voice (de-CH, JanNeural)",
                 "ShortName": "de-CH-JanNeural", "Gender": "Male", "Locale": "de-CH"}
            ]"#,
        )
        .create_async()
        .await;

    let client = fixture.builder().build().await.unwrap();
    let list = client.list_voices().await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].short_name, "en-US-AvaMultilingualNeural");
    assert_eq!(list[0].sample_rate_hertz.as_deref(), Some("24000"));
    assert_eq!(list[1].gender(), Some(azure_tts::Gender::Male));
    assert_eq!(list[1].locale, azure_tts::Locale::DeCh);
    voices.assert_async().await;
    client.shutdown();
}

#[tokio::test]
async fn list_voices_maps_status() {
    let mut fixture = MockServerFixture::new().await;
    let _token = fixture.mock_token(200, "tok").await;
    let _voices = fixture
        .server
        .mock("GET", VOICES_PATH)
        .with_status(403)
        .create_async()
        .await;

    let client = fixture.builder().build().await.unwrap();
    let err = client.list_voices().await.unwrap_err();

    assert_eq!(err.remote_code(), Some(RemoteErrorCode::Forbidden));
    client.shutdown();
}
