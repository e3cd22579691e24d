//! Mock HTTP server setup for integration tests
#![allow(dead_code)]

use azure_tts::{EndpointSet, Gender, Locale, SpeechClientBuilder, VoiceRequest};
use mockito::{Mock, Server, ServerGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
pub const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";
pub const VOICES_PATH: &str = "/cognitiveservices/voices/list";
pub const TEST_KEY: &str = "test-subscription-key";

/// Test fixture that manages a mock speech service
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Endpoints pointing every route at the mock server
    pub fn endpoints(&self) -> EndpointSet {
        EndpointSet::custom(
            &format!("{}{}", self.base_url, TOKEN_PATH),
            &format!("{}{}", self.base_url, SYNTHESIS_PATH),
            &format!("{}{}", self.base_url, VOICES_PATH),
        )
        .unwrap()
    }

    /// Builder wired to the mock server with the test subscription key
    pub fn builder(&self) -> SpeechClientBuilder {
        SpeechClientBuilder::new()
            .subscription_key(TEST_KEY)
            .endpoints(self.endpoints())
    }

    /// Token endpoint answering `status` with `body`; only matches the test key
    pub async fn mock_token(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", TOKEN_PATH)
            .match_header("ocp-apim-subscription-key", TEST_KEY)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    /// Token endpoint issuing `tok-0`, `tok-1`, ... and counting hits
    pub async fn mock_counting_token(&mut self) -> (Mock, Arc<AtomicUsize>) {
        let issued = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&issued);
        let mock = self
            .server
            .mock("POST", TOKEN_PATH)
            .match_header("ocp-apim-subscription-key", TEST_KEY)
            .with_status(200)
            .with_body_from_request(move |_| {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                format!("tok-{n}").into_bytes()
            })
            .create_async()
            .await;
        (mock, issued)
    }

    /// Synthesis endpoint answering `status` with `body`
    pub async fn mock_synthesis(&mut self, status: usize, body: impl AsRef<[u8]>) -> Mock {
        self.server
            .mock("POST", SYNTHESIS_PATH)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }

    /// Synthesis endpoint that must never be hit
    pub async fn mock_synthesis_never(&mut self) -> Mock {
        self.server
            .mock("POST", SYNTHESIS_PATH)
            .with_status(200)
            .expect(0)
            .create_async()
            .await
    }
}

/// Request shared by most tests
pub fn sample_request() -> VoiceRequest {
    VoiceRequest::new(
        "64 BASIC BYTES FREE. READY.",
        "en-US-AvaMultilingualNeural",
        Locale::EnUs,
        Gender::Female,
    )
}

/// A listener that accepts connections and never answers
pub async fn silent_endpoint() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let task = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (format!("http://{}{}", addr, SYNTHESIS_PATH), task)
}

/// Poll `condition` until it holds or `within` elapses
pub async fn eventually(within: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + within;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}

/// Token endpoint that issues `token` once, then drops every later connection unanswered
pub async fn one_shot_token_endpoint(token: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                token.len(),
                token
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });
    format!("http://{}{}", addr, TOKEN_PATH)
}
