//! Integration tests for the reqwest transport.
//!
//! Each test serves a single canned HTTP response from a loopback socket and
//! inspects the raw request the transport sent.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use slackweb_application::{ApiTransport, CancellationToken, StarsApi, TransportError};
use slackweb_domain::{ApiMethod, Args, ListStarsRequest, StarListResponse};
use slackweb_infrastructure::{ClientConfig, ReqwestApiTransport};

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serves one response and returns the base URL plus the captured request.
async fn serve_once(
    status_line: &'static str,
    extra_headers: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{extra_headers}\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();
        request
    });

    (format!("http://{addr}/api"), handle)
}

/// Accepts one connection, reads the request and never answers.
async fn serve_silence() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let _request = read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    (format!("http://{addr}/api"), handle)
}

fn transport(base_url: &str, timeout_ms: u64) -> ReqwestApiTransport {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        token: Some("xoxp-test".to_string()),
        timeout_ms,
        ..ClientConfig::default()
    };
    ReqwestApiTransport::new(&config).expect("transport should build")
}

#[tokio::test]
async fn test_add_to_message_posts_form_body() {
    let (base_url, server) = serve_once("200 OK", "", r#"{"ok": true}"#).await;
    let stars = StarsApi::new(std::sync::Arc::new(transport(&base_url, 5_000)));

    stars
        .add_to_message("C1", "1700000000.000100", None)
        .await
        .expect("add should succeed");

    let request = server.await.expect("server task");
    let lowered = request.to_lowercase();
    assert!(
        request.starts_with("POST /api/stars.add HTTP/1.1"),
        "unexpected request line: {request:?}"
    );
    assert!(lowered.contains("content-type: application/x-www-form-urlencoded"));
    assert!(lowered.contains("authorization: bearer xoxp-test"));
    assert!(request.ends_with("channel=C1&timestamp=1700000000.000100"));
}

#[tokio::test]
async fn test_list_sends_query_and_decodes_cursor() {
    let body = r#"{
        "ok": true,
        "items": [
            {"type": "message", "channel": "C1", "message": {"ts": "1.0", "text": "hi"}},
            {"type": "file", "file": {"id": "F1", "name": "a.txt"}}
        ],
        "response_metadata": {"next_cursor": "xyz"}
    }"#;
    let (base_url, server) = serve_once("200 OK", "", body).await;
    let stars = StarsApi::new(std::sync::Arc::new(transport(&base_url, 5_000)));

    let response = stars
        .list(&ListStarsRequest::new().with_count(2).with_cursor("abc"), None)
        .await
        .expect("list should succeed");

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.next_cursor(), Some("xyz"));

    let request = server.await.expect("server task");
    assert!(
        request.starts_with("GET /api/stars.list?count=2&page=1&cursor=abc HTTP/1.1"),
        "unexpected request line: {request:?}"
    );
}

#[tokio::test]
async fn test_platform_error_is_surfaced() {
    let (base_url, server) =
        serve_once("200 OK", "", r#"{"ok": false, "error": "already_starred"}"#).await;
    let transport = transport(&base_url, 5_000);

    let result = transport
        .post(ApiMethod::StarsAdd, Args::new().with("file", "F1"), None)
        .await;

    assert_eq!(
        result,
        Err(TransportError::Platform {
            method: ApiMethod::StarsAdd,
            code: "already_starred".to_string(),
        })
    );
    server.await.expect("server task");
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let (base_url, server) =
        serve_once("429 Too Many Requests", "Retry-After: 30\r\n", "{}").await;
    let transport = transport(&base_url, 5_000);

    let result = transport
        .get::<StarListResponse>(ApiMethod::StarsList, ListStarsRequest::default().to_args(), None)
        .await;

    assert_eq!(
        result,
        Err(TransportError::RateLimited {
            retry_after_secs: Some(30)
        })
    );
    server.await.expect("server task");
}

#[tokio::test]
async fn test_server_error_status() {
    let (base_url, server) = serve_once("503 Service Unavailable", "", "down").await;
    let transport = transport(&base_url, 5_000);

    let result = transport
        .post(ApiMethod::StarsRemove, Args::new().with("channel", "C1"), None)
        .await;

    assert_eq!(
        result,
        Err(TransportError::Status {
            status: 503,
            body: "down".to_string(),
        })
    );
    server.await.expect("server task");
}

#[tokio::test]
async fn test_cancel_during_request() {
    let (base_url, server) = serve_silence().await;
    let transport = transport(&base_url, 5_000);
    let (token, receiver) = CancellationToken::new();

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        transport.post(ApiMethod::StarsAdd, Args::new().with("file", "F1"), Some(receiver)),
    )
    .await
    .expect("cancellation should end the call");

    assert_eq!(result, Err(TransportError::Cancelled));
    canceller.await.expect("canceller task");
    server.abort();
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let (base_url, server) = serve_silence().await;
    let transport = transport(&base_url, 100);

    let result = transport
        .post(ApiMethod::StarsAdd, Args::new().with("file", "F1"), None)
        .await;

    assert_eq!(result, Err(TransportError::Timeout { timeout_ms: 100 }));
    server.abort();
}
