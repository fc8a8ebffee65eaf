//! End-to-end fetches against a one-shot local HTTP server.

use bistro_cms::{CmsError, ContentClient, ContentSource, load_menu_items};
use bistro_config::CmsConfig;
use bistro_fallback::{MENU_ITEMS, menu_items_at, testimonials_at};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answer exactly one request with `status` and `body`; resolves to the
/// raw request head that was received.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&head).into_owned()
    });
    (format!("http://{addr}"), handle)
}

fn client(url: &str, token: &str) -> ContentClient {
    ContentClient::from_config(&CmsConfig {
        url: url.to_string(),
        api_token: token.to_string(),
        timeout_secs: 5,
        page_size: 10,
    })
    .unwrap()
}

#[tokio::test]
async fn live_menu_is_returned_and_tagged() {
    let now = Utc.with_ymd_and_hms(2024, 2, 29, 20, 0, 0).unwrap();
    let mut menu = menu_items_at(now);
    menu.data.truncate(2);
    menu.meta.pagination.total = 2;

    let (url, server) = serve_once("200 OK", serde_json::to_string(&menu).unwrap()).await;
    let sourced = client(&url, "test-token").menu_items().await;
    let head = server.await.unwrap();

    assert_eq!(sourced.source, ContentSource::Live);
    assert_eq!(sourced.data, menu);

    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /api/menu-items?"), "{request_line}");
    assert!(request_line.contains("populate=*"), "{request_line}");
    assert!(request_line.contains("pagination%5BpageSize%5D=10"), "{request_line}");
    assert!(
        head.to_ascii_lowercase().contains("authorization: bearer test-token"),
        "{head}"
    );
}

#[tokio::test]
async fn no_token_sends_no_authorization_header() {
    let now = Utc.with_ymd_and_hms(2024, 2, 29, 20, 0, 0).unwrap();
    let body = serde_json::to_string(&testimonials_at(now)).unwrap();
    let (url, server) = serve_once("200 OK", body).await;

    let response = client(&url, "").fetch_testimonials().await.unwrap();
    let head = server.await.unwrap();

    assert_eq!(response.len(), 3);
    assert!(!head.to_ascii_lowercase().contains("authorization:"), "{head}");
}

#[tokio::test]
async fn server_error_falls_back() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#.into()).await;
    let sourced = client(&url, "").menu_items().await;
    server.await.unwrap();

    assert!(sourced.is_fallback());
    assert_eq!(sourced.data, *MENU_ITEMS);
}

#[tokio::test]
async fn unexpected_shape_is_a_parse_error() {
    let (url, server) = serve_once("200 OK", r#"{"data": "nope"}"#.into()).await;
    let err = client(&url, "").fetch_homepage().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, CmsError::Parse { ref path, .. } if path == "homepage"));
}

#[tokio::test]
async fn invalid_content_is_rejected_and_replaced() {
    let mut menu = MENU_ITEMS.clone();
    menu.data[0].attributes.price = 0.0;
    let (url, server) = serve_once("200 OK", serde_json::to_string(&menu).unwrap()).await;

    let err = client(&url, "").fetch_menu_items().await.unwrap_err();
    server.await.unwrap();
    assert!(matches!(err, CmsError::Invalid(_)));
}

#[tokio::test]
async fn unreachable_cms_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}"), "");
    assert!(matches!(client.fetch_menu_items().await, Err(CmsError::Http(_))));

    let sourced = load_menu_items(Some(&client)).await;
    assert_eq!(sourced.source, ContentSource::Fallback);
    assert_eq!(sourced.data.pagination().total, 6);
}
