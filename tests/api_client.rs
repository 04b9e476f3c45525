// SPDX-License-Identifier: MPL-2.0
//! Client behavior against a canned HTTP server.

use campaign_studio::api::{ApiError, CampaignClient};
use campaign_studio::domain::{BaseImage, Brief, ImageSlot};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A minimal mock HTTP server that answers one request with a canned body.
struct MockServer {
    listener: TcpListener,
    base_url: String,
}

impl MockServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().unwrap().port();
        Self {
            listener,
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    /// Accepts one connection, replies, and returns the raw request.
    async fn respond_once(self, status_code: u16, content_type: &str, body: &[u8]) -> Vec<u8> {
        let (mut stream, _) = self.listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;

        let head = format!(
            "HTTP/1.1 {status_code} Status\r\n\
             Content-Type: {content_type}\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).await.unwrap();
        stream.write_all(body).await.unwrap();
        stream.shutdown().await.unwrap();

        request
    }
}

/// Reads headers plus a `Content-Length` body.
async fn read_request(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return buf;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = find(&buf, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        if headers.contains("transfer-encoding: chunked") {
            if buf.ends_with(b"0\r\n\r\n") {
                return buf;
            }
            continue;
        }
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + length {
            return buf;
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn sample_brief() -> Brief {
    Brief {
        campaign_name: "Summer Launch 2025".into(),
        region: "North America".into(),
        audience: "Dog owners, pet lovers".into(),
        message: "The perfect collar for your best friend!".into(),
        brand_colors: vec!["Blue".into(), "White".into()],
        products: Brief::products_from_rows([(
            "Dog Collar",
            "A durable and stylish collar for medium-sized dogs.",
        )]),
    }
}

#[tokio::test]
async fn list_campaigns_decodes_map_in_server_order() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();
    let body = br#"{
        "zeta": [{"url": "https://cdn/z.png?raw=1", "filename": "z.png"}],
        "alpha": []
    }"#;

    let (request, result) = tokio::join!(
        server.respond_once(200, "application/json", body),
        client.list_campaigns()
    );

    let request = String::from_utf8_lossy(&request);
    assert!(request.starts_with("GET /list-campaigns HTTP/1.1"));

    let campaigns = result.expect("listing decodes");
    let names: Vec<&str> = campaigns.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
    assert_eq!(campaigns["zeta"][0].filename, "z.png");
}

#[tokio::test]
async fn list_campaigns_surfaces_server_detail() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();

    let (_, result) = tokio::join!(
        server.respond_once(503, "application/json", br#"{"detail": "Storage offline"}"#),
        client.list_campaigns()
    );

    let err = result.expect_err("non-success status");
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message("Failed to fetch campaign data."), "Storage offline");
}

#[tokio::test]
async fn list_campaigns_html_error_uses_fallback() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();

    let (_, result) = tokio::join!(
        server.respond_once(502, "text/html", b"<h1>Bad Gateway</h1>"),
        client.list_campaigns()
    );

    let err = result.expect_err("non-success status");
    assert_eq!(
        err.user_message("Failed to fetch campaign data."),
        "Failed to fetch campaign data."
    );
}

#[tokio::test]
async fn malformed_success_body_is_deserialization_error() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();

    let (_, result) = tokio::join!(
        server.respond_once(200, "application/json", b"[1, 2, 3]"),
        client.list_campaigns()
    );

    assert!(matches!(result, Err(ApiError::Deserialization(_))));
}

#[tokio::test]
async fn refused_connection_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = CampaignClient::new(format!("http://127.0.0.1:{port}")).unwrap();
    let result = client.list_campaigns().await;

    assert!(matches!(result, Err(ApiError::Connection(_))));
}

#[tokio::test]
async fn process_brief_sends_multipart_fields() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();
    let images = vec![
        BaseImage {
            slot: ImageSlot::First,
            file_name: "dog.png".into(),
            bytes: b"fake-png".to_vec(),
            description: "A happy dog".into(),
        },
        BaseImage {
            slot: ImageSlot::Second,
            file_name: "skipped.png".into(),
            bytes: b"ignored".to_vec(),
            description: String::new(),
        },
    ];
    let body = br#"{"image_urls": ["https://x/y/photo_1024x768_a.png?raw=1"], "message": "ok"}"#;

    let brief = sample_brief();
    let (request, result) = tokio::join!(
        server.respond_once(200, "application/json", body),
        client.process_brief(&brief, images)
    );

    let request = String::from_utf8_lossy(&request);
    assert!(request.starts_with("POST /process-brief HTTP/1.1"));
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains("name=\"brief_data\""));
    assert!(request.contains("\"campaign_name\":\"Summer Launch 2025\""));
    assert!(request.contains("name=\"base_image_1\"; filename=\"dog.png\""));
    assert!(request.contains("name=\"base_image_desc_1\""));
    assert!(request.contains("A happy dog"));
    assert!(!request.contains("base_image_2"));

    let outcome = result.expect("brief processed");
    assert_eq!(outcome.image_urls.len(), 1);
    assert_eq!(outcome.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn process_brief_missing_image_urls_is_empty() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();

    let brief = sample_brief();
    let (_, result) = tokio::join!(
        server.respond_once(200, "application/json", br#"{"message": "No products matched"}"#),
        client.process_brief(&brief, Vec::new())
    );

    let outcome = result.expect("brief processed");
    assert!(outcome.image_urls.is_empty());
    assert_eq!(outcome.message.as_deref(), Some("No products matched"));
}

#[tokio::test]
async fn download_streams_body_to_disk() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("nested").join("photo.png");
    let url = format!("{}/files/photo.png?dl=1", server.base_url);

    let (request, result) = tokio::join!(
        server.respond_once(200, "image/png", b"\x89PNG-data"),
        client.download_to(&url, &destination)
    );

    assert!(String::from_utf8_lossy(&request).starts_with("GET /files/photo.png?dl=1"));
    assert_eq!(result.expect("download succeeds"), 9);
    assert_eq!(tokio::fs::read(&destination).await.unwrap(), b"\x89PNG-data");
}

#[tokio::test]
async fn failed_download_leaves_no_file() {
    let server = MockServer::start().await;
    let client = CampaignClient::new(&server.base_url).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("photo.png");
    let url = format!("{}/files/missing.png", server.base_url);

    let (_, result) = tokio::join!(
        server.respond_once(404, "application/json", br#"{"detail": "Not found"}"#),
        client.download_to(&url, &destination)
    );

    assert_eq!(result.unwrap_err().user_message("fallback"), "Not found");
    assert!(!destination.exists());
}
