//! Contract checks against a one-shot local HTTP server.
//!
//! The server accepts exactly one connection, captures the request body and
//! answers with a canned response, so each test sees exactly what went over
//! the wire.

use api::{AnalysisClient, AnalysisError, AnalysisRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request_body = read_request_body(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request_body
    });

    (format!("http://{addr}/api/analyze-field"), handle)
}

async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8(buf[header_end..header_end + content_length].to_vec()).unwrap()
}

fn client(endpoint: String) -> AnalysisClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    AnalysisClient::with_http_client(endpoint, http)
}

#[tokio::test]
async fn posts_coordinates_and_decodes_the_result() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"ndvi":{"healthy":85.0,"stressed":15.0},"hotspots":{"moisture":[],"stress":[]}}"#,
    )
    .await;

    let result = client(endpoint)
        .analyze(&AnalysisRequest::new(30.9010, 75.8573))
        .await
        .unwrap();

    assert_eq!(server.await.unwrap(), r#"{"latitude":30.901,"longitude":75.8573}"#);
    assert_eq!(result.ndvi.unwrap().healthy, Some(85.0));
    assert!(result.soil_moisture.is_none());
    assert!(result.hotspots.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let (endpoint, server) =
        serve_once("500 Internal Server Error", r#"{"error":"satellite feed down"}"#).await;

    let err = client(endpoint)
        .analyze(&AnalysisRequest::new(30.9010, 75.8573))
        .await
        .unwrap_err();

    server.await.unwrap();
    assert_eq!(
        err,
        AnalysisError::Status {
            status: 500,
            body: r#"{"error":"satellite feed down"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (endpoint, server) = serve_once("200 OK", r#"["not","an","object"]"#).await;

    let err = client(endpoint)
        .analyze(&AnalysisRequest::new(0.0, 0.0))
        .await
        .unwrap_err();

    server.await.unwrap();
    assert!(matches!(err, AnalysisError::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/api/analyze-field"))
        .analyze(&AnalysisRequest::new(12.9716, 77.5946))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
}
