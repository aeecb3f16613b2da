use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::*;

/// Serve `base_routes` on an ephemeral port and return the status line of
/// one raw HTTP/1.1 request.
async fn status_line(method: &str, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, base_routes()).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: 0\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response.lines().next().unwrap_or_default().to_owned()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_line("GET", "/healthz").await, "HTTP/1.1 200 OK");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    assert_eq!(status_line("GET", "/api/spin").await, "HTTP/1.1 404 Not Found");
}

#[tokio::test]
async fn healthz_rejects_post() {
    assert_eq!(status_line("POST", "/healthz").await, "HTTP/1.1 405 Method Not Allowed");
}

#[tokio::test]
async fn healthz_handler_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
