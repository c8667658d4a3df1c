//! Access log fields emitted by the trace layer.

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use league_server::config::ServerConfig;
use league_server::HttpServer;
use tower::ServiceExt;

mod common;

use common::{Behavior, FakeClient};

/// `io::Write` sink shared with the test body.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_access_log_records_request_and_outcome() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let router = HttpServer::new(ServerConfig::default(), FakeClient::new(Behavior::Succeed)).router();
    let request = Request::builder()
        .uri("/v1/match/abc")
        .header("x-request-id", "rid-1")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let log = captured.contents();
    assert!(log.contains("method=GET"), "{log}");
    assert!(log.contains("path=/v1/match/abc"), "{log}");
    assert!(log.contains("request_id=rid-1"), "{log}");
    assert!(log.contains("client_ip=-"), "{log}");
    assert!(log.contains("status=400"), "{log}");
    assert!(log.contains("latency="), "{log}");
}
