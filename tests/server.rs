//! End-to-end tests over a real TCP listener.

use std::time::Duration;

use league_server::config::ServerConfig;
use league_server::lifecycle::Shutdown;
use league_server::HttpServer;

mod common;

use common::{Behavior, FakeClient};

fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_bad_match_id_does_not_kill_server() {
    let (addr, shutdown) = common::start_server(FakeClient::new(Behavior::Succeed)).await;
    let client = http_client();

    for raw in ["abc", "99999999999999999999"] {
        let res = client
            .get(format!("http://{}/v1/match/{}", addr, raw))
            .send()
            .await
            .expect("server unreachable");
        assert_eq!(res.status(), 400);
        assert_eq!(res.headers()["content-type"], "application/json");
    }

    let res = client
        .get(format!("http://{}/v1/match/12345", addr))
        .send()
        .await
        .expect("server died after a malformed request");
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["match"]["gameId"], 12345);

    shutdown.trigger();
}

#[tokio::test]
async fn test_panicking_handler_keeps_process_alive() {
    let (addr, shutdown) = common::start_server(FakeClient::new(Behavior::Panic)).await;
    let client = http_client();

    for _ in 0..3 {
        let res = client
            .get(format!("http://{}/v1/champion/266", addr))
            .send()
            .await
            .expect("server unreachable");
        assert_eq!(res.status(), 500);
    }

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Welcome to the League of Draaaaven");

    shutdown.trigger();
}

#[tokio::test]
async fn test_forwarded_client_ip_accepted() {
    let (addr, shutdown) = common::start_server(FakeClient::new(Behavior::Succeed)).await;

    let res = http_client()
        .get(format!("http://{}/v1/summoner/Faker/stats?region=kr", addr))
        .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(
        ServerConfig::default(),
        FakeClient::new(Behavior::Succeed),
    );

    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(shutdown.trigger(), 1);
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
