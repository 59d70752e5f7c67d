use roman_api::{Server, TomlConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let mut config = TomlConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();
    let server = Server::from_config(&config);
    let handle = tokio::spawn(server.run_with_listener(listener, async move {
        shutdown_receiver.await.ok();
    }));

    let client = reqwest::Client::new();
    let base = format!("http://{}", address);

    let response = client
        .get(format!("{}/api/a2r?arabic=1994", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["roman"], "MCMXCIV");

    // 時間戳為 ISO-8601 毫秒精度 UTC
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
    assert_eq!(timestamp.len(), "2025-01-02T03:04:05.000Z".len());

    let response = client
        .post(format!("{}/api/batch", base))
        .json(&json!({ "values": ["XIV", 14, "not-a-numeral", 4000] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], 4);

    let response = client
        .get(format!("{}/does/not/exist", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    shutdown_sender.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}
