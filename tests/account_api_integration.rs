mod common;

use std::sync::Arc;

use common::build_client;
use keygate_client::models::Identity;
use keygate_client::session::memory_backend::MemoryBackend;
use mockito::Server;

/// The full key-management round: list, create, list again, delete.
#[tokio::test]
async fn integration_api_key_management() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/user/apikeys")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body(r#"{"code": 0, "data": []}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/user/apikeys")
        .match_header("authorization", "Bearer tok123")
        .match_body(mockito::Matcher::Json(serde_json::json!({"name": "ci"})))
        .with_status(200)
        .with_body(
            r#"{"code": 0, "data":
                {"id": 1, "user_id": 1, "key": "kg_live_ci", "name": "ci",
                 "status": 1, "created_at": "2024-03-05T12:00:00Z"}}"#,
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/user/apikeys/1")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body(r#"{"code": 0, "data": null}"#)
        .create_async()
        .await;

    let (client, session, _) =
        build_client(server.url(), Arc::new(MemoryBackend::new())).await;
    session
        .login("tok123", Identity::placeholder("alice", ""))
        .await
        .unwrap();

    assert!(client.api_keys().await.expect("list should succeed").is_empty());

    let record = client.create_api_key("ci").await.expect("create should succeed");
    create.assert_async().await;
    assert_eq!(record.key, "kg_live_ci");

    client.delete_api_key(record.id).await.expect("delete should succeed");
    delete.assert_async().await;
}

/// Usage and logs flow through with the bearer header and typed payloads.
#[tokio::test]
async fn integration_usage_and_logs() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/user/usage")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body(
            r#"{"code": 0, "data":
                {"total_calls": 1284, "calls_today": 96,
                 "success_rate": 99.2, "balance": 4200}}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/user/logs?page=1&limit=2")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body(
            r#"{"code": 0, "data": {
                "records": [
                    {"id": "1", "api": "/api/ip", "method": "GET",
                     "status_code": 200, "duration_ms": 32,
                     "ip": "192.168.1.100", "time": "2024-01-10 14:30:25"},
                    {"id": "2", "api": "/api/crypto/encrypt", "method": "POST",
                     "status_code": 400, "duration_ms": 12,
                     "ip": "192.168.1.100", "time": "2024-01-10 14:10:55"}
                ],
                "total": 2, "page": 1, "limit": 2}}"#,
        )
        .create_async()
        .await;

    let (client, session, _) =
        build_client(server.url(), Arc::new(MemoryBackend::new())).await;
    session
        .login("tok123", Identity::placeholder("alice", ""))
        .await
        .unwrap();

    let usage = client.usage().await.expect("usage should succeed");
    assert_eq!(usage.total_calls, 1284);
    assert_eq!(usage.calls_today, 96);

    let logs = client.logs(1, 2).await.expect("logs should succeed");
    assert_eq!(logs.records.len(), 2);
    assert_eq!(logs.records[1].status_code, 400);
}
