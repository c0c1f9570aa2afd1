//! RocksDB-backed service integration tests.

#![cfg(feature = "rocksdb-backend")]

mod common;

use axum_test::TestServer;
use serde_json::Value;
use tempfile::TempDir;

use roastery_service::{create_router, AppState, ServiceConfig, StoreBackend};

fn server(dir: &TempDir) -> TestServer {
    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        store_backend: StoreBackend::RocksDb,
        data_dir: dir.path().to_string_lossy().to_string(),
        ..ServiceConfig::default()
    };
    TestServer::new(create_router(AppState::from_config(config)))
        .expect("Failed to create test server")
}

#[tokio::test]
async fn products_survive_restart() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    {
        let server = server(&dir);
        server
            .post("/api/admin/product")
            .json(&common::product("Kenya AA", "kenya-aa", 21.0))
            .await
            .assert_status_ok();
    }

    let server = server(&dir);
    let response = server.get("/api/products/kenya-aa").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Kenya AA");
    assert_eq!(body["inventory"], 100);
}
