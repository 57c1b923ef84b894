use std::sync::Arc;

use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde_json::Value;
use ticker_core::models::api_result::ApiResult;
use ticker_core::{Host, HostConfig, Ticker, WorkerLifetime};

fn host(lifetime: WorkerLifetime) -> Host {
    Host::build(HostConfig {
        worker_lifetime: lifetime,
        ..HostConfig::default()
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let service = Service::new(host(WorkerLifetime::Singleton).router());

    let result: ApiResult = TestClient::get("http://127.0.0.1:13088/checkhealth")
        .send(&service)
        .await
        .take_json()
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.code, 200);
    assert_eq!(result.msg.as_deref(), Some("Healthy"));
    assert!(result.data["uptime_secs"].is_u64());
}

#[tokio::test]
async fn ticker_info_follows_ticks() {
    let host = host(WorkerLifetime::Singleton);
    let state = host.state().clone();
    let service = Service::new(host.router());

    let ticker = Ticker::with_stats(
        state.provider.clone(),
        std::time::Duration::from_secs(1),
        state.stats.clone(),
    );
    ticker.tick();
    ticker.tick();
    ticker.tick();

    let result: ApiResult = TestClient::get("http://127.0.0.1:13088/ticker")
        .send(&service)
        .await
        .take_json()
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.data["status"], "Stopped");
    assert_eq!(result.data["ticks"], 3);
    assert_eq!(result.data["interval_ms"], 1000);
    assert_eq!(result.data["worker_lifetime"], "singleton");
    assert_eq!(result.data["counter"], 3);
    assert!(result.data["last_tick_ms"].is_u64());
}

#[tokio::test]
async fn scoped_ticker_has_no_shared_counter() {
    let host = host(WorkerLifetime::Scoped);
    let service = Service::new(host.router());

    let result: ApiResult = TestClient::get("http://127.0.0.1:13088/ticker")
        .send(&service)
        .await
        .take_json()
        .await
        .unwrap();

    assert_eq!(result.data["worker_lifetime"], "scoped");
    assert_eq!(result.data["counter"], Value::Null);
    assert_eq!(result.data["ticks"], 0);
}

#[tokio::test]
async fn exit_triggers_shutdown() {
    let host = host(WorkerLifetime::Singleton);
    let shutdown = host.shutdown();
    let service = Service::new(host.router());
    assert!(!shutdown.is_triggered());

    let mut res = TestClient::get("http://127.0.0.1:13088/exit")
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::OK));
    let result: ApiResult = res.take_json().await.unwrap();

    assert!(result.success);
    assert!(shutdown.is_triggered());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let service = Service::new(host(WorkerLifetime::Singleton).router());

    let res = TestClient::get("http://127.0.0.1:13088/download")
        .send(&service)
        .await;
    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
}

#[test]
fn state_shares_provider() {
    let host = host(WorkerLifetime::Singleton);
    let a = host.state().clone();
    let b = host.state().clone();
    assert!(Arc::ptr_eq(&a.provider, &b.provider));
}
