//! Integration tests for the RPC adapter.

use std::collections::HashSet;

use futures::future::join_all;
use tokio_test::assert_ok;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;

use super::harness::{service, spawn_rpc};
use crate::rpc::handlers::{AccountApiClient, INVALID_PARAMS, NOT_FOUND};

fn client_for(addr: std::net::SocketAddr) -> HttpClient {
    HttpClientBuilder::default()
        .build(format!("http://{addr}"))
        .unwrap()
}

fn call_code(err: ClientError) -> i32 {
    match err {
        ClientError::Call(e) => e.code(),
        other => panic!("expected a call error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn create_then_get_roundtrip() {
    let (addr, _handle) = spawn_rpc(service()).await;
    let client = client_for(addr);

    let created = client
        .create_account("bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "bob");
    assert_eq!(created.email, "bob@example.com");

    let fetched = client.get_account(created.id.clone()).await.unwrap();
    assert_eq!(fetched, created);

    let listed = assert_ok!(client.list_accounts().await);
    assert_eq!(listed.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn empty_fields_map_to_invalid_params() {
    let (addr, _handle) = spawn_rpc(service()).await;
    let client = client_for(addr);

    let err = client
        .create_account(String::new(), "a@b.com".to_string())
        .await
        .unwrap_err();
    assert_eq!(call_code(err), INVALID_PARAMS);

    let err = client
        .create_account("alice".to_string(), String::new())
        .await
        .unwrap_err();
    assert_eq!(call_code(err), INVALID_PARAMS);

    let err = client.get_account(String::new()).await.unwrap_err();
    assert_eq!(call_code(err), INVALID_PARAMS);

    // Nothing was stored by the rejected calls.
    assert!(client.list_accounts().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unknown_id_maps_to_not_found() {
    let (addr, _handle) = spawn_rpc(service()).await;
    let client = client_for(addr);

    let err = client
        .get_account(uuid::Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert_eq!(call_code(err), NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_yield_distinct_ids() {
    let (addr, _handle) = spawn_rpc(service()).await;
    let client = client_for(addr);

    let creates = (0..100).map(|i| {
        let client = client.clone();
        async move {
            client
                .create_account(format!("user-{i}"), format!("user-{i}@example.com"))
                .await
                .unwrap()
                .id
        }
    });
    let ids: HashSet<String> = join_all(creates).await.into_iter().collect();
    assert_eq!(ids.len(), 100);

    let listed = client.list_accounts().await.unwrap();
    assert_eq!(listed.len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn discovery_lists_the_account_methods() {
    let (addr, _handle) = spawn_rpc(service()).await;
    let client = client_for(addr);

    let discovered: serde_json::Value =
        client.request("rpc_methods", rpc_params![]).await.unwrap();
    let methods: Vec<&str> = discovered["methods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap())
        .collect();

    for expected in ["create_account", "get_account", "list_accounts", "rpc_methods"] {
        assert!(methods.contains(&expected), "missing {expected}");
    }
}
