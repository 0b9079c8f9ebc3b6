//! Controller integration tests against a real server.

mod fixtures;

use std::{sync::Arc, time::Duration};

use fixtures::TestServer;
use paylink_client::{
    controller::{ConnectionController, ControllerError, Phase},
    store::{AssociationStore, HttpAssociationStore, StoreError},
};
use paylink_server::domain::{MethodId, PaymentAddress, UserId};
use tokio::net::TcpListener;

fn user_id(id: &str) -> UserId {
    UserId::new(id.to_string()).unwrap()
}

#[tokio::test]
async fn test_connect_round_trip_over_http() {
    // テスト項目: 接続後、新しいコントローラで取得すると同じ内容が返される
    // given (前提条件):
    let server = TestServer::start().await;
    let store = server.store();
    let catalog = Arc::new(store.fetch_catalog().await.unwrap());
    let mut controller = ConnectionController::new(store, user_id("3001"), catalog.clone());
    controller.load().await.unwrap();
    assert_eq!(controller.state().phase(), &Phase::Unselected);

    // when (操作):
    controller.select("binance").unwrap();
    controller.edit_address("abc123").unwrap();
    controller.submit().await.unwrap();

    let mut fresh = ConnectionController::new(server.store(), user_id("3001"), catalog);
    fresh.load().await.unwrap();

    // then (期待する結果):
    assert_eq!(
        fresh.state().phase(),
        &Phase::Connected {
            method_id: MethodId::try_from("binance").unwrap(),
            address: PaymentAddress::try_from("abc123").unwrap(),
        }
    );
}

#[tokio::test]
async fn test_disconnect_over_http() {
    // テスト項目: 切断後は再取得しても未接続になる
    // given (前提条件):
    let server = TestServer::start().await;
    let store = server.store();
    store
        .upsert(
            &user_id("3002"),
            &MethodId::try_from("trustwallet").unwrap(),
            &PaymentAddress::try_from("0xABC").unwrap(),
        )
        .await
        .unwrap();
    let catalog = Arc::new(store.fetch_catalog().await.unwrap());
    let mut controller = ConnectionController::new(store, user_id("3002"), catalog);
    controller.load().await.unwrap();
    assert!(controller.state().phase().is_connected());

    // when (操作):
    controller.submit().await.unwrap();

    // then (期待する結果):
    assert_eq!(controller.state().phase(), &Phase::Unselected);
    let fetched = server.store().fetch(&user_id("3002")).await.unwrap();
    assert!(!fetched.is_connected());
}

#[tokio::test]
async fn test_store_errors_over_http() {
    // テスト項目: 404 は NotFound、400 は Validation に変換される
    let server = TestServer::start().await;
    let store = server.store();

    let not_found = store.fetch(&user_id("nobody")).await.unwrap_err();
    let rejected = store
        .upsert(
            &user_id("3003"),
            &MethodId::try_from("paypal").unwrap(),
            &PaymentAddress::try_from("x").unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(not_found, StoreError::NotFound(_)));
    assert!(matches!(rejected, StoreError::Validation(_)));
}

#[tokio::test]
async fn test_unreachable_server_keeps_editing() {
    // テスト項目: サーバーに接続できない場合、Editing に戻り再試行可能なエラーになる
    // given (前提条件): nothing listens on the port once the listener is dropped
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = HttpAssociationStore::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let catalog = Arc::new(paylink_server::domain::Catalog::default());
    let mut controller = ConnectionController::new(store, user_id("3004"), catalog);

    controller.load().await.unwrap();
    assert_eq!(controller.state().phase(), &Phase::Unselected);
    controller.select("upi").unwrap();
    controller.edit_address("user@upi").unwrap();

    // when (操作):
    let result = controller.submit().await;

    // then (期待する結果):
    assert!(matches!(
        result,
        Err(ControllerError::Store(StoreError::Transient(_)))
    ));
    assert_eq!(
        controller.state().phase(),
        &Phase::Editing {
            method_id: MethodId::try_from("upi").unwrap()
        }
    );
    assert_eq!(controller.state().draft_address(), "user@upi");
}
