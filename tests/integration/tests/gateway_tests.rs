//! Gateway Integration Tests
//!
//! Drive the realtime gateway against PostgreSQL and read the results back
//! through the REST API. Requires DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test gateway_tests

use integration_tests::{
    assert_json, check_test_env, fixtures::*, GatewayServer, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_direct_message_is_persisted() {
    if !check_test_env().await {
        return;
    }

    let gateway = GatewayServer::start().await.expect("Failed to start gateway");
    let api = TestServer::start().await.expect("Failed to start server");

    let sender = unique_user_id();
    let receiver = unique_user_id();

    let mut sender_ws = gateway.connect_as(&sender).await.unwrap();
    sender_ws.expect_event("activities").await.unwrap();
    let mut receiver_ws = gateway.connect_as(&receiver).await.unwrap();
    let online = receiver_ws.expect_event("users_online").await.unwrap();
    assert_eq!(online, json!([sender.clone(), receiver.clone()]));

    sender_ws
        .emit(
            "send_message",
            json!({ "senderId": sender, "receiverId": receiver, "content": "over the wire" }),
        )
        .await
        .unwrap();

    let delivered = receiver_ws.expect_event("receiver_message").await.unwrap();
    let echoed = sender_ws.expect_event("message_sent").await.unwrap();
    assert_eq!(delivered["id"], echoed["id"]);

    let token = api.token_for(&receiver).unwrap();
    let response = api
        .get_auth(&format!("/api/users/messages/{sender}"), &token)
        .await
        .unwrap();
    let conversation: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].content, "over the wire");
    assert_eq!(conversation[0].sender_id, sender);
    assert_eq!(conversation[0].receiver_id, receiver);
    assert_eq!(json!(conversation[0].id), delivered["id"]);

    receiver_ws.close().await.unwrap();
    assert_eq!(
        sender_ws.expect_event("user_disconnected").await.unwrap(),
        json!(receiver)
    );
    sender_ws.close().await.unwrap();
}

#[tokio::test]
async fn test_message_to_offline_user_is_stored() {
    if !check_test_env().await {
        return;
    }

    let gateway = GatewayServer::start().await.expect("Failed to start gateway");
    let api = TestServer::start().await.expect("Failed to start server");

    let sender = unique_user_id();
    let offline = unique_user_id();

    let mut ws = gateway.connect_as(&sender).await.unwrap();
    ws.emit(
        "send_message",
        json!({ "senderId": sender, "receiverId": offline, "content": "read me later" }),
    )
    .await
    .unwrap();
    let echoed = ws.expect_event("message_sent").await.unwrap();
    assert_eq!(echoed["receiverId"], json!(offline));

    let token = api.token_for(&offline).unwrap();
    let response = api
        .get_auth(&format!("/api/users/messages/{sender}"), &token)
        .await
        .unwrap();
    let conversation: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].content, "read me later");

    ws.close().await.unwrap();
}
