//! End-to-end gateway tests
//!
//! Runs the real router on an ephemeral port over in-memory repositories and
//! talks to it with real WebSocket clients.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use tunehub_common::HeartbeatConfig;
use tunehub_gateway::{create_app, GatewayState};
use tunehub_service::memory::{memory_context_with, MemoryStore};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_gateway(store: &Arc<MemoryStore>) -> SocketAddr {
    let state = GatewayState::new(memory_context_with(store), HeartbeatConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_app(state)).await.unwrap();
    });

    addr
}

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/socket")).await.unwrap();
    client
}

async fn emit(client: &mut Client, event: &str, data: Value) {
    let frame = json!({ "event": event, "data": data }).to_string();
    client.send(Message::Text(frame)).await.unwrap();
}

/// Next JSON event, skipping control frames
async fn next_event(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for event")
            .expect("socket closed")
            .unwrap();

        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

async fn expect_event(client: &mut Client, name: &str) -> Value {
    let event = next_event(client).await;
    assert_eq!(event["event"], name, "unexpected event: {event}");
    event["data"].clone()
}

/// Announce `user_id` and consume the three resulting broadcasts
async fn announce(client: &mut Client, user_id: &str) -> Value {
    emit(client, "user_connected", json!(user_id)).await;
    assert_eq!(expect_event(client, "user_connected").await, json!(user_id));
    let online = expect_event(client, "users_online").await;
    expect_event(client, "activities").await;
    online
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_gateway(&MemoryStore::new()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    tokio::io::AsyncWriteExt::write_all(
        &mut stream,
        b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await
    .unwrap();

    let mut response = String::new();
    tokio::io::AsyncReadExt::read_to_string(&mut stream, &mut response)
        .await
        .unwrap();
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.ends_with("OK"));
}

#[tokio::test]
async fn test_presence_and_direct_message_flow() {
    let store = MemoryStore::new();
    let addr = spawn_gateway(&store).await;

    let mut alice = connect(addr).await;
    assert_eq!(announce(&mut alice, "alice").await, json!(["alice"]));

    let mut bob = connect(addr).await;
    assert_eq!(announce(&mut bob, "bob").await, json!(["alice", "bob"]));

    // alice hears about bob too
    assert_eq!(expect_event(&mut alice, "user_connected").await, json!("bob"));
    assert_eq!(
        expect_event(&mut alice, "users_online").await,
        json!(["alice", "bob"])
    );
    assert_eq!(
        expect_event(&mut alice, "activities").await,
        json!([["alice", "Online"], ["bob", "Online"]])
    );

    emit(
        &mut alice,
        "send_message",
        json!({ "senderId": "alice", "receiverId": "bob", "content": "hey bob" }),
    )
    .await;

    let received = expect_event(&mut bob, "receiver_message").await;
    let echoed = expect_event(&mut alice, "message_sent").await;
    assert_eq!(received["id"], echoed["id"]);
    assert_eq!(received["content"], "hey bob");
    assert_eq!(received["senderId"], "alice");
    assert_eq!(store.message_count(), 1);

    emit(
        &mut bob,
        "update_activity",
        json!({ "userId": "bob", "activity": "Playing Song by Artist" }),
    )
    .await;
    let expected = json!({ "userId": "bob", "activity": "Playing Song by Artist" });
    assert_eq!(expect_event(&mut alice, "activity_updated").await, expected);
    assert_eq!(expect_event(&mut bob, "activity_updated").await, expected);

    bob.close(None).await.unwrap();
    assert_eq!(expect_event(&mut alice, "user_disconnected").await, json!("bob"));
    assert_eq!(expect_event(&mut alice, "users_online").await, json!(["alice"]));
}

#[tokio::test]
async fn test_bad_frames_are_ignored() {
    let store = MemoryStore::new();
    let addr = spawn_gateway(&store).await;

    let mut client = connect(addr).await;
    client.send(Message::Text("not json".to_string())).await.unwrap();
    client.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
    emit(&mut client, "play_song", json!({ "songId": "1" })).await;
    emit(&mut client, "user_connected", json!(null)).await;

    // still alive and in order
    assert_eq!(announce(&mut client, "carol").await, json!(["carol"]));
}

#[tokio::test]
async fn test_invalid_message_goes_to_sender_only() {
    let store = MemoryStore::new();
    let addr = spawn_gateway(&store).await;

    let mut sender = connect(addr).await;
    announce(&mut sender, "dave").await;

    emit(
        &mut sender,
        "send_message",
        json!({ "senderId": "dave", "receiverId": "erin", "content": "   " }),
    )
    .await;

    assert_eq!(
        expect_event(&mut sender, "message_error").await,
        json!("Invalid message data.")
    );
    assert_eq!(store.message_count(), 0);

    // offline receiver: stored and echoed, nothing else
    emit(
        &mut sender,
        "send_message",
        json!({ "senderId": "dave", "receiverId": "erin", "content": "later" }),
    )
    .await;
    let echoed = expect_event(&mut sender, "message_sent").await;
    assert_eq!(echoed["receiverId"], "erin");
    assert_eq!(store.message_count(), 1);
}

#[tokio::test]
async fn test_slow_message_write_does_not_hold_presence() {
    let store = MemoryStore::new();
    store.set_message_write_delay(Duration::from_millis(500));
    let addr = spawn_gateway(&store).await;

    let mut frank = connect(addr).await;
    announce(&mut frank, "frank").await;

    emit(
        &mut frank,
        "send_message",
        json!({ "senderId": "frank", "receiverId": "gina", "content": "slow" }),
    )
    .await;
    emit(
        &mut frank,
        "update_activity",
        json!({ "userId": "frank", "activity": "Idle" }),
    )
    .await;

    assert_eq!(
        expect_event(&mut frank, "activity_updated").await,
        json!({ "userId": "frank", "activity": "Idle" })
    );
    let echoed = expect_event(&mut frank, "message_sent").await;
    assert_eq!(echoed["content"], "slow");
    assert_eq!(store.message_count(), 1);
}

#[tokio::test]
async fn test_silent_socket_is_dropped() {
    let state = GatewayState::new(
        memory_context_with(&MemoryStore::new()),
        HeartbeatConfig {
            interval_ms: 60_000,
            timeout_ms: 200,
        },
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut client = connect(addr).await;
    announce(&mut client, "frank").await;
    assert!(state.registry().is_online("frank"));

    // say nothing until the server gives up on us
    let closed = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match client.next().await {
                None | Some(Err(_)) | Some(Ok(Message::Close(_))) => break,
                Some(Ok(_)) => {}
            }
        }
    })
    .await;
    assert!(closed.is_ok(), "socket was never dropped");

    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while state.registry().is_online("frank") {
        assert!(tokio::time::Instant::now() < deadline, "user still online");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(state.connection_manager().connection_count(), 0);
}
