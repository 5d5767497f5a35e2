//! WebSocket handler
//!
//! Handles WebSocket connections and message processing.

use crate::connection::Connection;
use crate::handlers::EventDispatcher;
use crate::protocol::{ClientEvent, ServerEvent};
use crate::relay::RelayQueue;
use crate::server::GatewayState;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, interval_at, Instant};

/// Shortest ping or liveness-check period
const MIN_TICK: Duration = Duration::from_millis(10);

/// WebSocket gateway handler
pub async fn gateway_handler(
    State(state): State<GatewayState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: GatewayState, socket: WebSocket) {
    let connection_id = Connection::generate_id();

    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();

    let connection = state
        .connection_manager()
        .add_connection(connection_id.clone(), tx);

    tracing::info!(connection_id = %connection_id, "WebSocket connection established");

    let (mut ws_sink, mut ws_stream) = socket.split();

    // Receive task: parse and dispatch client frames in arrival order
    let state_recv = state.clone();
    let connection_recv = connection.clone();
    let relay_queue = state.relay_queue(&connection_id);
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            connection_recv.touch();

            match msg {
                Ok(Message::Text(text)) => {
                    handle_text_message(&state_recv, &connection_recv, &relay_queue, &text);
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!(
                        connection_id = %connection_recv.id(),
                        "Ignoring binary frame"
                    );
                }
                Ok(Message::Ping(_)) => {
                    // axum answers pings itself
                    tracing::trace!(connection_id = %connection_recv.id(), "Ping received");
                }
                Ok(Message::Pong(_)) => {
                    tracing::trace!(connection_id = %connection_recv.id(), "Pong received");
                }
                Ok(Message::Close(_)) => {
                    tracing::info!(connection_id = %connection_recv.id(), "Client closed connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!(
                        connection_id = %connection_recv.id(),
                        error = %e,
                        "WebSocket error"
                    );
                    break;
                }
            }
        }
    });

    // Send task: drain the outbound queue and ping on the heartbeat interval
    let connection_id_send = connection_id.clone();
    let ping_every = state.heartbeat_interval().max(MIN_TICK);
    let mut send_task = tokio::spawn(async move {
        let mut ping = interval_at(Instant::now() + ping_every, ping_every);

        loop {
            tokio::select! {
                event = rx.recv() => {
                    let Some(event) = event else { break };
                    let json = match event.to_json() {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!(event = %event, error = %e, "Failed to serialize event");
                            continue;
                        }
                    };
                    if ws_sink.send(Message::Text(json)).await.is_err() {
                        tracing::warn!(
                            connection_id = %connection_id_send,
                            "Failed to send message to WebSocket"
                        );
                        break;
                    }
                }
                _ = ping.tick() => {
                    if ws_sink.send(Message::Ping(Vec::new())).await.is_err() {
                        break;
                    }
                }
            }
        }

        let _ = ws_sink.close().await;
    });

    // Heartbeat task: give up on sockets that stay silent too long
    let connection_hb = connection.clone();
    let timeout = state.heartbeat_timeout();
    let mut heartbeat_task = tokio::spawn(async move {
        let mut check_interval = interval((timeout / 4).max(MIN_TICK));

        loop {
            check_interval.tick().await;

            let idle = connection_hb.idle_for();
            if idle > timeout {
                tracing::warn!(
                    connection_id = %connection_hb.id(),
                    idle_ms = idle.as_millis(),
                    "Connection timed out"
                );
                break;
            }
        }
    });

    // Wait for any task to complete
    tokio::select! {
        _ = &mut recv_task => {
            tracing::debug!(connection_id = %connection_id, "Receive task ended");
        }
        _ = &mut send_task => {
            tracing::debug!(connection_id = %connection_id, "Send task ended");
        }
        _ = &mut heartbeat_task => {
            tracing::debug!(connection_id = %connection_id, "Heartbeat task ended");
        }
    }

    recv_task.abort();
    send_task.abort();
    heartbeat_task.abort();

    cleanup_connection(&state, &connection);
}

/// Handle a text frame from the client
///
/// Frames that do not parse are logged and dropped; the connection stays open.
fn handle_text_message(
    state: &GatewayState,
    connection: &Arc<Connection>,
    relay: &RelayQueue,
    text: &str,
) {
    let event = match ClientEvent::from_json(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(
                connection_id = %connection.id(),
                error = %e,
                "Ignoring unreadable frame"
            );
            return;
        }
    };

    EventDispatcher::dispatch(state, connection, relay, event);
}

/// Clean up a connection on disconnect
fn cleanup_connection(state: &GatewayState, connection: &Arc<Connection>) {
    tracing::info!(connection_id = %connection.id(), "Cleaning up connection");

    // stop queueing to this socket before telling everyone else
    state.connection_manager().remove_connection(connection.id());
    state.registry().disconnect(connection.id());
}
