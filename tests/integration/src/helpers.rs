//! Test helpers for integration tests
//!
//! Provides utilities for spawning the API and gateway servers, making HTTP
//! requests, minting tokens and talking to the gateway over WebSocket.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tunehub_common::{AppConfig, JwtService};

/// External id granted admin rights in every test configuration
pub const TEST_ADMIN_ID: &str = "integration_admin";

/// Token lifetime used by the helpers
const TOKEN_TTL_SECONDS: i64 = 3600;

/// How long to wait for a gateway event before failing
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// API test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = tunehub_api::create_app_state(&config).await?;
        let app = tunehub_api::create_app(state, &config);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            jwt: JwtService::new(&config.jwt.secret),
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Mint a bearer token for `external_id`
    pub fn token_for(&self, external_id: &str) -> Result<String> {
        Ok(self.jwt.issue(external_id, TOKEN_TTL_SECONDS)?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).bearer_auth(token).send().await?)
    }
}

/// Gateway test server instance
pub struct GatewayServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl GatewayServer {
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let state = tunehub_gateway::create_gateway_state(&config).await?;
        let app = tunehub_gateway::create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    pub fn socket_url(&self) -> String {
        format!("ws://{}/socket", self.addr)
    }

    /// Open a socket and announce `user_id`
    pub async fn connect_as(&self, user_id: &str) -> Result<WsClient> {
        let (stream, _) = connect_async(self.socket_url()).await?;
        let mut client = WsClient { stream };
        client.emit("user_connected", json!(user_id)).await?;
        Ok(client)
    }
}

/// Thin JSON-event client over a gateway socket
pub struct WsClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsClient {
    /// Send `{"event": event, "data": data}`
    pub async fn emit(&mut self, event: &str, data: Value) -> Result<()> {
        let frame = json!({ "event": event, "data": data }).to_string();
        self.stream.send(Message::Text(frame)).await?;
        Ok(())
    }

    /// Next event frame, skipping control frames
    pub async fn next_event(&mut self) -> Result<Value> {
        loop {
            let frame = tokio::time::timeout(EVENT_TIMEOUT, self.stream.next())
                .await
                .map_err(|_| anyhow::anyhow!("timed out waiting for an event"))?
                .ok_or_else(|| anyhow::anyhow!("socket closed"))??;

            if let Message::Text(text) = frame {
                return Ok(serde_json::from_str(&text)?);
            }
        }
    }

    /// Skip events until one named `event` arrives and return its data
    pub async fn expect_event(&mut self, event: &str) -> Result<Value> {
        loop {
            let value = self.next_event().await?;
            if value["event"] == event {
                return Ok(value["data"].clone());
            }
        }
    }

    pub async fn close(mut self) -> Result<()> {
        self.stream.close(None).await?;
        Ok(())
    }
}

/// Create a test configuration
///
/// Ports are chosen by the OS, so `API_PORT` and `GATEWAY_PORT` default to 0.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    for (name, fallback) in [
        ("API_PORT", "0"),
        ("GATEWAY_PORT", "0"),
        ("JWT_SECRET", "integration-test-secret"),
    ] {
        if std::env::var(name).is_err() {
            std::env::set_var(name, fallback);
        }
    }

    let mut config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    config.admin.user_ids.push(TEST_ADMIN_ID.to_string());
    // Tests share one limiter per server; keep it out of the way
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    // every test spawns its own pool
    config.database.max_connections = 5;
    config.database.min_connections = 1;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
