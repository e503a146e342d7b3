//! Test helpers for integration tests
//!
//! Spawns the application on an ephemeral port and wraps the HTTP calls the
//! tests make against it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use newsfeed_api::{create_app, create_app_state};
use newsfeed_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{LoginRequest, SignUpRequest, SignUpResponse, TokenResponse};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

/// A signed-up account with a live session
pub struct TestUser {
    pub user_id: i64,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        send(self.client.get(self.url(path)).bearer_auth(token)).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send(self.client.post(self.url(path)).bearer_auth(token).json(body)).await
    }

    /// POST without a body, for likes and logout
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        send(self.client.post(self.url(path)).bearer_auth(token)).await
    }

    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send(self.client.put(self.url(path)).bearer_auth(token).json(body)).await
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        send(self.client.delete(self.url(path)).bearer_auth(token)).await
    }

    /// Sign up a fresh account and log it in
    pub async fn new_user(&self) -> Result<TestUser> {
        let request = SignUpRequest::unique();
        let response = self.post("/api/users/signup", &request).await?;
        let created: SignUpResponse = assert_json(response, StatusCode::CREATED).await?;

        let response = self
            .post("/api/auth/login", &LoginRequest::from_sign_up(&request))
            .await?;
        let tokens: TokenResponse = assert_json(response, StatusCode::OK).await?;

        Ok(TestUser {
            user_id: created.user_id,
            username: request.username,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    Ok(request.send().await?)
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    // Tests fire requests back to back
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    if std::env::var("DATABASE_MIGRATIONS_DIR").is_err() {
        config.database.migrations_dir =
            concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();
    }

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET", "API_PORT"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
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
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
