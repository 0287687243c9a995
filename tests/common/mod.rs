#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use product_catalog_api::auth::hash_password;
use product_catalog_api::config::AppConfig;
use product_catalog_api::database::{Database, NewProduct, Product};
use product_catalog_api::{app, AppState};

/// The router served on a free local port over its own in-memory store.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub db: Database,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with(AppConfig::development()).await
    }

    pub async fn start_with(config: AppConfig) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let db = Database::in_memory().await?;
        let router = app(AppState::new(db.clone(), &config), &config.security);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self {
            port,
            base_url,
            db,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Smartphone 499.99, Laptop 999.99 (electronics) and T-Shirt 19.99 (clothing).
    pub async fn seed_products(&self) -> Result<Vec<Product>> {
        let repo = self.db.products();
        let mut products = Vec::new();
        for p in [
            NewProduct::new("Smartphone", 499.99, "electronics", "https://example.com/smartphone.jpg"),
            NewProduct::new("Laptop", 999.99, "electronics", "https://example.com/laptop.jpg"),
            NewProduct::new("T-Shirt", 19.99, "clothing", "https://example.com/tshirt.jpg"),
        ] {
            products.push(repo.create(&p).await?);
        }
        Ok(products)
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<i64> {
        let digest = hash_password(password)?;
        Ok(self.db.users().create(username, &digest).await?.id)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

        let body: Value = res.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("login response has no token")
    }

    /// A fresh user with a valid bearer token.
    pub async fn user_with_token(&self, username: &str) -> Result<(i64, String)> {
        let id = self.create_user(username, "secret").await?;
        let token = self.login(username, "secret").await?;
        Ok((id, token))
    }
}

pub fn titles(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|r| r["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
