//! Umami HTTP client

use std::sync::Arc;

use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use crate::application::config::AnalyticsConfig;
use crate::domain::range::TimeRange;
use crate::domain::stats::UmamiStats;
use crate::domain::upstream::AnalyticsUpstream;
use crate::error::{AnalyticsError, AnalyticsResult};

const JSON: &str = "application/json";

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Umami API client
#[derive(Debug, Clone)]
pub struct UmamiClient {
    http: reqwest::Client,
    config: Arc<AnalyticsConfig>,
}

impl UmamiClient {
    pub fn new(config: Arc<AnalyticsConfig>) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: Arc<AnalyticsConfig>) -> Self {
        Self { http, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.server_url, path)
    }

    fn stats_url(&self) -> String {
        self.url(&format!("/api/websites/{}/stats", self.config.website_id))
    }
}

impl AnalyticsUpstream for UmamiClient {
    async fn login(&self) -> AnalyticsResult<String> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .header(ACCEPT, JSON)
            .json(&LoginBody {
                username: &self.config.username,
                password: self.config.password.expose(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalyticsError::LoginFailed(response.status().to_string()));
        }

        let body: LoginResponse = response.json().await?;
        tracing::info!(server = %self.config.server_url, "Logged in to Umami");
        Ok(body.token)
    }

    async fn verify(&self, token: &str) -> bool {
        let result = self
            .http
            .post(self.url("/api/auth/verify"))
            .bearer_auth(token)
            .header(ACCEPT, JSON)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Umami token verification request failed");
                false
            }
        }
    }

    async fn fetch_stats(&self, token: &str, range: TimeRange) -> AnalyticsResult<UmamiStats> {
        let response = self
            .http
            .get(self.stats_url())
            .bearer_auth(token)
            .header(ACCEPT, JSON)
            .query(&[("startAt", range.start_at), ("endAt", range.end_at)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalyticsError::StatsFailed(response.status().to_string()));
        }

        Ok(response.json().await?)
    }
}
