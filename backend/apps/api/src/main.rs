//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use analytics::{AnalyticsConfig, TokenCache, UmamiClient, analytics_router};
use anyhow::Context;
use auth::{AuthAppState, AuthConfig, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use moments::{
    InMemoryDocumentStore, MomentsConfig, S3DocumentStore, StoreBackend, moments_router,
};
use platform::config::{EnvReader, EnvSource, Environment, ProcessEnv};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const BIND_ADDR: &str = "BIND_ADDR";
const FRONTEND_ORIGINS: &str = "FRONTEND_ORIGINS";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Everything read from the environment at startup
struct AppConfig {
    environment: Environment,
    auth: AuthConfig,
    moments: MomentsConfig,
    analytics: Option<AnalyticsConfig>,
    bind_addr: SocketAddr,
    frontend_origins: Vec<String>,
}

impl AppConfig {
    /// Read every crate's configuration, then fail once with all missing keys
    fn from_env<S: EnvSource + ?Sized>(source: &S) -> anyhow::Result<Self> {
        let mut reader = EnvReader::new(source);

        let environment = reader.environment()?;
        let auth = AuthConfig::from_env(&mut reader, environment);
        let moments = MomentsConfig::from_env(&mut reader)?;
        let analytics = AnalyticsConfig::from_env(&mut reader);

        let bind_addr = reader
            .optional(BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid {BIND_ADDR}: {bind_addr}"))?;

        let frontend_origins = reader
            .optional(FRONTEND_ORIGINS)
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        reader.finish()?;

        Ok(Self {
            environment,
            auth,
            moments,
            analytics,
            bind_addr,
            frontend_origins,
        })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

/// Routes served under `/api`
async fn api_router(config: AppConfig) -> anyhow::Result<Router> {
    let auth_state = AuthAppState::new(config.auth);

    let moments = match config.moments.backend {
        StoreBackend::R2 => {
            let r2 = config
                .moments
                .r2
                .as_ref()
                .context("R2 store selected without R2 configuration")?;
            moments_router(S3DocumentStore::connect(r2).await, auth_state.clone())
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory moments store; data is lost on restart");
            moments_router(InMemoryDocumentStore::new(), auth_state.clone())
        }
    };

    let mut api = Router::new().merge(auth_router(auth_state)).merge(moments);

    match config.analytics {
        Some(analytics) => {
            let analytics = Arc::new(analytics);
            let cache = Arc::new(TokenCache::new(analytics.token_ttl));
            api = api.merge(analytics_router(UmamiClient::new(analytics), cache));
        }
        None => {
            tracing::warn!("UMAMI_* not set; /api/umami is disabled");
        }
    }

    Ok(Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "blog_api=info,auth=info,moments=info,analytics=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env(&ProcessEnv)?;
    tracing::info!(
        environment = ?config.environment,
        store = ?config.moments.backend,
        analytics = config.analytics.is_some(),
        "Configuration loaded"
    );

    let addr = config.bind_addr;
    let cors = cors_layer(&config.frontend_origins);

    // Build router
    let app = api_router(config).await?.layer(cors);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
