//! Schedule Lambda - Stores and reads a school's hours.
//!
//! Endpoints:
//! - GET /schedule/{sid} - Read the schedule for a school
//! - POST /schedule/{sid} - Write the schedule for a school (or echo the public IP
//!   when `ROUTER_VARIANT=ip-echo`)

mod handlers;
mod router;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shared::{CheckIpClient, Config, DynamoStore};

use crate::router::Router;

/// Application state, built once per cold start and shared by warm invocations.
struct AppState {
    router: Router,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        info!(
            "Starting schedule handler: table={}, variant={:?}",
            config.table_name, config.variant
        );

        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let store = DynamoStore::new(aws_sdk_dynamodb::Client::new(&sdk_config), &config.table_name);
        let ip_lookup = CheckIpClient::new(reqwest::Client::new(), &config.ip_lookup_url);

        Ok(Self {
            router: Router::new(
                Arc::new(store),
                Arc::new(ip_lookup),
                config.variant,
                config.table_name,
            ),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    info!("Received request: method={}, path={}", event.method(), event.uri().path());

    match state.router.route(&event).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            if e.status_code() >= 500 {
                error!("Request failed: {}", e);
            } else {
                warn!("Request rejected: {}", e);
            }
            shared::http::response_from_error(&e)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
