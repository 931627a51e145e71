use axum::{
    Router,
    routing::{get, post},
};

use http::{Method, header};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::{
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
    cors::CorsLayer,
};

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod state;
mod db;
mod crypto {
    pub mod secret;
    pub mod token;
}

mod models {
    pub mod user;
    pub mod session;
    pub mod report;
}

mod repositories {
    pub mod user;
    pub mod session;
    pub mod post;
    pub mod report;
}

mod services {
    pub mod auth;
    pub mod reports;
}

mod handlers {
    pub mod session;
    pub mod reportcontent;
}

mod pipeline {
    pub mod stage;
    pub mod report;
}

mod validation {
    pub mod params;
}

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config)?;
    tracing::info!("✅ AppState initialized");

    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(86400));

    let session_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(5)
            .burst_size(20)
            .use_headers()
            .finish()
            .unwrap(),
    );

    let session_routes = Router::new()
        .route("/session/login", get(handlers::session::login))
        .route("/session/logout", get(handlers::session::logout))
        .route_layer(tower_governor::GovernorLayer::new(
            session_governor_conf.clone(),
        ))
        .with_state(state.clone());

    let report_routes = Router::new()
        .route("/reportcontent/", post(handlers::reportcontent::report_post))
        .route("/reportcontent/types", get(handlers::reportcontent::list_types))
        .with_state(state.clone());

    let app = Router::new()
        .merge(session_routes)
        .merge(report_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true))
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
