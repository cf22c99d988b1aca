//! HTTP server for the dashboard pages and metrics API

use super::error::AppError;
use super::pages;
use crate::charts::{encode_bar_chart, LineChart};
use crate::config::Config;
use crate::contact::{ContactForm, ContactSubmission};
use crate::metrics::{
    generate_metrics, generate_performance_series, generate_usage_series,
    performance_columns as perf, usage_columns as usage, MetricsSnapshot, ThreadRandom,
};
use crate::pricing;
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Form, Json, Router,
};
use maud::Markup;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
        .route("/pricing", get(pricing_page))
        .route("/contact", get(contact_form).post(submit_contact))
        .route("/api/real-time-metrics", get(real_time_metrics))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C
pub async fn run_http_server(config: Config) -> Result<()> {
    if config.uses_placeholder_secret() {
        tracing::warn!("secret_key is still the placeholder value; set [app].secret_key in the config");
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    let state = Arc::new(AppState::new(config));
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn index(State(state): State<Arc<AppState>>) -> Markup {
    pages::index(&state.config.app)
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Markup, AppError> {
    let mut rng = ThreadRandom::new();
    let metrics = generate_metrics(&mut rng);
    let performance = generate_performance_series(&mut rng, &chrono::Local::now());
    let usage_series = generate_usage_series(&mut rng);

    let performance_chart = LineChart::new(
        perf::DATE,
        [perf::ACCURACY, perf::RESPONSE_TIME],
        "AI模型性能趋势",
    )
    .with_labels("数值", "指标")
    .encode(performance.as_slice())?;

    let usage_chart = encode_bar_chart(
        usage_series.as_slice(),
        usage::FEATURE,
        usage::COUNT,
        "功能使用情况",
        usage::COUNT,
    )?;

    tracing::debug!(
        accuracy = metrics.model_accuracy,
        response_time = metrics.response_time,
        "Rendered dashboard snapshot"
    );

    Ok(pages::dashboard(
        &state.config.app,
        &metrics,
        &performance_chart,
        &usage_chart,
    ))
}

async fn pricing_page(State(state): State<Arc<AppState>>) -> Markup {
    pages::pricing(&state.config.app, pricing::plans())
}

async fn contact_form(State(state): State<Arc<AppState>>) -> Markup {
    pages::contact(&state.config.app, ContactForm::Unsubmitted)
}

/// Accept a contact submission
///
/// A missing or unparsable body counts as a submission with no fields.
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    form: Option<Form<ContactSubmission>>,
) -> Markup {
    let submission = form.map(|Form(s)| s).unwrap_or_default();
    let form = ContactForm::Unsubmitted.submit(&submission);
    pages::contact(&state.config.app, form)
}

async fn real_time_metrics() -> Json<MetricsSnapshot> {
    Json(generate_metrics(&mut ThreadRandom::new()))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, pages::not_found())
}
