//! ai-dashboard: demo AI analytics dashboard
//!
//! This library provides:
//! - Mock metric, performance and usage generators behind an injectable RNG
//! - Plotly figure encoding for the dashboard charts
//! - Static pricing catalog and a no-op contact form
//! - An axum HTTP server rendering the pages with maud

pub mod charts;
pub mod config;
pub mod contact;
pub mod metrics;
pub mod pricing;
pub mod transport;

pub use config::Config;
pub use metrics::MetricsSnapshot;
