//! HTTP transport: routing, handlers, and page rendering

mod assets;
pub mod error;
pub mod http;
pub mod pages;

pub use http::{router, run_http_server, AppState};
