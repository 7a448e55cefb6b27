//! HTTP client module
//!
//! Provides a small reqwest wrapper that joins paths onto a base URL, attaches
//! default headers and turns non-success responses into errors that carry the
//! status code and body text.

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_USER_AGENT,
};
