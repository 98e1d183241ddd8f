//! Artifact serving module
//!
//! Every request, whatever its method or path, gets the artifact's current
//! bytes. Nothing is cached: the file is opened, read and closed per request,
//! so a rebuild shows up on the very next fetch.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.access_log();
    let entry = access_log.then(|| AccessLogEntry::from_request(&req, peer_addr));

    let (response, body_bytes) = match load_artifact(state.artifact_path()).await {
        Ok(data) => {
            let len = data.len();
            (http::build_artifact_response(data), len)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read artifact '{}': {e}",
                state.artifact_path()
            ));
            (http::build_500_response(), 0)
        }
    };

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Read the artifact from disk in full
pub async fn load_artifact(path: impl AsRef<Path>) -> std::io::Result<Bytes> {
    fs::read(path).await.map(Bytes::from)
}
