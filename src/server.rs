//! Static file server
//!
//! Serves the app shell and assets from the public directory over plain
//! HTTP/1. GET only; path resolution rejects traversal before touching
//! the filesystem.

use crate::error::AppError;
use crate::store::StateStore;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{header, Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Static file server state.
pub struct StaticServer {
    public_dir: PathBuf,
    bind_addr: SocketAddr,
    store: Option<StateStore>,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    state_keys: usize,
}

impl StaticServer {
    pub fn new(public_dir: PathBuf, bind_addr: SocketAddr) -> Self {
        Self {
            public_dir,
            bind_addr,
            store: None,
        }
    }

    /// Attach the state store so /health can report key counts.
    pub fn with_store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Accept connections until the process exits.
    pub async fn run(self: Arc<Self>) -> Result<(), AppError> {
        let listener = TcpListener::bind(self.bind_addr).await?;
        info!(addr = %self.bind_addr, dir = %self.public_dir.display(), "Static server listening");

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let server = self.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let server = server.clone();
                    async move { server.handle_request(req).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    warn!(addr = %remote_addr, error = %err, "Connection error");
                }
            });
        }
    }

    async fn handle_request(
        &self,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let path = req.uri().path().to_string();
        debug!(method = %req.method(), path = %path, "Incoming request");

        if req.method() != Method::GET {
            return Ok(plain(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"));
        }

        if path == "/health" {
            return Ok(self.handle_health());
        }

        let resolved = match resolve_path(&self.public_dir, &path) {
            Some(resolved) => resolved,
            None => {
                warn!(path = %path, "Rejected path");
                return Ok(plain(StatusCode::FORBIDDEN, "Forbidden"));
            }
        };

        match tokio::fs::read(&resolved).await {
            Ok(contents) => Ok(Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type(&resolved))
                .body(Full::new(Bytes::from(contents)))
                .unwrap()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(plain(StatusCode::NOT_FOUND, "Not found"))
            }
            Err(e) => {
                warn!(path = %resolved.display(), error = %e, "Read failed");
                Ok(plain(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))
            }
        }
    }

    fn handle_health(&self) -> Response<Full<Bytes>> {
        let body = HealthBody {
            status: "ok",
            state_keys: self.store.as_ref().map(StateStore::key_count).unwrap_or(0),
        };
        let encoded = serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec());
        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(encoded)))
            .unwrap()
    }
}

fn plain(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Map a URL path to a file under `root`, or `None` for unsafe paths.
///
/// "/" serves index.html. Any parent-directory component or backslash
/// rejects the whole path.
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    let trimmed = url_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    if relative.contains('\\') {
        return None;
    }
    let candidate = Path::new(relative);
    for component in candidate.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }

    Some(root.join(candidate))
}

/// Content type by extension, defaulting to a binary stream.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
