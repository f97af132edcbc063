//! Local HTTP server handing out archives for download tests

use std::net::SocketAddr;
use std::sync::mpsc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{Response, StatusCode};
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;

/// Serves one archive at `/redis.tar.gz` and a 404 HTML page at
/// `/missing.tar.gz`. The server lives until the test process exits.
pub struct ArchiveServer {
    addr: SocketAddr,
}

impl ArchiveServer {
    pub fn start(archive: Vec<u8>) -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("tokio runtime");

            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
                tx.send(listener.local_addr().expect("local addr"))
                    .expect("report address");

                let router = Router::new()
                    .route(
                        "/redis.tar.gz",
                        get(move || {
                            let body = archive.clone();
                            async move {
                                Response::builder()
                                    .status(StatusCode::OK)
                                    .header(CONTENT_TYPE, "application/gzip")
                                    .header(CONTENT_LENGTH, body.len())
                                    .body(Body::from(body))
                                    .expect("response")
                            }
                        }),
                    )
                    .route(
                        "/missing.tar.gz",
                        get(|| async {
                            (
                                StatusCode::NOT_FOUND,
                                Html("<html><body><h1>404 Not Found</h1></body></html>"),
                            )
                        }),
                    );

                let _ = axum::serve(listener, router).await;
            });
        });

        let addr = rx.recv().expect("server address");
        Self { addr }
    }

    /// URL of the served archive
    pub fn archive_url(&self) -> String {
        format!("http://{}/redis.tar.gz", self.addr)
    }

    /// URL answering 404 with an HTML page
    pub fn missing_url(&self) -> String {
        format!("http://{}/missing.tar.gz", self.addr)
    }
}
