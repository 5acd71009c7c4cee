//! Local HTTP stand-in for a device, used by command tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde_json::json;

use super::session::{open_client, Client};

type Requests = Arc<Mutex<Vec<String>>>;

/// How `/api/status` answers.
pub(crate) enum StatusReply {
    /// Timer not running.
    Idle,
    /// Never answers.
    Stall,
}

pub(crate) struct MockDevice {
    pub address: String,
    requests: Requests,
}

impl MockDevice {
    /// Serve on an ephemeral port; `/` answers with `identity`.
    pub async fn start(identity: &'static str, status: StatusReply) -> Self {
        let requests = Requests::default();

        let status_route: MethodRouter<Requests> = match status {
            StatusReply::Idle => get(|State(requests): State<Requests>| async move {
                push(&requests, "GET /api/status");
                Json(json!({
                    "current_time": {"year": 2024, "month": 5, "date": 1, "hour": 9, "minute": 30, "second": 0},
                    "time_format_24h": true,
                    "alarm": {"hour": 7, "minute": 0, "enabled": true},
                    "timer": {"hours": 0, "minutes": 0, "seconds": 0, "running": false},
                    "reminder": {"title": "", "description": "", "datetime": ""}
                }))
            }),
            StatusReply::Stall => get(|State(requests): State<Requests>| async move {
                push(&requests, "GET /api/status");
                std::future::pending::<()>().await
            }),
        };

        let app = Router::new()
            .route(
                "/",
                get(move |State(requests): State<Requests>| async move {
                    push(&requests, "GET /");
                    identity
                }),
            )
            .route("/api/status", status_route)
            .fallback(record)
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address: addr.to_string(),
            requests,
        }
    }

    /// Requests seen so far as `METHOD /path`, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn push(requests: &Requests, line: &str) {
    requests.lock().unwrap().push(line.to_string());
}

/// Writes are acknowledged, anything else is a 404.
async fn record(State(requests): State<Requests>, request: Request) -> Response {
    let line = format!("{} {}", request.method(), request.uri().path());
    push(&requests, &line);

    if *request.method() == Method::POST {
        Json(json!({"status": "success"})).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// An address nothing is listening on.
pub(crate) fn unreachable_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

/// A client in a fresh data dir with `address` saved.
pub(crate) async fn client_for(address: &str) -> (Client, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let client = open_client(Some(tmp.path().to_path_buf()), Some(2000))
        .await
        .unwrap();
    client.set_address(address).await.unwrap();
    (client, tmp)
}
