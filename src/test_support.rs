//! Local stand-in for the search endpoint.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

pub struct StubReply {
    status: u16,
    body: String,
}

impl StubReply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
        }
    }
}

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct StubState {
    reply: Arc<StubReply>,
    seen: Seen,
}

pub struct Stub {
    addr: SocketAddr,
    seen: Seen,
}

impl Stub {
    pub fn url(&self) -> String {
        format!("http://{}/youtube/v3/search", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.seen.lock().unwrap().last().cloned()
    }
}

async fn search(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.seen.lock().unwrap().push(params);
    (
        StatusCode::from_u16(state.reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
}

pub async fn spawn_stub(reply: StubReply) -> Stub {
    let seen = Seen::default();
    let app = Router::new()
        .route("/youtube/v3/search", get(search))
        .with_state(StubState {
            reply: Arc::new(reply),
            seen: seen.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub { addr, seen }
}

/// A URL on a port nobody is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/youtube/v3/search", addr)
}
