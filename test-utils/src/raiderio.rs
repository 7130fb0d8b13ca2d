//! Local stand-in for the Raider.IO API.
//!
//! Serves `/connected-realms` and `/{version}/characters/profile` from an axum
//! router bound to an ephemeral port. Responses are configurable per endpoint and
//! every request's query parameters are recorded so tests can assert on hit counts
//! and on exactly what the client sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::raiderio::MockRaiderIo;
//!
//! let server = MockRaiderIo::start().await?;
//! server.set_character_profile(404, r#"{"error":"Not Found"}"#);
//!
//! let config = RaiderIoConfig {
//!     api_url: server.base_url(),
//!     ..RaiderIoConfig::default()
//! };
//! ```

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, sync::oneshot};

use crate::{error::TestError, fixture};

/// Canned reply for one endpoint.
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    /// Held before answering, for timeout tests
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }
}

type RecordedQuery = HashMap<String, String>;

struct MockState {
    realms: Mutex<MockResponse>,
    profile: Mutex<MockResponse>,
    realm_requests: Mutex<Vec<RecordedQuery>>,
    profile_requests: Mutex<Vec<RecordedQuery>>,
}

/// Running mock server. Shuts down when dropped.
pub struct MockRaiderIo {
    base_url: String,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockRaiderIo {
    /// Starts a server answering with the default fixtures.
    ///
    /// The connected-realms endpoint returns
    /// [`connected_realms_json`](fixture::raiderio::connected_realms_json) and the
    /// profile endpoint returns
    /// [`character_profile_json`](fixture::raiderio::character_profile_json), both
    /// with status 200.
    ///
    /// # Returns
    /// - `Ok(MockRaiderIo)` - Server listening on `127.0.0.1` at an ephemeral port
    /// - `Err(TestError::MockServer)` - Failed to bind the listener
    pub async fn start() -> Result<Self, TestError> {
        let state = Arc::new(MockState {
            realms: Mutex::new(MockResponse::ok(
                fixture::raiderio::connected_realms_json("eu").to_string(),
            )),
            profile: Mutex::new(MockResponse::ok(
                fixture::raiderio::character_profile_json().to_string(),
            )),
            realm_requests: Mutex::new(Vec::new()),
            profile_requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/connected-realms", get(connected_realms))
            .route("/{version}/characters/profile", get(character_profile))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown, signal) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
            shutdown: Some(shutdown),
        })
    }

    /// Base URL to use as the client's API URL.
    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn set_connected_realms(&self, status: u16, body: impl Into<String>) {
        *lock(&self.state.realms) = MockResponse {
            status,
            body: body.into(),
            delay: None,
        };
    }

    pub fn set_character_profile(&self, status: u16, body: impl Into<String>) {
        *lock(&self.state.profile) = MockResponse {
            status,
            body: body.into(),
            delay: None,
        };
    }

    /// Delays every profile response by `delay`.
    pub fn set_character_profile_delay(&self, delay: Duration) {
        lock(&self.state.profile).delay = Some(delay);
    }

    /// Delays every connected-realms response by `delay`.
    pub fn set_connected_realms_delay(&self, delay: Duration) {
        lock(&self.state.realms).delay = Some(delay);
    }

    pub fn realm_request_count(&self) -> usize {
        lock(&self.state.realm_requests).len()
    }

    pub fn profile_request_count(&self) -> usize {
        lock(&self.state.profile_requests).len()
    }

    /// Query parameters of every connected-realms request, oldest first.
    pub fn realm_requests(&self) -> Vec<RecordedQuery> {
        lock(&self.state.realm_requests).clone()
    }

    /// Query parameters of every profile request, oldest first.
    pub fn profile_requests(&self) -> Vec<RecordedQuery> {
        lock(&self.state.profile_requests).clone()
    }
}

impl Drop for MockRaiderIo {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn connected_realms(
    State(state): State<Arc<MockState>>,
    Query(params): Query<RecordedQuery>,
) -> impl IntoResponse {
    lock(&state.realm_requests).push(params);
    let response = lock(&state.realms).clone();
    respond(response).await
}

async fn character_profile(
    State(state): State<Arc<MockState>>,
    Query(params): Query<RecordedQuery>,
) -> impl IntoResponse {
    lock(&state.profile_requests).push(params);
    let response = lock(&state.profile).clone();
    respond(response).await
}

async fn respond(response: MockResponse) -> impl IntoResponse {
    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], response.body)
}
