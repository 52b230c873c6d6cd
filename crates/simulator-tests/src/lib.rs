//! Stub simulator server for integration tests.
//!
//! [`StubServer::start`] binds an axum router on `127.0.0.1:0` that serves the
//! three simulator endpoints from in-memory state. Tests point a
//! [`SimulatorClient`] at [`StubServer::base_url`] and inspect what the server
//! received afterwards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde_json::json;
use simulator_client::{Device, Interaction, Screen, SimulatorClient, Size};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// An interaction as received by the stub, with its path parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInteraction {
    /// Device id from the request path.
    pub device_id: String,
    /// Screen id from the request path.
    pub screen_id: String,
    /// Decoded request body.
    pub interaction: Interaction,
}

/// In-memory state behind the stub server.
#[derive(Debug, Default)]
pub struct StubState {
    /// Devices returned by `GET /devices`.
    pub devices: Vec<Device>,
    /// Screens returned by `GET /devices/{id}/screens`, filtered by device.
    pub screens: Vec<Screen>,
    /// Interactions accepted so far.
    pub interactions: Vec<RecordedInteraction>,
    /// When set, every endpoint answers with this status.
    pub fail_with: Option<u16>,
    /// When set, `GET /devices` answers 200 with this raw body.
    pub devices_body: Option<String>,
    /// Number of requests handled.
    pub requests: usize,
}

impl StubState {
    /// State with two devices and three screens.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            devices: vec![
                Device::with_id("dev-1", "Pixel 8", Size::new(412.0, 915.0)),
                Device::with_id("dev-2", "iPad Air", Size::new(820.0, 1180.0)),
            ],
            screens: vec![
                Screen::with_id(
                    "scr-1",
                    "dev-1",
                    "Home",
                    vec![json!({"type": "button", "label": "Start"})],
                ),
                Screen::with_id("scr-2", "dev-1", "Settings", Vec::new()),
                Screen::with_id(
                    "scr-3",
                    "dev-2",
                    "Canvas",
                    vec![json!({"type": "canvas"}), json!({"type": "toolbar"})],
                ),
            ],
            ..Self::default()
        }
    }
}

/// Shared stub state.
pub type SharedState = Arc<RwLock<StubState>>;

/// Builds the stub router, rooted at `/api/v1`.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/devices", get(list_devices))
        .route("/api/v1/devices/{device_id}/screens", get(list_screens))
        .route(
            "/api/v1/devices/{device_id}/screens/{screen_id}/interactions",
            post(create_interaction),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A running stub server. The server task is aborted on drop.
pub struct StubServer {
    addr: SocketAddr,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Starts a server on an ephemeral local port.
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound.
    pub async fn start(state: StubState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(RwLock::new(state));
        let app = create_router(Arc::clone(&state));

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(error = %err, "stub server stopped");
            }
        });
        info!(%addr, "stub simulator listening");

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Starts a server with [`StubState::seeded`].
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound.
    pub async fn seeded() -> std::io::Result<Self> {
        Self::start(StubState::seeded()).await
    }

    /// API base URL, including the `/api/v1` prefix.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Creates a client pointed at this server.
    ///
    /// # Errors
    /// Returns error if client creation fails.
    pub fn client(&self) -> Result<SimulatorClient, simulator_client::Error> {
        SimulatorClient::with_base_url(&self.base_url())
    }

    /// Interactions accepted so far, in arrival order.
    #[must_use]
    pub fn interactions(&self) -> Vec<RecordedInteraction> {
        self.state.read().interactions.clone()
    }

    /// Number of requests the server has handled.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.state.read().requests
    }

    /// Makes every endpoint answer with `status`, or restores normal behavior.
    pub fn fail_with(&self, status: Option<u16>) {
        self.state.write().fail_with = status;
    }

    /// Overrides the raw `GET /devices` body.
    pub fn set_devices_body(&self, body: impl Into<String>) {
        self.state.write().devices_body = Some(body.into());
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Counts the request and returns the injected failure, if any.
fn begin(state: &SharedState) -> Option<Response> {
    let mut guard = state.write();
    guard.requests += 1;
    guard.fail_with.map(|status| {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, "injected failure").into_response()
    })
}

async fn list_devices(State(state): State<SharedState>) -> Response {
    if let Some(resp) = begin(&state) {
        return resp;
    }
    let guard = state.read();
    match &guard.devices_body {
        Some(body) => (StatusCode::OK, body.clone()).into_response(),
        None => Json(guard.devices.clone()).into_response(),
    }
}

async fn list_screens(
    State(state): State<SharedState>,
    Path(device_id): Path<String>,
) -> Response {
    if let Some(resp) = begin(&state) {
        return resp;
    }
    let guard = state.read();
    if !guard.devices.iter().any(|d| d.id() == device_id) {
        return (
            StatusCode::NOT_FOUND,
            format!("unknown device {}", device_id),
        )
            .into_response();
    }
    let screens: Vec<Screen> = guard
        .screens
        .iter()
        .filter(|s| s.device_id == device_id)
        .cloned()
        .collect();
    Json(screens).into_response()
}

async fn create_interaction(
    State(state): State<SharedState>,
    Path((device_id, screen_id)): Path<(String, String)>,
    Json(interaction): Json<Interaction>,
) -> Response {
    if let Some(resp) = begin(&state) {
        return resp;
    }
    let mut guard = state.write();
    let known = guard
        .screens
        .iter()
        .any(|s| s.id() == screen_id && s.device_id == device_id);
    if !known {
        return (
            StatusCode::NOT_FOUND,
            format!("unknown screen {} on device {}", screen_id, device_id),
        )
            .into_response();
    }
    if interaction.screen_id != screen_id {
        return (
            StatusCode::BAD_REQUEST,
            "interaction screenId does not match path",
        )
            .into_response();
    }

    debug!(%device_id, %screen_id, action = %interaction.action, "interaction recorded");
    guard.interactions.push(RecordedInteraction {
        device_id,
        screen_id,
        interaction,
    });
    (StatusCode::CREATED, Json(json!({"accepted": true}))).into_response()
}
