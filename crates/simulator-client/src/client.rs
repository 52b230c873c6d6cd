//! HTTP client for the simulator API.

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;


/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://craftsimulator.com/api/v1";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the version prefix.
    pub base_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the Craft simulator API.
#[derive(Debug, Clone)]
pub struct SimulatorClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl SimulatorClient<ReqwestTransport> {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is unusable or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(&config.base_url, transport)
    }

    /// Creates a new client with default configuration and the given base URL.
    ///
    /// # Errors
    /// Returns error if the base URL is unusable or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }
}

impl<T: Transport> SimulatorClient<T> {
    /// Creates a client over an explicit transport.
    ///
    /// # Errors
    /// Returns error if the base URL does not parse, is not http(s), or carries
    /// a query or fragment.
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, Error> {
        let base_url = validate_base_url(base_url)?;
        Ok(Self {
            transport,
            base_url,
        })
    }

    /// Base URL requests are resolved against, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport this client sends requests through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves an endpoint to an absolute URL.
    ///
    /// # Errors
    /// Returns error if an endpoint parameter is invalid or the joined URL
    /// does not parse.
    pub fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> Result<Url, Error> {
        endpoint.validate()?;
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint.path()))?)
    }

    // ========================================================================
    // Devices
    // ========================================================================

    /// Lists all devices.
    ///
    /// # Errors
    /// Returns error if the request fails or the body is not a device list.
    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        self.fetch_list("list_devices", &Endpoint::Devices).await
    }

    // ========================================================================
    // Screens
    // ========================================================================

    /// Lists the screens of a device. Only the device id is used.
    ///
    /// # Errors
    /// Returns error if the request fails or the body is not a screen list.
    pub async fn list_screens(&self, device: &Device) -> Result<Vec<Screen>, Error> {
        self.list_screens_for(device.id()).await
    }

    /// Lists the screens of the device with the given id.
    ///
    /// # Errors
    /// Returns error if the id is invalid, the request fails or the body is
    /// not a screen list.
    pub async fn list_screens_for(&self, device_id: &str) -> Result<Vec<Screen>, Error> {
        self.fetch_list("list_screens", &Endpoint::Screens { device_id })
            .await
    }

    // ========================================================================
    // Interactions
    // ========================================================================

    /// Sends an interaction for a screen of a device.
    ///
    /// The response body is ignored.
    ///
    /// # Errors
    /// Returns error if the request fails or the API answers with a non-2xx status.
    pub async fn send_interaction(
        &self,
        device: &Device,
        screen: &Screen,
        interaction: &Interaction,
    ) -> Result<(), Error> {
        self.post_interaction(device.id(), screen.id(), interaction)
            .await
    }

    /// Sends an interaction addressed by device and screen id.
    ///
    /// # Errors
    /// Returns error if an id is invalid, the request fails or the API answers
    /// with a non-2xx status.
    pub async fn post_interaction(
        &self,
        device_id: &str,
        screen_id: &str,
        interaction: &Interaction,
    ) -> Result<(), Error> {
        const OP: &str = "send_interaction";
        let endpoint = Endpoint::Interactions {
            device_id,
            screen_id,
        };

        let result = async {
            let url = self.endpoint_url(&endpoint)?;
            let body = serde_json::to_vec(interaction).map_err(Error::Encode)?;
            let resp = self.send(HttpRequest::post_json(url, body)).await?;
            check_status(&resp)
        }
        .await;

        report(OP, &endpoint, result)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn fetch_list<R: DeserializeOwned>(
        &self,
        op: &'static str,
        endpoint: &Endpoint<'_>,
    ) -> Result<Vec<R>, Error> {
        let result = async {
            let url = self.endpoint_url(endpoint)?;
            let resp = self.send(HttpRequest::get(url)).await?;
            let records: Vec<R> = decode(&resp)?;
            debug!(op, count = records.len(), "decoded response");
            Ok::<_, Error>(records)
        }
        .await;

        report(op, endpoint, result)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.execute(request).await
    }
}

/// Logs a failed operation once and passes the result through.
fn report<V>(op: &str, endpoint: &Endpoint<'_>, result: Result<V, Error>) -> Result<V, Error> {
    if let Err(err) = &result {
        error!(op, endpoint = %endpoint, error = %err, "simulator request failed");
    }
    result
}

fn check_status(resp: &HttpResponse) -> Result<(), Error> {
    if resp.is_success() {
        Ok(())
    } else if resp.status == 404 {
        Err(Error::NotFound(resp.text()))
    } else {
        Err(Error::Api {
            status: resp.status,
            message: resp.text(),
        })
    }
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, Error> {
    check_status(resp)?;
    serde_json::from_slice(&resp.body).map_err(Error::Decode)
}

fn validate_base_url(raw: &str) -> Result<String, Error> {
    let trimmed = raw.trim_end_matches('/');
    let url = Url::parse(trimmed)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(format!(
            "unsupported scheme {:?} in {}",
            url.scheme(),
            raw
        )));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::InvalidBaseUrl(format!("{} has no host", raw)));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::InvalidBaseUrl(format!(
            "{} must not carry a query or fragment",
            raw
        )));
    }

    Ok(trimmed.to_string())
}
