//! HTTP client library for the Craft mobile device simulator API.
//!
//! This crate provides a typed async client for the three simulator
//! endpoints: listing devices, listing a device's screens and posting a user
//! interaction to a screen. The HTTP layer sits behind the [`Transport`]
//! trait so tests can substitute a fake.
//!
//! # Example
//!
//! ```no_run
//! use simulator_client::{Interaction, Point, SimulatorClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), simulator_client::Error> {
//!     let client = SimulatorClient::with_base_url("https://craftsimulator.com/api/v1")?;
//!
//!     let devices = client.list_devices().await?;
//!     if let Some(device) = devices.first() {
//!         let screens = client.list_screens(device).await?;
//!         if let Some(screen) = screens.first() {
//!             let tap = Interaction::new(screen.id(), "tap", Point::new(10.0, 20.0));
//!             client.send_interaction(device, screen, &tap).await?;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod endpoint;
mod error;
mod transport;
mod types;

pub use client::{ClientConfig, DEFAULT_BASE_URL, SimulatorClient};
pub use endpoint::Endpoint;
pub use error::Error;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::*;
