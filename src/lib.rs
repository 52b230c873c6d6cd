//! # Craft Simulator
//!
//! Command-line front end for the Craft mobile device simulator API. The
//! typed HTTP client lives in the `simulator-client` crate; this crate adds
//! TOML configuration, logging setup and the `craft-simulator` binary.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/devices` | List devices |
//! | GET | `/api/v1/devices/{device}/screens` | List a device's screens |
//! | POST | `/api/v1/devices/{device}/screens/{screen}/interactions` | Send an interaction |
//!
//! ## Example Usage
//!
//! ```bash
//! craft-simulator devices
//! craft-simulator screens dev-1
//! craft-simulator interact dev-1 scr-1 --action tap --x 10 --y 20
//!
//! # Against a local simulator, with a config file and debug logs
//! RUST_LOG=debug craft-simulator --config simulator.toml \
//!     --base-url http://localhost:3000/api/v1 devices
//! ```
//!
//! ## Configuration
//!
//! ```toml
//! [client]
//! base_url = "https://craftsimulator.com/api/v1"
//! timeout_ms = 5000
//!
//! [logging]
//! filter = "info"
//! ```

pub mod cli;
pub mod config;
pub mod logging;
