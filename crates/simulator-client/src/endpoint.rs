//! Mapping from logical simulator operations to HTTP method and path.

use crate::error::Error;
use crate::transport::HttpMethod;


/// A logical simulator API operation and its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// All known devices.
    Devices,
    /// Screens belonging to one device.
    Screens {
        /// Owning device id.
        device_id: &'a str,
    },
    /// Interaction sink for one screen of one device.
    Interactions {
        /// Owning device id.
        device_id: &'a str,
        /// Target screen id.
        screen_id: &'a str,
    },
}

impl Endpoint<'_> {
    /// Path relative to the API base URL.
    ///
    /// Ids are interpolated verbatim.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Devices => "/devices".to_string(),
            Self::Screens { device_id } => format!("/devices/{}/screens", device_id),
            Self::Interactions {
                device_id,
                screen_id,
            } => format!("/devices/{}/screens/{}/interactions", device_id, screen_id),
        }
    }

    /// HTTP method used for this endpoint.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Devices | Self::Screens { .. } => HttpMethod::Get,
            Self::Interactions { .. } => HttpMethod::Post,
        }
    }

    /// Checks that every path parameter is a usable path segment.
    ///
    /// # Errors
    /// Returns `Error::InvalidRequest` if an id is empty, is `.` or `..`, or
    /// contains one of `/`, `\\`, `?`, `#` or `%`.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Devices => Ok(()),
            Self::Screens { device_id } => check_segment("device id", device_id),
            Self::Interactions {
                device_id,
                screen_id,
            } => {
                check_segment("device id", device_id)?;
                check_segment("screen id", screen_id)
            }
        }
    }
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

fn check_segment(label: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!("{} must not be empty", label)));
    }
    if value == "." || value == ".." {
        return Err(Error::InvalidRequest(format!(
            "{} {:?} is a relative path segment",
            label, value
        )));
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '?' | '#' | '%'))
    {
        return Err(Error::InvalidRequest(format!(
            "{} {:?} contains reserved character {:?}",
            label, value, c
        )));
    }
    Ok(())
}
