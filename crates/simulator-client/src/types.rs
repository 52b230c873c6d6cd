//! Records exchanged with the simulator API.
//!
//! Devices and screens carry an opaque id. The wire id is decoded as-is;
//! when a payload omits it, a deterministic UUID v5 is derived from the
//! record's identifying fields so repeated decodes agree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Well-known interaction action labels.
pub mod actions {
    /// Single tap.
    pub const TAP: &str = "tap";
    /// Two taps in quick succession.
    pub const DOUBLE_TAP: &str = "double_tap";
    /// Press and hold.
    pub const LONG_PRESS: &str = "long_press";
    /// Drag gesture.
    pub const SWIPE: &str = "swipe";
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn derived_id(key: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes()).to_string()
}

fn wire_id_or(id: Option<String>, key: impl FnOnce() -> String) -> String {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => derived_id(&key()),
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A position on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Device
// ============================================================================

/// A simulated hardware profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DeviceWire", rename_all = "camelCase")]
pub struct Device {
    id: String,
    /// Display name.
    pub name: String,
    /// Screen dimensions.
    pub screen_size: Size,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceWire {
    #[serde(default)]
    id: Option<String>,
    name: String,
    screen_size: Size,
}

impl From<DeviceWire> for Device {
    fn from(wire: DeviceWire) -> Self {
        let DeviceWire {
            id,
            name,
            screen_size,
        } = wire;
        let id = wire_id_or(id, || format!("device:{}:{}", name, screen_size));
        Self {
            id,
            name,
            screen_size,
        }
    }
}

impl Device {
    /// Creates a device with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, screen_size: Size) -> Self {
        Self {
            id: fresh_id(),
            name: name.into(),
            screen_size,
        }
    }

    /// Creates a device with a known id.
    #[must_use]
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, screen_size: Size) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            screen_size,
        }
    }

    /// Device identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Screen
// ============================================================================

/// A named UI layout belonging to a device.
///
/// `layout` holds view descriptors that the client passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScreenWire", rename_all = "camelCase")]
pub struct Screen {
    id: String,
    /// Id of the owning device.
    pub device_id: String,
    /// Display name.
    pub name: String,
    /// Opaque view descriptors, in order.
    pub layout: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScreenWire {
    #[serde(default)]
    id: Option<String>,
    device_id: String,
    name: String,
    #[serde(default)]
    layout: Vec<serde_json::Value>,
}

impl From<ScreenWire> for Screen {
    fn from(wire: ScreenWire) -> Self {
        let ScreenWire {
            id,
            device_id,
            name,
            layout,
        } = wire;
        let id = wire_id_or(id, || format!("screen:{}:{}", device_id, name));
        Self {
            id,
            device_id,
            name,
            layout,
        }
    }
}

impl Screen {
    /// Creates a screen with a freshly generated id.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        name: impl Into<String>,
        layout: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            id: fresh_id(),
            device_id: device_id.into(),
            name: name.into(),
            layout,
        }
    }

    /// Creates a screen with a known id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        device_id: impl Into<String>,
        name: impl Into<String>,
        layout: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            device_id: device_id.into(),
            name: name.into(),
            layout,
        }
    }

    /// Screen identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Interaction
// ============================================================================

/// A timestamped user action targeted at a screen.
///
/// The timestamp is encoded as an RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// Id of the target screen.
    pub screen_id: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// Free-text action label, see [`actions`].
    pub action: String,
    /// Where on the screen the action happened.
    pub coordinates: Point,
}

impl Interaction {
    /// Creates an interaction stamped with the current time.
    #[must_use]
    pub fn new(
        screen_id: impl Into<String>,
        action: impl Into<String>,
        coordinates: Point,
    ) -> Self {
        Self::at(screen_id, Utc::now(), action, coordinates)
    }

    /// Creates an interaction with an explicit timestamp.
    #[must_use]
    pub fn at(
        screen_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        action: impl Into<String>,
        coordinates: Point,
    ) -> Self {
        Self {
            screen_id: screen_id.into(),
            timestamp,
            action: action.into(),
            coordinates,
        }
    }
}
