//! Command and report enums for driving cameras from scripts.
//!
//! Commands mutate the world; reports read a single value. Both deserialize
//! from JSON objects tagged by `op`, e.g.
//! `{"op": "set_zoom", "camera": "top", "percent": 200}`.
//! Target fields take selector strings (see [`crate::systems::targets`]).

use serde::{Deserialize, Serialize};

/// Camera commands a script can issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CameraCmd {
    /// Create a camera at identity
    AddCamera { camera: String },
    /// Remove a camera; its drawables fall back to "default"
    RemoveCamera { camera: String },
    /// Bind a target to a camera
    Bind { target: String, camera: String },
    /// Bind a target back to "default"
    Unbind { target: String, camera: String },
    SetPosition { camera: String, x: f64, y: f64 },
    /// Move along the camera's facing direction
    Move { camera: String, steps: f64 },
    SetX { camera: String, x: f64 },
    ChangeX { camera: String, dx: f64 },
    SetY { camera: String, y: f64 },
    ChangeY { camera: String, dy: f64 },
    /// Center the camera on a target
    GoTo { camera: String, target: String },
    SetDirection { camera: String, direction: f64 },
    SetDirectionLegacy { camera: String, direction: f64 },
    TurnRight { camera: String, degrees: f64 },
    TurnLeft { camera: String, degrees: f64 },
    /// Face the direction of a target
    PointTowards { camera: String, target: String },
    /// Set the zoom in percent
    SetZoom { camera: String, percent: f64 },
    ChangeZoom { camera: String, percent: f64 },
    /// Set the stage background from `#rrggbb`
    SetBackgroundColor { color: String },
}

/// Values a script can read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CameraReport {
    X { camera: String },
    Y { camera: String },
    Direction { camera: String },
    DirectionLegacy { camera: String },
    Zoom { camera: String },
    MouseX { camera: String },
    MouseY { camera: String },
    RenderedX { target: String },
    RenderedY { target: String },
    /// Camera a target is bound to
    CameraOf { target: String },
    BackgroundColor,
}

/// Result of evaluating a [`CameraReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for ReportValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportValue::Number(n) => write!(f, "{}", n),
            ReportValue::Text(s) => write!(f, "{}", s),
        }
    }
}
