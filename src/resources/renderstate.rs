//! Renderer-wide flags shared with the host renderer.
//!
//! [`RenderState`] is the narrow surface through which the camera core talks
//! to redraw scheduling: a dirty flag, a redraw request counter and the
//! stage background colour.

use bevy_ecs::prelude::Resource;
use log::debug;

/// Redraw bookkeeping and background colour.
#[derive(Resource, Debug, Clone)]
pub struct RenderState {
    /// Something visible changed since the last frame was drawn.
    pub dirty: bool,
    /// Number of redraws requested so far.
    pub redraw_requests: u64,
    /// Background colour as RGB bytes.
    pub background_color: [u8; 3],
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            dirty: false,
            redraw_requests: 0,
            background_color: [255, 255, 255],
        }
    }
}

impl RenderState {
    /// Ask the host to draw a new frame.
    pub fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        debug!("Redraw requested ({} total)", self.redraw_requests);
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Set the background from a `#rrggbb` string. Malformed input is ignored.
    pub fn set_background_hex(&mut self, hex: &str) -> bool {
        match parse_hex_color(hex) {
            Some(rgb) => {
                self.background_color = rgb;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Background colour as lowercase `#rrggbb`.
    pub fn background_hex(&self) -> String {
        let [r, g, b] = self.background_color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
