//! Frame descriptors pairing a texture region with an optional duration.

use serde::{Deserialize, Serialize};

use super::uv::UVCoords;

/// A single displayable animation frame.
///
/// The duration is optional: a frame without an explicit duration is
/// *not* defaulted to a numeric value here. Absence survives squashing
/// untouched and the playback layer applies its own default timing, so
/// a content document only has to spell out the exceptions.
///
/// # Examples
///
/// ```
/// use strider_types::anim::{FrameDescriptor, UVCoords};
/// use strider_types::math::Vec2;
///
/// let uv = UVCoords::from_pixels(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(16.0, 16.0),
///     Vec2::new(64.0, 64.0),
/// );
///
/// let timed = FrameDescriptor::new(uv, Some(0.5));
/// assert_eq!(timed.duration, Some(0.5));
///
/// let untimed = FrameDescriptor::untimed(uv);
/// assert!(untimed.duration.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
	/// Texture region shown while the frame is active
	pub uv: UVCoords,
	/// Display time in seconds, or `None` for the engine default
	pub duration: Option<f32>,
}

impl FrameDescriptor {
	/// Creates a frame descriptor from a UV region and optional duration.
	pub const fn new(uv: UVCoords, duration: Option<f32>) -> Self {
		Self {
			uv,
			duration,
		}
	}

	/// Creates a frame descriptor without an explicit duration.
	pub const fn untimed(uv: UVCoords) -> Self {
		Self::new(uv, None)
	}

	/// Display time of this frame, falling back to the given default.
	pub fn duration_or(&self, default: f32) -> f32 {
		self.duration.unwrap_or(default)
	}
}
