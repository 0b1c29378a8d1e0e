//! Minimal 2D vector math used throughout the pipeline.

use serde::{Deserialize, Serialize};

/// A 2D vector in pixel or texture space.
///
/// Used for frame offsets, frame sizes and texture sizes. The pipeline
/// deals exclusively in axis-aligned rectangles, so a plain component
/// pair is all that is needed.
///
/// # Examples
///
/// ```
/// use strider_types::math::Vec2;
///
/// let size = Vec2::new(24.0, 22.0);
/// assert_eq!(size.x, 24.0);
/// assert_eq!(size.y, 22.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
	/// Horizontal component
	pub x: f32,
	/// Vertical component
	pub y: f32,
}

impl Vec2 {
	/// Creates a new vector from its components.
	pub const fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl std::fmt::Display for Vec2 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}
