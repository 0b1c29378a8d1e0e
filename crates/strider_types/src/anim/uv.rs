//! Normalized UV rectangles for texture-space frame regions.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// A rectangular texture region in normalized UV space.
///
/// Frame regions are authored in image pixels with the origin at the
/// top-left, while the texture V axis has its origin at the bottom-left.
/// [`UVCoords::from_pixels`] is the single place where that vertical flip
/// happens; getting it wrong flips every sprite upside down, so the
/// conversion is isolated here and tested with literal values.
///
/// `v0` is the *top* edge of the region and `v1` the *bottom* edge, which
/// means `v0 >= v1` for any non-degenerate region.
///
/// # Examples
///
/// ```
/// use strider_types::anim::UVCoords;
/// use strider_types::math::Vec2;
///
/// let uv = UVCoords::from_pixels(
///     Vec2::new(32.0, 16.0),
///     Vec2::new(32.0, 32.0),
///     Vec2::new(128.0, 128.0),
/// );
/// assert_eq!(uv.u0, 0.25);
/// assert_eq!(uv.v0, 0.875);
/// assert_eq!(uv.u1, 0.5);
/// assert_eq!(uv.v1, 0.625);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UVCoords {
	/// Left edge
	pub u0: f32,
	/// Top edge (larger V value)
	pub v0: f32,
	/// Right edge
	pub u1: f32,
	/// Bottom edge (smaller V value)
	pub v1: f32,
}

impl UVCoords {
	/// Builds a UV rectangle from a pixel-space offset and size,
	/// normalized against the texture size.
	///
	/// The image Y axis grows downward from the top-left, the texture V
	/// axis grows upward from the bottom-left; V components are therefore
	/// inverted (`1 - y / texture.y`).
	pub fn from_pixels(offset: Vec2, size: Vec2, texture_size: Vec2) -> Self {
		Self {
			u0: offset.x / texture_size.x,
			v0: 1.0 - offset.y / texture_size.y,
			u1: (offset.x + size.x) / texture_size.x,
			v1: 1.0 - (offset.y + size.y) / texture_size.y,
		}
	}

	/// Corner coordinates of the two triangles making up a rectangular
	/// mesh face, in the order the renderer paints them.
	///
	/// The first triangle covers the top-left half of the face, the
	/// second the bottom-right half.
	pub fn triangles(&self) -> [[Vec2; 3]; 2] {
		let tl = Vec2::new(self.u0, self.v0);
		let bl = Vec2::new(self.u0, self.v1);
		let tr = Vec2::new(self.u1, self.v0);
		let br = Vec2::new(self.u1, self.v1);
		[[tl, bl, tr], [bl, br, tr]]
	}
}
