//! Face addressing for segmented quad meshes.
//!
//! A textured quad mesh is subdivided into a grid of rectangular faces,
//! each rendered as two triangles. UV animation targets individual faces
//! by the linear index of the first of those two triangles; the renderer
//! implicitly also owns `index + 1`.

use serde::{Deserialize, Serialize};

/// Subdivision counts of a quad mesh surface.
///
/// Both components are segment counts, not vertex counts, and are at
/// least 1 for any renderable mesh.
///
/// # Examples
///
/// ```
/// use strider_types::geom::SegmentGrid;
///
/// let grid = SegmentGrid::new(10, 10);
/// assert_eq!(grid.face_count(), 100);
///
/// // A plain quad without subdivision
/// assert_eq!(SegmentGrid::default(), SegmentGrid::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGrid {
	/// Number of horizontal segments
	pub w: u32,
	/// Number of vertical segments
	pub h: u32,
}

impl SegmentGrid {
	/// Creates a grid from horizontal and vertical segment counts.
	pub const fn new(w: u32, h: u32) -> Self {
		Self {
			w,
			h,
		}
	}

	/// Total number of rectangular faces on the grid.
	pub const fn face_count(&self) -> u32 {
		self.w * self.h
	}
}

impl Default for SegmentGrid {
	fn default() -> Self {
		Self::new(1, 1)
	}
}

/// Converts a 1-based grid coordinate to a linear face index.
///
/// The subtraction converts to a 0-based cell, and the result is doubled
/// because every rectangular face is rendered as two triangles and only
/// the first triangle's index is tracked.
///
/// # Examples
///
/// ```
/// use strider_types::geom::{SegmentGrid, face_index};
///
/// let grid = SegmentGrid::new(10, 10);
/// assert_eq!(face_index(2, 3, grid), 42);
/// assert_eq!(face_index(1, 1, grid), 0);
/// ```
pub const fn face_index(x: u32, y: u32, grid: SegmentGrid) -> u32 {
	(x - 1 + (y - 1) * grid.w) * 2
}

/// Maps two 1-based coordinate ranges to linear face indices.
///
/// Every `(x, y)` pair of the Cartesian product is visited with `x` as
/// the outer loop, so `y` varies fastest. The output is neither sorted
/// nor deduplicated; overlapping inputs yield duplicate indices and the
/// caller decides how to handle them.
pub fn face_indices(xs: &[u32], ys: &[u32], grid: SegmentGrid) -> Vec<u32> {
	let mut indices = Vec::with_capacity(xs.len() * ys.len());
	for &x in xs {
		for &y in ys {
			indices.push(face_index(x, y, grid));
		}
	}
	indices
}
