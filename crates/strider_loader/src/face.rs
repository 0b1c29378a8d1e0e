//! Face bindings: targeting animations at sub-regions of a mesh.
//!
//! A `<face>` element binds a named animation to a set of faces on a
//! segmented quad mesh. Faces are selected either with `<range>`
//! children using the range grammar, with an explicit JSON index list,
//! or — when neither selects anything — by the face element's own
//! position in the document.

use std::sync::Arc;

use log::warn;

use strider_types::anim::Animation;
use strider_types::geom::{SegmentGrid, face_indices};

use crate::animation::AnimationSet;
use crate::document::{FaceNode, GeometryDoc, RangeNode};
use crate::error::LoaderError;
use crate::range::expand;

/// A named animation bound to specific faces of a mesh.
///
/// The animation itself is shared with the containing
/// [`AnimationSet`]; bindings never copy frame data.
#[derive(Debug, Clone)]
pub struct FaceBinding {
	/// Name the binding resolved through the animation set
	pub name: String,
	/// The resolved animation
	pub animation: Arc<Animation>,
	/// Playback phase offset in seconds
	pub offset: f32,
	/// Target face indices, ascending; duplicates from overlapping
	/// ranges are preserved
	pub indices: Vec<u32>,
}

/// Parses a `<geometry>` document into face bindings.
///
/// Bindings come out in document order. A face that selects no indices
/// of its own defaults to the single face matching its position in the
/// document (position × 2, skipping two triangles per face).
///
/// # Errors
///
/// [`LoaderError::MissingAttribute`] when a face names no animation,
/// [`LoaderError::UnknownAnimation`] when the name does not resolve,
/// plus any range-grammar or JSON error from the index sources.
pub fn parse_face_bindings(
	doc: &GeometryDoc,
	set: &AnimationSet,
) -> Result<Vec<FaceBinding>, LoaderError> {
	let grid = doc.grid();
	let mut bindings = Vec::with_capacity(doc.faces.len());

	for (position, face) in doc.faces.iter().enumerate() {
		let mut binding = parse_face(face, grid, set)?;
		if binding.indices.is_empty() {
			warn!("face {} selects no indices, defaulting to its own position", binding.name);
			binding.indices = vec![position as u32 * 2];
		}
		bindings.push(binding);
	}

	Ok(bindings)
}

/// Parses a `<geometry>` document from XML text into face bindings.
///
/// # Errors
///
/// Any schema error from the document, or any binding error from
/// [`parse_face_bindings`].
pub fn load_faces(xml: &str, set: &AnimationSet) -> Result<Vec<FaceBinding>, LoaderError> {
	let doc: GeometryDoc = quick_xml::de::from_str(xml)?;
	parse_face_bindings(&doc, set)
}

fn parse_face(
	face: &FaceNode,
	grid: SegmentGrid,
	set: &AnimationSet,
) -> Result<FaceBinding, LoaderError> {
	let name = face.animation.as_deref().ok_or(LoaderError::MissingAttribute {
		element: "face",
		attr: "animation",
	})?;
	let animation = set.get(name).ok_or_else(|| LoaderError::UnknownAnimation {
		name: name.to_string(),
	})?;

	let mut indices = Vec::new();
	for range in &face.ranges {
		indices.extend(expand_range(range, grid)?);
	}
	if let Some(json) = &face.index {
		let explicit: Vec<u32> = serde_json::from_str(json)?;
		indices.extend(explicit);
	}
	indices.sort_unstable();

	Ok(FaceBinding {
		name: name.to_string(),
		animation: Arc::clone(animation),
		offset: face.offset.unwrap_or(0.0),
		indices,
	})
}

fn expand_range(range: &RangeNode, grid: SegmentGrid) -> Result<Vec<u32>, LoaderError> {
	let x = range.x.as_deref().ok_or(LoaderError::MissingAttribute {
		element: "range",
		attr: "x",
	})?;
	let y = range.y.as_deref().ok_or(LoaderError::MissingAttribute {
		element: "range",
		attr: "y",
	})?;

	let xs = expand_coordinates(x, grid.w)?;
	let ys = expand_coordinates(y, grid.h)?;
	Ok(face_indices(&xs, &ys, grid))
}

/// Expands a range expression and enforces the 1-based coordinate
/// contract of [`face_indices`]. The range grammar itself accepts 0,
/// but a zero grid coordinate has no face to map to.
fn expand_coordinates(expr: &str, max: u32) -> Result<Vec<u32>, LoaderError> {
	let coords = expand(expr, max)?;
	if coords.contains(&0) {
		return Err(LoaderError::InvalidRange {
			expr: expr.to_string(),
			reason: "face coordinates are 1-based".to_string(),
		});
	}
	Ok(coords)
}
