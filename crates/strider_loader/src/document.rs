//! Typed document model for the animation and geometry XML grammars.
//!
//! Deserialized with `quick_xml::de::from_str` into plain structs; the
//! ordered mix of `<frame>` and `<loop>` children is captured with a
//! `$value` enum sequence, which preserves document order and lets loops
//! recurse to arbitrary depth.

use serde::Deserialize;

use strider_types::geom::SegmentGrid;
use strider_types::math::Vec2;

use crate::error::LoaderError;

/// An `<animations w=".." h=".." texture="..">` container element.
#[derive(Debug, Deserialize)]
pub struct AnimationsDoc {
	/// Group-level fallback frame width
	#[serde(rename = "@w")]
	pub w: Option<f32>,
	/// Group-level fallback frame height
	#[serde(rename = "@h")]
	pub h: Option<f32>,
	/// Identifier of the texture these animations map into; resolving it
	/// to an actual texture is the caller's concern
	#[serde(rename = "@texture")]
	pub texture: Option<String>,
	/// Contained animation definitions, in document order
	#[serde(rename = "animation", default)]
	pub animations: Vec<AnimationNode>,
}

impl AnimationsDoc {
	/// Group-level fallback size, present only when both components are.
	pub fn size(&self) -> Option<Vec2> {
		size_of(self.w, self.h)
	}
}

/// An `<animation>` element: identity plus an ordered child sequence.
#[derive(Debug, Deserialize)]
pub struct AnimationNode {
	/// External identifier of the animation
	#[serde(rename = "@id")]
	pub id: Option<String>,
	/// Family of animations sharing timing or triggers
	#[serde(rename = "@group")]
	pub group: Option<String>,
	/// Animation-level fallback frame width
	#[serde(rename = "@w")]
	pub w: Option<f32>,
	/// Animation-level fallback frame height
	#[serde(rename = "@h")]
	pub h: Option<f32>,
	/// Frames and loop groups, in document order
	#[serde(rename = "$value", default)]
	pub children: Vec<AnimationChild>,
}

impl AnimationNode {
	/// Animation-level fallback size, present only when both components
	/// are.
	pub fn size(&self) -> Option<Vec2> {
		size_of(self.w, self.h)
	}
}

/// A direct child of an `<animation>` or `<loop>` element.
///
/// Any other element name fails deserialization; a frame spelled with an
/// unknown tag could never carry the mandatory offset anyway, so failing
/// fast by name surfaces the typo with the element that caused it.
#[derive(Debug, Deserialize)]
pub enum AnimationChild {
	/// A single displayable frame
	#[serde(rename = "frame")]
	Frame(FrameNode),
	/// A repeated group of frames and nested loops
	#[serde(rename = "loop")]
	Loop(LoopElement),
}

/// A `<frame x=".." y=".." w=".." h=".." duration="..">` element.
#[derive(Debug, Deserialize)]
pub struct FrameNode {
	/// Horizontal pixel offset into the texture (mandatory)
	#[serde(rename = "@x")]
	pub x: Option<f32>,
	/// Vertical pixel offset into the texture (mandatory)
	#[serde(rename = "@y")]
	pub y: Option<f32>,
	/// Frame width, overriding every fallback level
	#[serde(rename = "@w")]
	pub w: Option<f32>,
	/// Frame height, overriding every fallback level
	#[serde(rename = "@h")]
	pub h: Option<f32>,
	/// Explicit display time; absent means engine-default timing
	#[serde(rename = "@duration")]
	pub duration: Option<f32>,
}

impl FrameNode {
	/// Frame-level size, present only when both components are.
	pub fn size(&self) -> Option<Vec2> {
		size_of(self.w, self.h)
	}
}

/// A `<loop count="..">` element with recursive children.
#[derive(Debug, Deserialize)]
pub struct LoopElement {
	/// Raw repetition count; see [`LoopElement::count`]
	#[serde(rename = "@count")]
	pub count: Option<String>,
	/// Frames and nested loops, in document order
	#[serde(rename = "$value", default)]
	pub children: Vec<AnimationChild>,
}

impl LoopElement {
	/// Repetition count of this loop.
	///
	/// A missing attribute defaults to 1; a present but non-numeric one
	/// is a grammar error rather than a silent single play. An explicit
	/// count of 0 is legal and expands to nothing.
	pub fn count(&self) -> Result<u32, LoaderError> {
		match &self.count {
			None => Ok(1),
			Some(raw) => raw.trim().parse().map_err(|_| LoaderError::InvalidAttribute {
				element: "loop",
				attr: "count",
				value: raw.clone(),
			}),
		}
	}
}

/// A `<geometry w-segments=".." h-segments="..">` container element.
#[derive(Debug, Deserialize)]
pub struct GeometryDoc {
	/// Horizontal segment count of the mesh surface
	#[serde(rename = "@w-segments")]
	pub w_segments: Option<u32>,
	/// Vertical segment count of the mesh surface
	#[serde(rename = "@h-segments")]
	pub h_segments: Option<u32>,
	/// Face bindings, in document order
	#[serde(rename = "face", default)]
	pub faces: Vec<FaceNode>,
}

impl GeometryDoc {
	/// Segment grid of the mesh, defaulting to a plain quad unless both
	/// segment attributes are present.
	pub fn grid(&self) -> SegmentGrid {
		match (self.w_segments, self.h_segments) {
			(Some(w), Some(h)) => SegmentGrid::new(w, h),
			_ => SegmentGrid::default(),
		}
	}
}

/// A `<face animation=".." offset=".." index="..">` element.
#[derive(Debug, Deserialize)]
pub struct FaceNode {
	/// Name of the animation driving this face (mandatory)
	#[serde(rename = "@animation")]
	pub animation: Option<String>,
	/// Playback phase offset in seconds
	#[serde(rename = "@offset")]
	pub offset: Option<f32>,
	/// Additional explicit face indices as a JSON integer array
	#[serde(rename = "@index")]
	pub index: Option<String>,
	/// Grid-coordinate ranges selecting faces
	#[serde(rename = "range", default)]
	pub ranges: Vec<RangeNode>,
}

/// A `<range x=".." y="..">` element using the range grammar.
#[derive(Debug, Deserialize)]
pub struct RangeNode {
	/// Range expression over horizontal grid coordinates (mandatory)
	#[serde(rename = "@x")]
	pub x: Option<String>,
	/// Range expression over vertical grid coordinates (mandatory)
	#[serde(rename = "@y")]
	pub y: Option<String>,
}

fn size_of(w: Option<f32>, h: Option<f32>) -> Option<Vec2> {
	match (w, h) {
		(Some(w), Some(h)) => Some(Vec2::new(w, h)),
		_ => None,
	}
}
