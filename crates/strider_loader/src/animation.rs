//! Animation assembly: from the declarative document to flat sequences.
//!
//! Assembly walks an `<animation>` element's children in document order,
//! builds a [`LoopTree`] mirroring the loop nesting, squashes it, and
//! emits an immutable [`Animation`]. Frame sizes resolve through a
//! three-level fallback chain (frame → animation → animations group),
//! and every UV rectangle is normalized against the texture size.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use strider_types::anim::{Animation, FrameDescriptor, LoopTree, UVCoords};
use strider_types::math::Vec2;

use crate::config::LoadConfig;
use crate::document::{AnimationChild, AnimationNode, AnimationsDoc, FrameNode};
use crate::error::LoaderError;

/// Reserved key under which the first (or any anonymous) animation of a
/// set is registered.
pub const DEFAULT_ANIMATION_ID: &str = "__default";

/// Fallback sizes available to a frame, outermost level last.
///
/// Modeling the chain as an explicit context value keeps the lookup
/// order visible and testable instead of hiding it in document
/// traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeContext {
	/// Size declared on the enclosing `<animation>` element
	pub animation: Option<Vec2>,
	/// Size declared on the enclosing `<animations>` container
	pub group: Option<Vec2>,
}

/// Resolves a frame node into a frame descriptor.
///
/// The offset is mandatory and read only from the frame itself. The
/// size falls back from the frame's own attributes to the animation
/// level and then the group level; a level only participates when both
/// of its components are present. The duration never falls back:
/// absence means engine-default timing.
///
/// # Errors
///
/// [`LoaderError::MissingAttribute`] when the offset is incomplete,
/// [`LoaderError::UnresolvedFrameSize`] when no level provides a size.
pub fn resolve_frame(
	frame: &FrameNode,
	sizes: &SizeContext,
	texture_size: Vec2,
) -> Result<FrameDescriptor, LoaderError> {
	let x = frame.x.ok_or(LoaderError::MissingAttribute {
		element: "frame",
		attr: "x",
	})?;
	let y = frame.y.ok_or(LoaderError::MissingAttribute {
		element: "frame",
		attr: "y",
	})?;

	let size = frame
		.size()
		.or(sizes.animation)
		.or(sizes.group)
		.ok_or(LoaderError::UnresolvedFrameSize {
			x,
			y,
		})?;

	let uv = UVCoords::from_pixels(Vec2::new(x, y), size, texture_size);
	Ok(FrameDescriptor::new(uv, frame.duration))
}

/// Assembles a single animation from its document node.
///
/// `group_size` is the fallback size of the enclosing `<animations>`
/// container, `texture_size` the pixel size of the texture the UV
/// rectangles are normalized against.
///
/// # Errors
///
/// Any frame-resolution or loop-count error from the children, or
/// [`LoaderError::FrameBudgetExceeded`] when a configured budget is
/// smaller than the expansion.
pub fn parse_animation(
	node: &AnimationNode,
	group_size: Option<Vec2>,
	texture_size: Vec2,
	config: &LoadConfig,
) -> Result<Animation, LoaderError> {
	let sizes = SizeContext {
		animation: node.size(),
		group: group_size,
	};

	let mut tree = LoopTree::new();
	push_children(&mut tree, &node.children, &sizes, texture_size)?;

	if let Some(limit) = config.max_expanded_frames {
		let required = tree.squashed_len();
		if required > limit {
			return Err(LoaderError::FrameBudgetExceeded {
				required,
				limit,
			});
		}
	}

	Ok(Animation::from_frames(node.id.clone(), node.group.clone(), tree.squash()))
}

fn push_children(
	tree: &mut LoopTree<FrameDescriptor>,
	children: &[AnimationChild],
	sizes: &SizeContext,
	texture_size: Vec2,
) -> Result<(), LoaderError> {
	for child in children {
		match child {
			AnimationChild::Frame(frame) => {
				tree.push_frame(resolve_frame(frame, sizes, texture_size)?);
			}
			AnimationChild::Loop(element) => {
				let mut group = LoopTree::with_loops(element.count()?);
				push_children(&mut group, &element.children, sizes, texture_size)?;
				tree.push_group(group);
			}
		}
	}
	Ok(())
}

/// The animations of one `<animations>` container, keyed by id.
///
/// The first inserted animation doubles as the set's default, and an
/// animation without an id registers *only* under
/// [`DEFAULT_ANIMATION_ID`]. Animations are shared via [`Arc`] so many
/// face bindings can reference one squashed sequence without copying
/// frames.
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
	animations: HashMap<String, Arc<Animation>>,
	texture: Option<String>,
}

impl AnimationSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an animation under its id, registering it as the default
	/// when it is anonymous or the set has no default yet.
	pub fn insert(&mut self, animation: Animation) {
		let animation = Arc::new(animation);
		match animation.id() {
			Some(id) => {
				self.animations.insert(id.to_string(), Arc::clone(&animation));
				if !self.animations.contains_key(DEFAULT_ANIMATION_ID) {
					self.animations.insert(DEFAULT_ANIMATION_ID.to_string(), animation);
				}
			}
			None => {
				self.animations.insert(DEFAULT_ANIMATION_ID.to_string(), animation);
			}
		}
	}

	/// Animation registered under `name`, if any.
	pub fn get(&self, name: &str) -> Option<&Arc<Animation>> {
		self.animations.get(name)
	}

	/// The set's default animation, if any animation was inserted.
	pub fn default_animation(&self) -> Option<&Arc<Animation>> {
		self.animations.get(DEFAULT_ANIMATION_ID)
	}

	/// Returns `true` when `name` resolves in this set.
	pub fn contains(&self, name: &str) -> bool {
		self.animations.contains_key(name)
	}

	/// Number of registered keys, including the default alias.
	pub fn len(&self) -> usize {
		self.animations.len()
	}

	/// Returns `true` when the set holds no animations.
	pub fn is_empty(&self) -> bool {
		self.animations.is_empty()
	}

	/// Iterates over registered names, in arbitrary order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.animations.keys().map(String::as_str)
	}

	/// Texture id declared on the container, for the caller to resolve.
	pub fn texture(&self) -> Option<&str> {
		self.texture.as_deref()
	}
}

/// Parses a whole `<animations>` container with default configuration.
///
/// # Errors
///
/// Any schema or assembly error from the contained animations.
pub fn load_animations(xml: &str, texture_size: Vec2) -> Result<AnimationSet, LoaderError> {
	load_animations_with_config(xml, texture_size, &LoadConfig::default())
}

/// Parses a whole `<animations>` container.
///
/// Animations are assembled in document order, so the first one becomes
/// the set's default.
///
/// # Errors
///
/// Any schema or assembly error from the contained animations.
pub fn load_animations_with_config(
	xml: &str,
	texture_size: Vec2,
	config: &LoadConfig,
) -> Result<AnimationSet, LoaderError> {
	let doc: AnimationsDoc = quick_xml::de::from_str(xml)?;
	let group_size = doc.size();

	let mut set = AnimationSet {
		animations: HashMap::new(),
		texture: doc.texture.clone(),
	};

	for node in &doc.animations {
		let animation = parse_animation(node, group_size, texture_size, config)?;
		debug!(
			"assembled animation {} with {} frames",
			animation.id().unwrap_or(DEFAULT_ANIMATION_ID),
			animation.len()
		);
		set.insert(animation);
	}

	Ok(set)
}
