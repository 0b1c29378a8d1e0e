//! Animation data model: UV rectangles, frames, loop trees and the
//! assembled animation sequence.
//!
//! An animation is described declaratively as an ordered mix of frames
//! and loop groups, where loop groups nest to arbitrary depth. The
//! pipeline represents that description as a [`LoopTree`] and expands it
//! exactly once ("squash") into a flat, time-ordered [`Animation`]:
//!
//! ```text
//! loop count=3          squash
//!   frame A      ────────────────▶  A B A B A B
//!   frame B
//! ```
//!
//! Repetition always applies to the whole group, never per element, and
//! nested loops multiply. Squashing is pure: the same tree squashes to
//! the same sequence every time, and output ordering is depth-first,
//! left-to-right at every level.
//!
//! # Examples
//!
//! ```
//! use strider_types::anim::{Animation, FrameDescriptor, LoopTree, UVCoords};
//! use strider_types::math::Vec2;
//!
//! let texture = Vec2::new(128.0, 128.0);
//! let uv = UVCoords::from_pixels(Vec2::new(0.0, 0.0), Vec2::new(16.0, 16.0), texture);
//!
//! let mut inner = LoopTree::with_loops(2);
//! inner.push_frame(FrameDescriptor::new(uv, Some(0.1)));
//!
//! let mut tree = LoopTree::with_loops(3);
//! tree.push_group(inner);
//!
//! let animation = Animation::from_frames(Some("idle".into()), None, tree.squash());
//! assert_eq!(animation.len(), 6);
//! ```

pub mod animation;
pub mod frame;
pub mod loop_tree;
pub mod uv;

pub use self::animation::Animation;
pub use self::frame::FrameDescriptor;
pub use self::loop_tree::{LoopNode, LoopTree};
pub use self::uv::UVCoords;
