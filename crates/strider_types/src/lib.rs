//! Core data types for the `strider` content pipeline.
//!
//! This crate holds the pure, I/O-free data model shared by the XML loader
//! and the (external) runtime:
//!
//! - **Math**: [`Vec2`](math::Vec2) pixel/texture coordinates and the
//!   [`SegmentGrid`](geom::SegmentGrid) subdivision of a quad mesh
//! - **UV mapping**: [`UVCoords`](anim::UVCoords) texture-space rectangles
//!   with the top-left to bottom-left axis flip applied in one place
//! - **Animation**: [`FrameDescriptor`](anim::FrameDescriptor) frames,
//!   the recursive [`LoopTree`](anim::LoopTree) with its squash expansion,
//!   and the immutable [`Animation`](anim::Animation) frame sequence
//! - **Face addressing**: linear face indices for targeting UV animation
//!   at sub-regions of a segmented mesh
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use strider_types::prelude::*;
//!
//! let texture = Vec2::new(128.0, 128.0);
//! let uv = UVCoords::from_pixels(Vec2::new(32.0, 16.0), Vec2::new(24.0, 22.0), texture);
//!
//! let mut tree = LoopTree::with_loops(3);
//! tree.push_frame(FrameDescriptor::new(uv, Some(0.25)));
//! assert_eq!(tree.squash().len(), 3);
//! ```

pub mod anim;
pub mod geom;
pub mod math;

/// `use strider_types::prelude::*;` to import commonly used items.
pub mod prelude;
