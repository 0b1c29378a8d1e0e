//! Prelude module for `strider_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use strider_types::prelude::*;
//!
//! let grid = SegmentGrid::new(10, 10);
//! assert_eq!(face_index(2, 3, grid), 42);
//! ```

// Animation types
#[doc(inline)]
pub use crate::anim::{Animation, FrameDescriptor, LoopNode, LoopTree, UVCoords};

// Geometry types
#[doc(inline)]
pub use crate::geom::{SegmentGrid, face_index, face_indices};

// Math types
#[doc(inline)]
pub use crate::math::Vec2;
