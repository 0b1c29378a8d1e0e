//! `strider-rs` is the content pipeline for a 2D platform game: XML
//! scene descriptions are parsed into immutable animation and
//! face-binding data ready for the rendering runtime.
//!
//! This crate is a facade over the workspace members:
//!
//! - [`strider_types`] — the pure data model (UV rectangles, loop
//!   trees, animations, face indexing)
//! - [`strider_loader`] — the XML parsing and assembly layer
//!
//! # Examples
//!
//! ```
//! use strider_rs::loader::load_animations;
//! use strider_rs::types::math::Vec2;
//!
//! let set = load_animations(
//!     r#"<animations w="24" h="22">
//!         <animation id="idle"><frame x="0" y="0"/></animation>
//!     </animations>"#,
//!     Vec2::new(128.0, 128.0),
//! )?;
//! assert_eq!(set.get("idle").unwrap().len(), 1);
//! # Ok::<(), strider_rs::loader::LoaderError>(())
//! ```

pub use strider_loader as loader;
pub use strider_types as types;

/// `use strider_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use strider_loader::{
		AnimationSet, FaceBinding, LoadConfig, LoaderError, load_animations, load_faces,
	};
	#[doc(inline)]
	pub use strider_types::prelude::*;
}
