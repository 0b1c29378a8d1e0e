//! XML loader for the `strider` content pipeline.
//!
//! This crate turns declarative XML animation descriptions into the
//! immutable data model of `strider_types`:
//!
//! - [`load_animations`] parses an `<animations>` container into an
//!   [`AnimationSet`], expanding every nested `<loop>` group into a
//!   flat, time-ordered frame sequence
//! - [`load_faces`] parses a `<geometry>` document into
//!   [`FaceBinding`]s targeting those animations at individual faces of
//!   a segmented quad mesh
//! - [`range::expand`] implements the numeric range grammar used by
//!   face selection (`"1-3,20-24,500-510/2"`)
//!
//! Parsing is synchronous and pure: the same document always produces
//! the same output, and malformed input fails fast with a
//! [`LoaderError`] instead of being silently patched up.
//!
//! # Examples
//!
//! ```
//! use strider_loader::{load_animations, load_faces};
//! use strider_types::math::Vec2;
//!
//! let animations = load_animations(
//!     r#"<animations w="24" h="22">
//!         <animation id="pulse">
//!             <loop count="2">
//!                 <frame x="0" y="0" duration="0.1"/>
//!                 <frame x="24" y="0"/>
//!             </loop>
//!         </animation>
//!     </animations>"#,
//!     Vec2::new(128.0, 128.0),
//! )?;
//! assert_eq!(animations.get("pulse").unwrap().len(), 4);
//!
//! let faces = load_faces(
//!     r#"<geometry w-segments="4" h-segments="4">
//!         <face animation="pulse"><range x="1-2" y="1"/></face>
//!     </geometry>"#,
//!     &animations,
//! )?;
//! assert_eq!(faces[0].indices, vec![0, 2]);
//! # Ok::<(), strider_loader::LoaderError>(())
//! ```

pub mod animation;
pub mod config;
pub mod document;
pub mod error;
pub mod face;
pub mod range;

pub use self::animation::{
	AnimationSet, DEFAULT_ANIMATION_ID, SizeContext, load_animations, load_animations_with_config,
	parse_animation, resolve_frame,
};
pub use self::config::LoadConfig;
pub use self::error::LoaderError;
pub use self::face::{FaceBinding, load_faces, parse_face_bindings};
