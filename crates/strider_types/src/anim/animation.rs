//! The assembled, time-ordered animation sequence.

use serde::{Deserialize, Serialize};

use super::frame::FrameDescriptor;

/// An ordered, immutable sequence of animation frames.
///
/// Produced once by squashing a loop tree and never mutated afterwards.
/// The `id` identifies the animation within its containing set; the
/// optional `group` ties together animation families that share timing
/// or triggers. An animation without an id can only live in a set under
/// a synthetic default key assigned by the caller.
///
/// # Examples
///
/// ```
/// use strider_types::anim::{Animation, FrameDescriptor, UVCoords};
/// use strider_types::math::Vec2;
///
/// let uv = UVCoords::from_pixels(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(16.0, 16.0),
///     Vec2::new(64.0, 64.0),
/// );
/// let animation = Animation::from_frames(
///     Some("run".into()),
///     Some("movement".into()),
///     vec![FrameDescriptor::new(uv, Some(0.1)), FrameDescriptor::untimed(uv)],
/// );
///
/// assert_eq!(animation.id(), Some("run"));
/// assert_eq!(animation.group(), Some("movement"));
/// assert_eq!(animation.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
	id: Option<String>,
	group: Option<String>,
	frames: Vec<FrameDescriptor>,
}

impl Animation {
	/// Creates an animation from its identity and flattened frames.
	pub fn from_frames(
		id: Option<String>,
		group: Option<String>,
		frames: Vec<FrameDescriptor>,
	) -> Self {
		Self {
			id,
			group,
			frames,
		}
	}

	/// External identifier, if the description declared one.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Animation family, if the description declared one.
	pub fn group(&self) -> Option<&str> {
		self.group.as_deref()
	}

	/// Flattened frames in playback order.
	pub fn frames(&self) -> &[FrameDescriptor] {
		&self.frames
	}

	/// Frame at the given position, if within bounds.
	pub fn get(&self, index: usize) -> Option<&FrameDescriptor> {
		self.frames.get(index)
	}

	/// Total flattened frame count.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when the animation has no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Total playback time of one cycle, with untimed frames counted at
	/// `default_duration`.
	pub fn cycle_duration(&self, default_duration: f32) -> f32 {
		self.frames.iter().map(|f| f.duration_or(default_duration)).sum()
	}

	/// Frame shown at `elapsed` seconds into playback, wrapping at the
	/// cycle boundary. Untimed frames run for `default_duration`.
	///
	/// Returns `None` for an empty animation or a non-positive cycle.
	pub fn frame_at(&self, elapsed: f32, default_duration: f32) -> Option<&FrameDescriptor> {
		let cycle = self.cycle_duration(default_duration);
		if self.frames.is_empty() || cycle <= 0.0 {
			return None;
		}

		let mut remaining = elapsed.rem_euclid(cycle);
		for frame in &self.frames {
			remaining -= frame.duration_or(default_duration);
			if remaining < 0.0 {
				return Some(frame);
			}
		}
		// Floating point drift on the last boundary.
		self.frames.last()
	}
}

impl std::fmt::Display for Animation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Animation({}, {} frames)",
			self.id.as_deref().unwrap_or("<anonymous>"),
			self.frames.len()
		)
	}
}
