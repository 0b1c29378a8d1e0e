//! Load configuration for animation assembly.

/// Configuration controlling animation expansion limits.
///
/// Nested loops multiply, so a small document can legally describe an
/// enormous flattened sequence. By default nothing is bounded, matching
/// the behavior content authors rely on; the budget is a deliberate
/// opt-in for callers that feed untrusted documents into the pipeline.
/// The check runs against the computed expansion length *before* any
/// frame is materialized.
///
/// # Examples
///
/// ```
/// use strider_loader::LoadConfig;
///
/// // Unbounded (the default)
/// let config = LoadConfig::default();
/// assert!(config.max_expanded_frames.is_none());
///
/// // Reject animations longer than 10k frames
/// let config = LoadConfig::bounded(10_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadConfig {
	/// Maximum flattened frame count per animation, or `None` for no cap
	pub max_expanded_frames: Option<usize>,
}

impl LoadConfig {
	/// Configuration without an expansion cap.
	pub fn unbounded() -> Self {
		Self {
			max_expanded_frames: None,
		}
	}

	/// Configuration rejecting animations that would expand past
	/// `limit` frames.
	pub fn bounded(limit: usize) -> Self {
		Self {
			max_expanded_frames: Some(limit),
		}
	}
}
