//! Error types for XML animation and face-binding parsing.

use thiserror::Error;

/// Errors that can occur when parsing animation and face descriptions.
///
/// Every variant is deterministic for a given input document; there are
/// no transient failures and nothing here is retried. Errors propagate
/// synchronously to the caller driving the document parse.
#[derive(Debug, Error)]
pub enum LoaderError {
	/// A range expression did not match the range grammar
	#[error("malformed range expression {expr:?}: {reason}")]
	InvalidRange {
		/// The full attribute value being expanded
		expr: String,
		/// What made the expression unacceptable
		reason: String,
	},

	/// A mandatory attribute was absent
	#[error("missing required attribute \"{attr}\" on <{element}>")]
	MissingAttribute {
		/// Element the attribute belongs to
		element: &'static str,
		/// Name of the missing attribute
		attr: &'static str,
	},

	/// An attribute was present but its value could not be interpreted
	#[error("invalid value {value:?} for attribute \"{attr}\" on <{element}>")]
	InvalidAttribute {
		/// Element the attribute belongs to
		element: &'static str,
		/// Name of the offending attribute
		attr: &'static str,
		/// The rejected raw value
		value: String,
	},

	/// The frame → animation → animations size fallback chain came up empty
	#[error("no size defined for frame at ({x}, {y})")]
	UnresolvedFrameSize {
		/// Frame offset x, for locating the offending frame
		x: f32,
		/// Frame offset y
		y: f32,
	},

	/// A face referenced an animation missing from the containing set
	#[error("animation {name:?} not defined")]
	UnknownAnimation {
		/// The unresolved animation name
		name: String,
	},

	/// An animation would expand past the configured frame budget
	#[error("animation expands to {required} frames, exceeding the limit of {limit}")]
	FrameBudgetExceeded {
		/// Frame count the loop tree would expand to
		required: usize,
		/// Configured maximum
		limit: usize,
	},

	/// The document is not well-formed XML or does not fit the schema
	#[error(transparent)]
	Xml(#[from] quick_xml::DeError),

	/// The JSON face-index attribute could not be parsed
	#[error("malformed face index list: {0}")]
	IndexJson(#[from] serde_json::Error),
}
