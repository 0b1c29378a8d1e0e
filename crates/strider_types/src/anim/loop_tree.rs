//! Recursive loop tree and its squash expansion.
//!
//! The tree mirrors the nesting of `<loop>` elements in an animation
//! description. It is built top-down from a tree-shaped document, so it
//! is acyclic by construction; plain recursive ownership suffices and
//! structural equality makes the expansion easy to test.

/// A child of a [`LoopTree`]: either a leaf frame or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopNode<T> {
	/// A leaf frame, emitted as-is
	Frame(T),
	/// A nested loop group, expanded recursively
	Group(LoopTree<T>),
}

/// An ordered group of frames and nested groups, repeated as a unit.
///
/// [`squash`](LoopTree::squash) flattens the tree into its final frame
/// sequence: every child is flattened in declared order, and the
/// concatenation is then repeated `loops` times *as a whole*. A loop of
/// count 3 over `[A, B]` squashes to `[A, B, A, B, A, B]`, never
/// `[A, A, A, B, B, B]`, and nested loops multiply.
///
/// Nothing bounds the multiplicative growth; see
/// [`squashed_len`](LoopTree::squashed_len) for checking the output size
/// before committing to the expansion.
///
/// # Examples
///
/// ```
/// use strider_types::anim::LoopTree;
///
/// let mut inner = LoopTree::with_loops(3);
/// inner.push_frame('a');
/// inner.push_frame('b');
///
/// let mut tree = LoopTree::new();
/// tree.push_frame('x');
/// tree.push_group(inner);
///
/// assert_eq!(tree.squash(), vec!['x', 'a', 'b', 'a', 'b', 'a', 'b']);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoopTree<T> {
	frames: Vec<LoopNode<T>>,
	loops: u32,
}

impl<T> LoopTree<T> {
	/// Creates an empty tree played once.
	pub fn new() -> Self {
		Self::with_loops(1)
	}

	/// Creates an empty tree repeated `loops` times.
	pub fn with_loops(loops: u32) -> Self {
		Self {
			frames: Vec::new(),
			loops,
		}
	}

	/// Number of times this group repeats.
	pub fn loops(&self) -> u32 {
		self.loops
	}

	/// Direct children of this group, in declared order.
	pub fn children(&self) -> &[LoopNode<T>] {
		&self.frames
	}

	/// Returns `true` when the group holds no children.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Appends a leaf frame.
	pub fn push_frame(&mut self, frame: T) {
		self.frames.push(LoopNode::Frame(frame));
	}

	/// Appends a nested group.
	pub fn push_group(&mut self, group: LoopTree<T>) {
		self.frames.push(LoopNode::Group(group));
	}

	/// Length of the sequence [`squash`](Self::squash) would produce,
	/// computed without expanding.
	///
	/// Useful to reject pathological documents whose nested loops would
	/// expand to an enormous frame count.
	pub fn squashed_len(&self) -> usize {
		let once: usize = self
			.frames
			.iter()
			.map(|node| match node {
				LoopNode::Frame(_) => 1,
				LoopNode::Group(group) => group.squashed_len(),
			})
			.sum();
		once * self.loops as usize
	}
}

impl<T: Clone> LoopTree<T> {
	/// Flattens the tree into its final, repetition-expanded sequence.
	///
	/// Depth-first, left-to-right: nested groups are squashed to their
	/// own flat sequences, the per-child sequences are concatenated in
	/// declared order, and the concatenation is repeated `loops` times.
	/// Pure; squashing the same tree twice yields identical output.
	pub fn squash(&self) -> Vec<T> {
		let mut once = Vec::new();
		for node in &self.frames {
			match node {
				LoopNode::Frame(frame) => once.push(frame.clone()),
				LoopNode::Group(group) => once.extend(group.squash()),
			}
		}

		let mut all = Vec::with_capacity(once.len() * self.loops as usize);
		for _ in 0..self.loops {
			all.extend_from_slice(&once);
		}
		all
	}
}

impl<T> Default for LoopTree<T> {
	fn default() -> Self {
		Self::new()
	}
}
