//! Benchmark helper utilities for strider-rs
//!
//! Synthetic loop-tree and document generators used by the squash and
//! range-expansion benchmarks. Documents are generated rather than read
//! from disk so the benchmarks run anywhere.

use strider_types::anim::{FrameDescriptor, LoopTree, UVCoords};
use strider_types::math::Vec2;

/// Builds a frame descriptor for benchmark trees.
pub fn test_frame(index: u32) -> FrameDescriptor {
	let uv = UVCoords::from_pixels(
		Vec2::new((index % 8) as f32 * 16.0, (index / 8) as f32 * 16.0),
		Vec2::new(16.0, 16.0),
		Vec2::new(256.0, 256.0),
	);
	FrameDescriptor::new(uv, Some(0.1))
}

/// Builds a loop tree of the given nesting depth.
///
/// Every level holds `frames_per_level` leaf frames followed by one
/// nested group repeated `loops_per_level` times; the expansion size
/// grows multiplicatively with depth.
pub fn nested_tree(
	depth: u32,
	loops_per_level: u32,
	frames_per_level: u32,
) -> LoopTree<FrameDescriptor> {
	let mut tree = LoopTree::with_loops(loops_per_level);
	for i in 0..frames_per_level {
		tree.push_frame(test_frame(i));
	}
	if depth > 1 {
		tree.push_group(nested_tree(depth - 1, loops_per_level, frames_per_level));
	}
	tree
}

/// Generates an `<animations>` document with nested loops for
/// end-to-end loader benchmarks.
pub fn generate_animation_xml(depth: u32, loops_per_level: u32) -> String {
	let mut xml = String::from(r#"<animations w="16" h="16"><animation id="bench">"#);
	for _ in 0..depth {
		xml.push_str(&format!(r#"<loop count="{loops_per_level}">"#));
		xml.push_str(r#"<frame x="0" y="0" duration="0.1"/>"#);
	}
	for _ in 0..depth {
		xml.push_str("</loop>");
	}
	xml.push_str("</animation></animations>");
	xml
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nested_tree_size() {
		let tree = nested_tree(3, 2, 1);
		// Level sizes: innermost 1*2, middle (1+2)*2, outer (1+6)*2.
		assert_eq!(tree.squashed_len(), 14);
		assert_eq!(tree.squash().len(), 14);
	}

	#[test]
	fn test_generated_xml_loads() {
		let xml = generate_animation_xml(3, 2);
		let set =
			strider_loader::load_animations(&xml, Vec2::new(256.0, 256.0)).unwrap();
		assert_eq!(set.get("bench").unwrap().len(), 14);
	}
}
