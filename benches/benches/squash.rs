//! Benchmark suite for loop-tree expansion and range parsing
//!
//! Measures the squash expansion at increasing nesting depths and the
//! range-grammar expander, plus the full XML-to-animation path.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use strider_benches::{generate_animation_xml, nested_tree};
use strider_loader::range::expand;
use strider_types::math::Vec2;

/// Benchmark squash at increasing nesting depth
fn bench_squash_depth(c: &mut Criterion) {
	let mut group = c.benchmark_group("squash_depth");

	for depth in [2u32, 4, 6, 8] {
		let tree = nested_tree(depth, 3, 4);
		let frames = tree.squashed_len() as u64;
		group.throughput(Throughput::Elements(frames));
		group.bench_with_input(BenchmarkId::new("nested", depth), &tree, |b, tree| {
			b.iter(|| black_box(tree.squash()));
		});
	}

	group.finish();
}

/// Benchmark the computed expansion length against a full expansion
fn bench_squashed_len(c: &mut Criterion) {
	let mut group = c.benchmark_group("squashed_len");

	let tree = nested_tree(8, 3, 4);
	group.bench_function("compute_only", |b| {
		b.iter(|| black_box(tree.squashed_len()));
	});

	group.finish();
}

/// Benchmark range expression expansion
fn bench_range_expand(c: &mut Criterion) {
	let mut group = c.benchmark_group("range_expand");

	let cases = [
		("single", "42"),
		("wildcard", "*"),
		("stepped", "0-1000/2"),
		("merged", "1-3,20-24,500-510/2,1013-1019"),
	];

	for (name, expr) in cases {
		group.bench_with_input(BenchmarkId::new("expand", name), &expr, |b, expr| {
			b.iter(|| black_box(expand(expr, 1024).unwrap()));
		});
	}

	group.finish();
}

/// Full XML-to-animation pipeline benchmark
fn bench_load_animations(c: &mut Criterion) {
	let mut group = c.benchmark_group("load_animations");
	let texture = Vec2::new(256.0, 256.0);

	for depth in [4u32, 8] {
		let xml = generate_animation_xml(depth, 3);
		group.bench_with_input(BenchmarkId::new("nested_doc", depth), &xml, |b, xml| {
			b.iter(|| black_box(strider_loader::load_animations(xml, texture).unwrap()));
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_squash_depth,
	bench_squashed_len,
	bench_range_expand,
	bench_load_animations,
);

criterion_main!(benches);
