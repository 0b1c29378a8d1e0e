//! End-to-end pipeline tests: XML documents through assembly to face
//! bindings, including the combined nested-loop golden sequence.

use anyhow::Result;

use strider_loader::{LoadConfig, load_animations, load_animations_with_config, load_faces};
use strider_types::math::Vec2;

const TEXTURE: Vec2 = Vec2::new(128.0, 128.0);

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn combined_nested_loops_golden_sequence() -> Result<()> {
	init_logging();

	let set = load_animations(
		r#"<animations w="48" h="48">
			<animation id="moot" w="20" h="10">
				<loop count="2">
					<frame x="1" y="1" duration="101"/>
					<loop count="3">
						<frame x="1" y="1" duration="201"/>
						<loop count="6">
							<frame x="1" y="1" duration="301"/>
						</loop>
						<frame x="2" y="2" duration="201"/>
					</loop>
					<frame x="1" y="1" duration="102"/>
				</loop>
			</animation>
		</animations>"#,
		TEXTURE,
	)?;

	let animation = set.get("moot").expect("animation assembled");
	assert_eq!(animation.len(), 52);

	let mut expected = Vec::new();
	for _ in 0..2 {
		expected.push(101.0);
		for _ in 0..3 {
			expected.push(201.0);
			expected.extend([301.0; 6]);
			expected.push(201.0);
		}
		expected.push(102.0);
	}

	let durations: Vec<f32> =
		animation.frames().iter().map(|f| f.duration.expect("timed frame")).collect();
	assert_eq!(durations, expected);
	Ok(())
}

#[test]
fn animations_and_faces_wire_together() -> Result<()> {
	init_logging();

	let set = load_animations(
		r#"<animations w="16" h="16" texture="sheet">
			<animation id="water" group="environment">
				<loop count="2">
					<frame x="0" y="0" duration="0.25"/>
					<frame x="16" y="0" duration="0.25"/>
				</loop>
			</animation>
			<animation id="lava" w="32" h="32">
				<frame x="0" y="32"/>
			</animation>
		</animations>"#,
		TEXTURE,
	)?;

	assert_eq!(set.texture(), Some("sheet"));
	assert_eq!(set.default_animation().expect("default").id(), Some("water"));

	let water = set.get("water").expect("water");
	assert_eq!(water.group(), Some("environment"));
	assert_eq!(water.len(), 4);
	// cycle: 4 frames of 0.25s each
	assert_eq!(water.cycle_duration(1.0), 1.0);

	let faces = load_faces(
		r#"<geometry w-segments="10" h-segments="10">
			<face animation="water">
				<range x="1-3" y="1"/>
			</face>
			<face animation="lava" offset="0.25" index="[40]">
				<range x="2" y="3"/>
			</face>
		</geometry>"#,
		&set,
	)?;

	assert_eq!(faces.len(), 2);
	assert_eq!(faces[0].indices, vec![0, 2, 4]);
	assert_eq!(faces[1].indices, vec![40, 42]);
	assert_eq!(faces[1].offset, 0.25);
	assert_eq!(faces[1].animation.id(), Some("lava"));
	Ok(())
}

#[test]
fn squash_output_is_deterministic() -> Result<()> {
	init_logging();

	let xml = r#"<animations w="8" h="8">
		<animation id="blink">
			<loop count="4">
				<frame x="0" y="0" duration="1"/>
				<loop count="2"><frame x="8" y="0"/></loop>
			</loop>
		</animation>
	</animations>"#;

	let first = load_animations(xml, TEXTURE)?;
	let second = load_animations(xml, TEXTURE)?;
	assert_eq!(
		first.get("blink").expect("first").frames(),
		second.get("blink").expect("second").frames()
	);
	Ok(())
}

#[test]
fn budget_rejects_pathological_documents() -> Result<()> {
	init_logging();

	// 20^4 = 160000 frames from four nested loops around one frame.
	let xml = r#"<animations w="8" h="8">
		<animation id="bomb">
			<loop count="20"><loop count="20"><loop count="20"><loop count="20">
				<frame x="0" y="0"/>
			</loop></loop></loop></loop>
		</animation>
	</animations>"#;

	let err = load_animations_with_config(xml, TEXTURE, &LoadConfig::bounded(100_000))
		.expect_err("budget should trip");
	assert!(err.to_string().contains("160000"));

	let set = load_animations(xml, TEXTURE)?;
	assert_eq!(set.get("bomb").expect("bomb").len(), 160_000);
	Ok(())
}
