use scene::{MockScene, ObjectType, Scene, Vec3};
use task::pick_and_lift::{DISTRACTOR_COUNT, MIN_BLOCK_SPACING, TARGET_NAMES};
use task::{PickAndLift, TaskError};

const BOUNDARY_CENTER: Vec3 = Vec3::new(0.0, 0.77, 0.0);
const BOUNDARY_EXTENT: Vec3 = Vec3::new(0.35, 0.0, 0.35);

fn pick_and_lift_scene() -> MockScene {
    let mut scene = MockScene::new();
    let block_extent = Vec3::new(0.025, 0.025, 0.025);
    for name in TARGET_NAMES {
        scene.add_object(name, ObjectType::Shape, true, Vec3::ZERO, block_extent);
    }
    for i in 0..DISTRACTOR_COUNT {
        scene.add_object(
            &format!("distractor{i}"),
            ObjectType::Shape,
            true,
            Vec3::ZERO,
            block_extent,
        );
    }
    scene.add_object(
        "pick_and_lift_boundary",
        ObjectType::Shape,
        false,
        BOUNDARY_CENTER,
        BOUNDARY_EXTENT,
    );
    scene.add_object(
        "pick_and_lift_success",
        ObjectType::ProximitySensor,
        false,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.12, 0.08, 0.12),
    );
    scene
}

/// A scene missing a required named shape fails task setup with a
/// descriptive error instead of an empty object set.
#[test]
fn setup_fails_on_missing_shape() {
    let mut scene = MockScene::new();
    scene.add_object(
        TARGET_NAMES[0],
        ObjectType::Shape,
        true,
        Vec3::ZERO,
        Vec3::ZERO,
    );

    let err = PickAndLift::new(&scene).unwrap_err();
    match err {
        TaskError::Scene(scene::SceneError::MissingObject(name)) => {
            assert_eq!(name, TARGET_NAMES[1]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Episode setup places every block inside the boundary extent with the
/// minimum pairwise separation.
#[test]
fn episode_spawns_blocks_apart_inside_boundary() {
    fastrand::seed(11);
    let mut scene = pick_and_lift_scene();
    let mut task = PickAndLift::new(&scene).unwrap();
    task.init_episode(&mut scene, 0).unwrap();

    let blocks: Vec<_> = task
        .targets()
        .iter()
        .chain(task.distractors().iter())
        .copied()
        .collect();
    assert_eq!(blocks.len(), 3 + DISTRACTOR_COUNT);

    let positions: Vec<Vec3> = blocks.iter().map(|&b| scene.position(b)).collect();
    for pos in &positions {
        assert!((pos.x - BOUNDARY_CENTER.x).abs() <= BOUNDARY_EXTENT.x);
        assert!((pos.z - BOUNDARY_CENTER.z).abs() <= BOUNDARY_EXTENT.z);
        assert!((pos.y - BOUNDARY_CENTER.y).abs() < 1e-6);
    }
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            assert!(a.distance(*b) >= MIN_BLOCK_SPACING);
        }
    }
}

/// Instruction variants reference the red block for every variation index.
#[test]
fn instructions_always_reference_red() {
    fastrand::seed(3);
    let mut scene = pick_and_lift_scene();
    let mut task = PickAndLift::new(&scene).unwrap();

    for index in [0, 5, 19] {
        let instructions = task.init_episode(&mut scene, index).unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(
            instructions[0],
            "pick up the red block and lift it up to the target"
        );
        assert!(instructions.iter().all(|s| s.contains("red")));
    }
}

/// Success requires all three targets in the sensor volume at once; a
/// partial set is not success.
#[test]
fn success_requires_every_target() {
    fastrand::seed(5);
    let mut scene = pick_and_lift_scene();
    let mut task = PickAndLift::new(&scene).unwrap();
    task.init_episode(&mut scene, 0).unwrap();

    let goal = scene.position(task.success_sensor());
    assert!(!task.success(&scene));

    let targets = *task.targets();
    scene.set_position(targets[0], goal);
    scene.set_position(targets[1], goal);
    assert!(!task.success(&scene));

    scene.set_position(targets[2], goal);
    assert!(task.success(&scene));
}

#[test]
fn variation_and_workspace_metadata() {
    let scene = pick_and_lift_scene();
    let task = PickAndLift::new(&scene).unwrap();
    assert_eq!(task.variation_count(), task::colors::ALL.len());
    assert!(task.is_static_workspace());
    assert_eq!(task.graspable_objects(), &task.targets()[..]);
}
