use reward::{
    RewardTracker, RoleMap, DEFAULT_TIME_PENALTY, DISTRACTOR_COLLISION_PENALTY, FINISHED_REWARD,
    GOAL_REWARD, TABLE_COLLISION_PENALTY,
};
use scene::{MockScene, ObjectId, ObjectType, Scene, Vec3};
use std::collections::HashSet;

const GOAL_POS: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Scene containing every object the default role map names, plus a robot
/// body that belongs to no role.
fn reward_scene() -> MockScene {
    let mut scene = MockScene::new();
    let map = RoleMap::default();
    let block_extent = Vec3::new(0.025, 0.025, 0.025);

    for name in map.targets.iter().chain(&map.distractors) {
        scene.add_object(name, ObjectType::Shape, true, Vec3::ZERO, block_extent);
    }
    for name in &map.table {
        scene.add_object(
            name,
            ObjectType::Shape,
            true,
            Vec3::new(0.0, 0.4, 0.0),
            Vec3::new(0.7, 0.4, 0.7),
        );
    }
    scene.add_object(
        &map.goal_area,
        ObjectType::ProximitySensor,
        false,
        GOAL_POS,
        Vec3::new(0.12, 0.08, 0.12),
    );
    for name in &map.gripper_parts {
        scene.add_object(
            name,
            ObjectType::Shape,
            true,
            Vec3::new(0.0, 1.3, 0.0),
            Vec3::new(0.01, 0.02, 0.01),
        );
    }
    scene.add_object("Panda_base", ObjectType::Shape, true, Vec3::ZERO, Vec3::ZERO);
    scene
}

fn tracker(scene: &MockScene) -> RewardTracker {
    RewardTracker::new(scene, &RoleMap::default()).unwrap()
}

fn target(scene: &MockScene, index: usize) -> ObjectId {
    scene.require(&RoleMap::default().targets[index]).unwrap()
}

/// The five role sets are pairwise disjoint and a strict subset of the
/// scene's objects: the robot body belongs to none of them.
#[test]
fn role_sets_partition_the_scene() {
    let scene = reward_scene();
    let roles = RoleMap::default().resolve(&scene).unwrap();

    let sets: [&[ObjectId]; 4] = [
        &roles.targets,
        &roles.distractors,
        &roles.table,
        &roles.gripper_parts,
    ];
    let mut seen = HashSet::new();
    seen.insert(roles.goal_area);
    for set in sets {
        for &id in set {
            assert!(seen.insert(id), "object {id:?} appears in two role sets");
        }
    }

    let all: HashSet<_> = scene.objects().into_iter().collect();
    assert!(seen.is_subset(&all));
    assert!(seen.len() < all.len());
}

/// A resolution over a scene missing a role name fails fast.
#[test]
fn missing_role_name_is_an_error() {
    let mut scene = MockScene::new();
    scene.add_object("workspace", ObjectType::Shape, true, Vec3::ZERO, Vec3::ZERO);
    assert!(RewardTracker::new(&scene, &RoleMap::default()).is_err());
}

/// With no events and no time penalty, the step reward is exactly zero.
#[test]
fn quiet_step_scores_zero() {
    let scene = reward_scene();
    let mut tracker = tracker(&scene);
    assert_eq!(tracker.step_reward(&scene), 0.0);
    assert_eq!(tracker.remaining_targets().len(), 3);
}

/// With time-dependent shaping enabled, every quiet step costs exactly the
/// configured penalty.
#[test]
fn time_penalty_isolation() {
    let scene = reward_scene();
    let mut tracker = tracker(&scene).with_time_penalty(DEFAULT_TIME_PENALTY);
    for _ in 0..5 {
        let r = tracker.step_reward(&scene);
        assert!((r - (-DEFAULT_TIME_PENALTY)).abs() < f32::EPSILON);
    }
}

/// A goal step scores +100 and suppresses the time penalty for that step.
#[test]
fn goal_step_suppresses_time_penalty() {
    let mut scene = reward_scene();
    let mut tracker = tracker(&scene).with_time_penalty(DEFAULT_TIME_PENALTY);

    scene.set_position(target(&scene, 0), GOAL_POS);
    let r = tracker.step_reward(&scene);
    assert!((r - GOAL_REWARD).abs() < f32::EPSILON);
    assert_eq!(tracker.remaining_targets().len(), 2);
}

/// Deltas are additive within one step: with two targets already cleared,
/// a step that detects the last target while the gripper touches the table
/// scores 100 - 20 + 500.
#[test]
fn reward_additivity() {
    let mut scene = reward_scene();
    let mut tracker = tracker(&scene);

    scene.set_position(target(&scene, 0), GOAL_POS);
    scene.set_position(target(&scene, 1), GOAL_POS);
    assert_eq!(tracker.step_reward(&scene), GOAL_REWARD);
    assert_eq!(tracker.remaining_targets().len(), 1);

    let map = RoleMap::default();
    let table = scene.require(&map.table[0]).unwrap();
    let finger = scene.require(&map.gripper_parts[1]).unwrap();
    scene.set_colliding(table, finger, true);
    scene.set_position(target(&scene, 2), GOAL_POS);

    let r = tracker.step_reward(&scene);
    let expected = GOAL_REWARD - TABLE_COLLISION_PENALTY + FINISHED_REWARD;
    assert!((r - expected).abs() < f32::EPSILON);
    assert!(tracker.check_finished());
}

/// Distractor contact is its own penalty, independent of the others.
#[test]
fn distractor_collision_penalty() {
    let mut scene = reward_scene();
    let mut tracker = tracker(&scene);

    let map = RoleMap::default();
    let distractor = scene.require(&map.distractors[0]).unwrap();
    let gripper = scene.require(&map.gripper_parts[0]).unwrap();
    scene.set_colliding(distractor, gripper, true);

    let r = tracker.step_reward(&scene);
    assert!((r - (-DISTRACTOR_COLLISION_PENALTY)).abs() < f32::EPSILON);
}

/// Two targets arriving in the same step are both removed, score a single
/// +100, and the remaining set shrinks by two.
#[test]
fn simultaneous_arrivals_both_removed() {
    let mut scene = reward_scene();
    let mut tracker = tracker(&scene);

    scene.set_position(target(&scene, 0), GOAL_POS);
    scene.set_position(target(&scene, 1), GOAL_POS);
    let r = tracker.step_reward(&scene);
    assert!((r - GOAL_REWARD).abs() < f32::EPSILON);
    assert_eq!(tracker.remaining_targets().len(), 1);
}

/// The remaining-targets set is non-increasing and hits zero exactly when
/// `check_finished` first reports true; from then on every step includes
/// the completion bonus.
#[test]
fn finished_bonus_repeats() {
    let mut scene = reward_scene();
    let mut tracker = tracker(&scene);

    let mut last_len = tracker.remaining_targets().len();
    for i in 0..3 {
        assert!(!tracker.check_finished());
        scene.set_position(target(&scene, i), GOAL_POS);
        tracker.step_reward(&scene);
        let len = tracker.remaining_targets().len();
        assert!(len < last_len);
        last_len = len;
    }
    assert!(tracker.check_finished());

    for _ in 0..3 {
        let r = tracker.step_reward(&scene);
        // Cleared targets still sit in the goal area, so each later step
        // re-scores the goal check on an empty remaining set: no +100,
        // just the bonus.
        assert!((r - FINISHED_REWARD).abs() < f32::EPSILON);
    }
}
