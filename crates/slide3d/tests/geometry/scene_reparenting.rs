use slide3d::math::{Isometry, Point, Real, Vector};
use slide3d::pipeline::PhysicsPipeline;
use slide3d::query::{sweep_test, StaticRegistry, SweepOptions};
use slide3d::scene::{Body, NodeHandle, SceneError, SceneGraph, SceneNode};

fn at(x: Real, y: Real, z: Real) -> Isometry<Real> {
    Isometry::translation(x, y, z)
}

fn assert_consistent(scene: &SceneGraph, nodes: &[NodeHandle]) {
    for node in nodes {
        match scene.parent(*node) {
            Some(parent) => {
                assert_eq!(
                    scene.children(parent).iter().filter(|c| *c == node).count(),
                    1
                );
                assert!(!scene.roots().contains(node));
            }
            None => assert!(scene.roots().contains(node)),
        }

        for child in scene.children(*node) {
            assert_eq!(scene.parent(*child), Some(*node));
        }
    }
}

#[test]
fn world_origin_follows_reparenting() {
    let mut scene = SceneGraph::new();
    let platform = scene.insert(SceneNode::new("platform", at(0.0, 5.0, 0.0)));
    let crate_node = scene.insert(SceneNode::new("crate", at(2.0, 0.0, 0.0)));

    assert_eq!(scene.world_origin(crate_node), Some(Point::new(2.0, 0.0, 0.0)));

    scene.set_parent(crate_node, Some(platform)).unwrap();
    assert_eq!(scene.world_origin(crate_node), Some(Point::new(2.0, 5.0, 0.0)));

    scene.get_mut(platform).unwrap().translate(&Vector::new(0.0, 1.0, 0.0));
    assert_eq!(scene.world_origin(crate_node), Some(Point::new(2.0, 6.0, 0.0)));
}

#[test]
fn random_reparenting_keeps_the_hierarchy_consistent() {
    let mut rng = oorandom::Rand32::new(3);
    let mut scene = SceneGraph::new();
    let nodes: Vec<_> = (0..20)
        .map(|i| scene.insert(SceneNode::new(format!("node{}", i), at(i as Real, 0.0, 0.0))))
        .collect();

    for _ in 0..500 {
        let child = nodes[rng.rand_range(0..20) as usize];
        let parent = if rng.rand_range(0..5) == 0 {
            None
        } else {
            Some(nodes[rng.rand_range(0..20) as usize])
        };

        match scene.set_parent(child, parent) {
            Ok(()) => assert_eq!(scene.parent(child), parent),
            Err(SceneError::CycleDetected { child: c, parent: p }) => {
                assert_eq!(c, child);
                assert_eq!(Some(p), parent);
                assert!(scene.ancestors_and_self(p).any(|h| h == child));
            }
            Err(err) => panic!("unexpected error: {}", err),
        }

        assert_consistent(&scene, &nodes);
    }

    // Every node is reachable from the roots exactly once.
    let mut visited = 0;
    scene.traverse_depth_first(|_, _, _| visited += 1);
    assert_eq!(visited, nodes.len());
}

#[test]
fn moved_child_body_is_seen_at_its_new_place() {
    let mut scene = SceneGraph::new();
    let left = scene.insert(SceneNode::new("left", at(-10.0, 0.0, 0.0)));
    let right = scene.insert(SceneNode::new("right", at(10.0, 0.0, 0.0)));
    let block = scene
        .insert_child(
            left,
            SceneNode::with_body("block", at(0.0, -2.0, 0.0), Body::fixed(Vector::repeat(1.0))),
        )
        .unwrap();
    let probe = slide3d::bounding_volume::Aabb::from_half_extents(
        Point::new(10.0, 2.0, 0.0),
        Vector::repeat(0.5),
    );
    let fall = Vector::new(0.0, -5.0, 0.0);

    assert!(sweep_test(&probe, &fall, &scene, None, SweepOptions::default()).is_none());

    scene.set_parent(block, Some(right)).unwrap();
    let (handle, hit) = sweep_test(&probe, &fall, &scene, None, SweepOptions::default())
        .expect("the block is now below the probe");

    assert_eq!(handle, block);
    assert_eq!(hit.normal, Vector::y());

    let mut count = 0;
    scene.for_each_static_body(Some(block), &mut |_| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn reparented_character_moves_from_its_new_place() {
    let mut scene = SceneGraph::new();
    let left = scene.insert(SceneNode::new("left", at(-10.0, 0.0, 0.0)));
    let right = scene.insert(SceneNode::new("right", at(10.0, 0.0, 0.0)));
    let block = scene.insert(SceneNode::with_body(
        "block",
        at(10.0, -2.0, 0.0),
        Body::fixed(Vector::repeat(1.0)),
    ));
    let mut body = Body::character(Vector::repeat(0.5));
    assert!(body.set_velocity(Vector::new(0.0, -5.0, 0.0)));
    let player = scene
        .insert_child(left, SceneNode::with_body("player", at(0.0, 2.0, 0.0), body))
        .unwrap();

    let fall = Vector::new(0.0, -5.0, 0.0);
    let probe = |scene: &SceneGraph| {
        let collider = scene.collider_aabb(player).unwrap();
        sweep_test(&collider, &fall, scene, Some(player), SweepOptions::default())
    };

    assert!(probe(&scene).is_none());

    scene.set_parent(player, Some(right)).unwrap();
    assert_eq!(scene.world_origin(player), Some(Point::new(10.0, 2.0, 0.0)));
    let (handle, hit) = probe(&scene).expect("the player is now above the block");
    assert_eq!(handle, block);
    assert!(relative_eq!(hit.gap(), 2.5));

    let report = PhysicsPipeline::new().step(&mut scene, 1.0);
    assert_eq!(report.motions()[0].1.last_normal, Some(Vector::y()));
    assert!(relative_eq!(
        scene.world_origin(player).unwrap(),
        Point::new(10.0, -0.5, 0.0),
        epsilon = 1.0e-4
    ));
}
