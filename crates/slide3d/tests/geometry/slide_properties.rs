use slide3d::bounding_volume::{Aabb, BoundingVolume};
use slide3d::math::{Point, Real, Vector};
use slide3d::motion::{resolve_motion, MotionStatus, SlideOptions};
use slide3d::query::{BodyHandle, StaticBody};

fn body(id: usize, center: Point<Real>, half_extents: Vector<Real>) -> StaticBody {
    StaticBody::new(
        BodyHandle::from_raw_parts(id),
        Aabb::from_half_extents(center, half_extents),
    )
}

fn floor() -> StaticBody {
    body(0, Point::new(0.0, -1.0, 0.0), Vector::new(100.0, 1.0, 100.0))
}

/// A floor with a wall whose face is at `x = 3`.
fn corner() -> Vec<StaticBody> {
    vec![
        floor(),
        body(1, Point::new(4.0, 5.0, 0.0), Vector::new(1.0, 5.0, 100.0)),
    ]
}

fn unit_box() -> Aabb {
    Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0))
}

#[test]
fn flat_floor_keeps_horizontal_motion() {
    let options = SlideOptions {
        preserve_speed: false,
        ..SlideOptions::default()
    };
    let out = resolve_motion(
        &unit_box(),
        &Point::new(0.0, 3.0, 0.0),
        &Vector::new(2.0, -4.0, 1.0),
        &vec![floor()],
        None,
        &options,
    );

    assert_eq!(out.status, MotionStatus::Clear);
    assert_eq!(out.bounces, 1);
    assert!(relative_eq!(
        out.displacement,
        Vector::new(2.0, -2.0, 1.0),
        epsilon = 1.0e-4
    ));
}

#[test]
fn flat_floor_keeps_heading_when_preserving_speed() {
    let out = resolve_motion(
        &unit_box(),
        &Point::new(0.0, 3.0, 0.0),
        &Vector::new(2.0, -4.0, 1.0),
        &vec![floor()],
        None,
        &SlideOptions::default(),
    );

    let horizontal = Vector::new(out.displacement.x, 0.0, out.displacement.z);
    assert!(relative_eq!(out.displacement.y, -2.0, epsilon = 1.0e-4));
    assert!(relative_eq!(
        horizontal.normalize(),
        Vector::new(2.0, 0.0, 1.0).normalize(),
        epsilon = 1.0e-4
    ));
    assert!(horizontal.norm() > Vector::<Real>::new(2.0, 0.0, 1.0).norm());
}

#[test]
fn corner_stops_against_both_surfaces() {
    let out = resolve_motion(
        &unit_box(),
        &Point::new(0.0, 2.0, 0.0),
        &Vector::new(10.0, -10.0, 0.0),
        &corner(),
        None,
        &SlideOptions::default(),
    );
    let options = SlideOptions::default();
    let end = Point::new(0.0, 2.0, 0.0) + out.displacement;

    assert!(out.sweeps() <= options.max_bounces + 1);
    assert_eq!(out.status, MotionStatus::Clear);
    assert_eq!(out.bounces, 2);
    assert_eq!(out.last_normal, Some(-Vector::x()));
    assert!(relative_eq!(end, Point::new(2.0, 1.0, 0.0), epsilon = 1.0e-4));
}

#[test]
fn corner_exhausts_a_small_bounce_budget() {
    let options = SlideOptions {
        max_bounces: 1,
        ..SlideOptions::default()
    };
    let out = resolve_motion(
        &unit_box(),
        &Point::new(0.0, 2.0, 0.0),
        &Vector::new(10.0, -10.0, 0.0),
        &corner(),
        None,
        &options,
    );

    assert_eq!(out.status, MotionStatus::Exhausted);
    assert_eq!(out.sweeps(), options.max_bounces + 1);
    assert!(relative_eq!(
        out.displacement,
        Vector::new(2.0, -1.0, 0.0),
        epsilon = 1.0e-4
    ));
}

#[test]
fn resolved_motion_never_enters_static_bodies() {
    let mut rng = oorandom::Rand32::new(2024);
    let options = SlideOptions::default();
    let mut rand_in = |min: Real, max: Real| min + (max - min) * rng.rand_float() as Real;

    let mut registry = vec![floor()];
    for id in 1..12 {
        let center = Point::new(
            rand_in(-15.0, 15.0),
            rand_in(0.0, 6.0),
            rand_in(-15.0, 15.0),
        );
        let half_extents = Vector::new(
            rand_in(0.2, 3.0),
            rand_in(0.2, 3.0),
            rand_in(0.2, 3.0),
        );
        registry.push(body(id, center, half_extents));
    }

    let moving = Aabb::from_half_extents(Point::origin(), Vector::new(0.4, 0.9, 0.4));
    let mut tested = 0;

    for _ in 0..2000 {
        let start = Point::new(
            rand_in(-15.0, 15.0),
            rand_in(1.0, 8.0),
            rand_in(-15.0, 15.0),
        );
        let start_box = Aabb::from_half_extents(start, moving.half_extents());

        if registry
            .iter()
            .any(|b| start_box.loosened(0.1).intersects(&b.aabb))
        {
            continue;
        }

        let velocity = Vector::new(
            rand_in(-20.0, 20.0),
            rand_in(-20.0, 20.0),
            rand_in(-20.0, 20.0),
        );
        let out = resolve_motion(&moving, &start, &velocity, &registry, None, &options);
        let end_box = start_box.translated(&out.displacement);
        tested += 1;

        assert!(out.sweeps() <= options.max_bounces + 1);

        for b in &registry {
            assert!(
                !end_box.tightened(2.0 * options.skin_width).overlaps(&b.aabb),
                "box starting at {:?} with velocity {:?} ended inside {:?}",
                start,
                velocity,
                b
            );
        }
    }

    assert!(tested > 100);
}
