use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Real, Vector};
use crate::query::{sweep_aabb_aabb, BodyHandle, StaticRegistry, SweepHit, SweepOptions};

/// Earliest contact of a box moving along `displacement` against the bodies of a registry.
///
/// Every body of `registry` except `exclude` is tested with [`sweep_aabb_aabb`], and the hit
/// with the smallest time of impact is returned together with the handle of the body that was
/// hit. If two bodies are hit at exactly the same time, the first one visited by the registry
/// wins.
///
/// Bodies that do not intersect the volume swept by `moving` are discarded before running the
/// slab test.
pub fn sweep_test<R: StaticRegistry + ?Sized>(
    moving: &Aabb,
    displacement: &Vector<Real>,
    registry: &R,
    exclude: Option<BodyHandle>,
    options: SweepOptions,
) -> Option<(BodyHandle, SweepHit)> {
    let broad_phase = options
        .max_time_of_impact
        .is_finite()
        .then(|| moving.swept(&(displacement * options.max_time_of_impact.max(0.0))));
    let mut best: Option<(BodyHandle, SweepHit)> = None;

    registry.for_each_static_body(exclude, &mut |body| {
        if let Some(swept) = &broad_phase {
            if !swept.intersects(&body.aabb) {
                return;
            }
        }

        if let Some(hit) = sweep_aabb_aabb(moving, displacement, &body.aabb, options) {
            let is_earlier = best
                .as_ref()
                .map(|(_, best_hit)| hit.time_of_impact < best_hit.time_of_impact)
                .unwrap_or(true);

            if is_earlier {
                best = Some((body.handle, hit));
            }
        }
    });

    best
}
