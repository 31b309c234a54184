use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DIM};
use crate::utils::{VectorOps, NORMALIZE_EPSILON};
use num::Zero;

/// The result of a swept test between a moving box and a static box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepHit {
    /// The fraction of the displacement at which both boxes first touch.
    pub time_of_impact: Real,
    /// The contact normal, pointing away from the static box.
    ///
    /// This is always a coordinate axis: exactly one component is non-zero, and its sign is
    /// opposite to the displacement along that axis.
    pub normal: Vector<Real>,
    /// The gap between both boxes along the contact axis, before the motion starts.
    ///
    /// Every component is non-negative and only the component of the contact axis is non-zero.
    pub distance: Vector<Real>,
}

impl SweepHit {
    /// The index of the coordinate axis the contact normal is aligned with.
    #[inline]
    pub fn axis(&self) -> usize {
        self.normal.iamax()
    }

    /// The gap between both boxes along the contact axis.
    #[inline]
    pub fn gap(&self) -> Real {
        self.distance[self.axis()]
    }
}

/// Configuration of the swept tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepOptions {
    /// The maximum time of impact that can be reported, as a fraction of the displacement.
    ///
    /// The default value `1.0` only reports contacts occurring within the displacement.
    pub max_time_of_impact: Real,
}

impl SweepOptions {
    /// Creates a [`SweepOptions`] with the given maximum time of impact.
    pub fn with_max_time_of_impact(max_time_of_impact: Real) -> Self {
        Self { max_time_of_impact }
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            max_time_of_impact: 1.0,
        }
    }
}

/// Time of impact of a box moving along `displacement` against a static box.
///
/// This is the per-axis slab method: on each axis, the entry (resp. exit) time is the time at
/// which the leading (resp. trailing) face of `moving` reaches the near (resp. far) face of
/// `target`. The boxes touch at the latest entry time, provided it happens before the earliest
/// exit time.
///
/// Returns `None` if:
/// * the displacement norm is not greater than [`NORMALIZE_EPSILON`];
/// * an axis without motion separates both boxes;
/// * the latest entry time is after the earliest exit time;
/// * every entry time is negative (the boxes are moving apart, or already overlap);
/// * the boxes only touch after `options.max_time_of_impact`.
///
/// If several axes share the latest entry time, the contact normal is aligned with the first
/// one in `x, y, z` order.
pub fn sweep_aabb_aabb(
    moving: &Aabb,
    displacement: &Vector<Real>,
    target: &Aabb,
    options: SweepOptions,
) -> Option<SweepHit> {
    if displacement.norm() <= NORMALIZE_EPSILON {
        return None;
    }

    let mut entry_dist = Vector::zeros();
    let mut entry_time = Vector::zeros();
    let mut exit_time = Vector::zeros();

    for i in 0..DIM {
        let vel = displacement[i];

        let (entry, exit) = if vel > 0.0 {
            (
                target.mins[i] - moving.maxs[i],
                target.maxs[i] - moving.mins[i],
            )
        } else {
            (
                target.maxs[i] - moving.mins[i],
                target.mins[i] - moving.maxs[i],
            )
        };

        entry_dist[i] = entry;

        if vel.is_zero() {
            // This axis never constrains the time of impact, but the boxes
            // can only meet if they already overlap on it.
            if !moving.overlaps_on_axis(target, i) {
                return None;
            }

            entry_time[i] = -Real::INFINITY;
            exit_time[i] = Real::INFINITY;
        } else {
            entry_time[i] = entry / vel;
            exit_time[i] = exit / vel;
        }
    }

    let (axis, longest_entry) = entry_time.imax_first();
    let shortest_exit = exit_time.x.min(exit_time.y).min(exit_time.z);

    if longest_entry > shortest_exit
        || entry_time.all_components(|t| t < 0.0)
        || longest_entry > options.max_time_of_impact
    {
        return None;
    }

    let mut normal = Vector::zeros();
    normal[axis] = -displacement[axis].signum();
    let mut distance = Vector::zeros();
    distance[axis] = entry_dist[axis].abs();

    Some(SweepHit {
        time_of_impact: longest_entry,
        normal,
        distance,
    })
}
