//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel to the
/// coordinate axes, which makes every test against it a handful of coordinate comparisons.
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// Colliders are usually described by a center and non-negative half-extents, see
/// [`Aabb::from_half_extents`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use slide3d::bounding_volume::Aabb;
/// use slide3d::math::{Point, Vector};
///
/// let aabb = Aabb::from_half_extents(Point::new(5.0, 0.0, 0.0), Vector::new(5.0, 3.0, 4.0));
///
/// assert_eq!(aabb.mins, Point::new(0.0, -3.0, -4.0));
/// assert_eq!(aabb.maxs, Point::new(10.0, 3.0, 4.0));
/// assert_eq!(aabb.center(), Point::new(5.0, 0.0, 0.0));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        debug_assert!(
            na::partial_le(&mins, &maxs),
            "The AABB minimum corner must not exceed its maximum corner."
        );
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    ///
    /// Each half-extent must be non-negative.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Computes the world-space AABB of a box with the given half-extents positioned at `pos`.
    ///
    /// Rotations are taken into account conservatively: the result encloses the rotated box.
    #[inline]
    pub fn from_pose(pos: &Isometry<Real>, half_extents: &Vector<Real>) -> Self {
        let rot = pos.rotation.to_rotation_matrix();
        let ws_half_extents = rot.matrix().abs() * half_extents;
        let center = Point::from(pos.translation.vector);
        Self::from_half_extents(center, ws_half_extents)
    }

    /// This AABB translated by the given vector.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// The smallest AABB enclosing `self` at the start and at the end of `displacement`.
    ///
    /// Any box this AABB can touch while moving along `displacement` intersects the result.
    #[inline]
    #[must_use]
    pub fn swept(&self, displacement: &Vector<Real>) -> Self {
        self.merged(&self.translated(displacement))
    }

    /// Strict overlap test: `true` iff both boxes overlap with a non-zero depth on all axes.
    ///
    /// Boxes that merely touch along a face, edge or vertex do not overlap. See
    /// [`BoundingVolume::intersects`] for the inclusive version.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.overlaps_on_axis(other, i))
    }

    /// Strict overlap test of the projections of both boxes on the `axis`-th coordinate axis.
    #[inline]
    pub fn overlaps_on_axis(&self, other: &Aabb, axis: usize) -> bool {
        self.maxs[axis] > other.mins[axis] && self.mins[axis] < other.maxs[axis]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Shrinks every half-extent by `amount`.
    ///
    /// Half-extents smaller than `amount` collapse to zero at the center instead of inverting
    /// the box.
    #[inline]
    fn tightened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        let half_extents = self.half_extents().map(|e| (e - amount).max(0.0));
        Aabb::from_half_extents(self.center(), half_extents)
    }
}
