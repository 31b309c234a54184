use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// A bounding volume is a cheap conservative approximation of a body: overlap and inclusion tests
/// run in constant time, and two volumes can be merged into one enclosing both. The resolver
/// relies on `loosened`/`tightened` returning new values so colliders are never altered in place.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersect with another one.
    ///
    /// Touching volumes are considered intersecting.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// The smallest bounding volume of this type enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// A copy of this bounding volume enlarged by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;

    /// A copy of this bounding volume shrunk by `amount` in every direction.
    fn tightened(&self, amount: Real) -> Self;
}
