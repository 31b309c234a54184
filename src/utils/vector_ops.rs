use crate::math::{Real, Vector, DIM};
use crate::utils::NORMALIZE_EPSILON;

/// Normalizes `v`, or returns the zero vector if its norm is not greater
/// than [`NORMALIZE_EPSILON`].
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(NORMALIZE_EPSILON).unwrap_or_else(Vector::zeros)
}

/// Removes from `v` its component along the unit vector `normal`.
///
/// The result lies on the plane orthogonal to `normal`.
#[inline]
pub fn project_on_plane(v: &Vector<Real>, normal: &Vector<Real>) -> Vector<Real> {
    v - normal * v.dot(normal)
}

/// Component-wise helpers missing from nalgebra's vectors.
pub trait VectorOps {
    /// The index and value of the largest component, the first one winning ties.
    fn imax_first(&self) -> (usize, Real);
    /// Does every component satisfy `pred`?
    fn all_components(&self, pred: impl Fn(Real) -> bool) -> bool;
}

impl VectorOps for Vector<Real> {
    #[inline]
    fn imax_first(&self) -> (usize, Real) {
        let mut best = (0, self[0]);

        for i in 1..DIM {
            // Strict comparison: on exact ties the earlier axis stays.
            if self[i] > best.1 {
                best = (i, self[i]);
            }
        }

        best
    }

    #[inline]
    fn all_components(&self, pred: impl Fn(Real) -> bool) -> bool {
        self.iter().all(|e| pred(*e))
    }
}
