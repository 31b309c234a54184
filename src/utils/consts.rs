use crate::math::Real;

/// Vectors with a norm at or below this value are treated as the zero vector.
pub const NORMALIZE_EPSILON: Real = 1.0e-5;
