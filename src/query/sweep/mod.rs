//! Implementation details of the `sweep_aabb_aabb` and `sweep_test` functions.

pub use self::sweep_aabb_aabb::{sweep_aabb_aabb, SweepHit, SweepOptions};
pub use self::sweep_registry::sweep_test;

mod sweep_aabb_aabb;
mod sweep_registry;
