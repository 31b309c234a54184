/*!
slide3d
========

**slide3d** is a small 3-dimensional collision library written with the
rust programming language. It resolves the motion of axis-aligned boxes
moving through a scene of static boxes:

* [`query::sweep_aabb_aabb`] computes the time of impact of a moving box
  against a single static box with the per-axis slab method.
* [`query::sweep_test`] finds the earliest impact against a whole
  [`query::StaticRegistry`].
* [`motion::resolve_motion`] turns a desired displacement into a safe,
  wall-following one (collide-and-slide).
* [`scene::SceneGraph`] is an arena-backed transform hierarchy whose body
  nodes form a static registry, and [`pipeline::PhysicsPipeline`] drives the
  character bodies of such a scene once per frame.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate alloc;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod motion;
pub mod pipeline;
pub mod query;
pub mod scene;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
