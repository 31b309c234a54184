//! Non-persistent geometric queries.
//!
//! # General cases
//! The methods provided by this module are:
//!
//! * [`query::sweep_aabb_aabb()`] to compute when a box moving along a displacement first touches
//!   a static box, together with the contact normal and the remaining gap.
//! * [`query::sweep_test()`] to find the earliest such contact against every body of a
//!   [`query::StaticRegistry`].
//!
//! Both are continuous tests: a fast box cannot tunnel through a thin one between the start and
//! the end of its displacement.
//!
//! [`query::sweep_aabb_aabb()`]: crate::query::sweep_aabb_aabb
//! [`query::sweep_test()`]: crate::query::sweep_test
//! [`query::StaticRegistry`]: crate::query::StaticRegistry

pub use self::registry::{BodyHandle, StaticBody, StaticRegistry};
pub use self::sweep::{sweep_aabb_aabb, sweep_test, SweepHit, SweepOptions};

mod registry;
pub mod sweep;
