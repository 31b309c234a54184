//! Various unsorted geometrical operators.

pub use self::consts::NORMALIZE_EPSILON;
pub use self::vector_ops::{normalize_or_zero, project_on_plane, VectorOps};

mod consts;
mod vector_ops;
