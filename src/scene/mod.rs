//! Arena-backed transform hierarchy and the bodies attached to its nodes.

pub use self::error::SceneError;
pub use self::node::{Body, BodyKind, NodeHandle, SceneNode};
pub use self::scene_graph::SceneGraph;

mod error;
mod node;
mod scene_graph;
