use crate::scene::NodeHandle;

/// Indicates an invalid operation on a [`SceneGraph`](crate::scene::SceneGraph).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The handle does not identify a node of the scene graph.
    #[error("the node {0:?} does not exist.")]
    InvalidHandle(NodeHandle),
    /// Attaching the node to the requested parent would make it its own ancestor.
    #[error("the node {child:?} cannot be attached to {parent:?} which is one of its descendants.")]
    CycleDetected {
        /// The node being reparented.
        child: NodeHandle,
        /// The requested parent.
        parent: NodeHandle,
    },
    /// The node exists but does not carry a body.
    #[error("the node {0:?} has no body.")]
    NotABody(NodeHandle),
}
