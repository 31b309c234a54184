use crate::math::{Isometry, Real, Vector};
use alloc::string::String;

/// The handle of a node of a [`SceneGraph`](crate::scene::SceneGraph).
///
/// Handles are indices in the scene arena: the handle of a removed node may be reused by a node
/// inserted afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    /// Creates a handle from its raw arena index.
    #[inline]
    pub const fn from_raw_parts(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index of this handle.
    #[inline]
    pub const fn into_raw_parts(self) -> usize {
        self.0
    }
}

/// The kind of a [`Body`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BodyKind {
    /// A body that never moves by itself. Other bodies collide with it.
    Static,
    /// A body moved by the [`PhysicsPipeline`](crate::pipeline::PhysicsPipeline).
    ///
    /// Other moving bodies collide with it too.
    Character {
        /// The world-space velocity of this body, in units per second.
        velocity: Vector<Real>,
    },
}

/// A box-shaped collidable body attached to a scene node.
///
/// The box is centered at the world origin of its node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    /// The kind of this body.
    pub kind: BodyKind,
    /// The half-extents of the box, in the node's local frame. Each must be non-negative.
    pub half_extents: Vector<Real>,
}

impl Body {
    /// A static body with the given half-extents.
    pub fn fixed(half_extents: Vector<Real>) -> Self {
        Self {
            kind: BodyKind::Static,
            half_extents,
        }
    }

    /// A character body with the given half-extents, initially at rest.
    pub fn character(half_extents: Vector<Real>) -> Self {
        Self {
            kind: BodyKind::Character {
                velocity: Vector::zeros(),
            },
            half_extents,
        }
    }

    /// Is this a character body?
    #[inline]
    pub fn is_character(&self) -> bool {
        matches!(self.kind, BodyKind::Character { .. })
    }

    /// The velocity of this body if it is a character.
    #[inline]
    pub fn velocity(&self) -> Option<Vector<Real>> {
        match self.kind {
            BodyKind::Character { velocity } => Some(velocity),
            BodyKind::Static => None,
        }
    }

    /// Sets the velocity of a character body.
    ///
    /// Returns `false` and does nothing if this body is static.
    pub fn set_velocity(&mut self, new_velocity: Vector<Real>) -> bool {
        match &mut self.kind {
            BodyKind::Character { velocity } => {
                *velocity = new_velocity;
                true
            }
            BodyKind::Static => false,
        }
    }
}

/// A node of a [`SceneGraph`](crate::scene::SceneGraph).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// A name, for debugging purpose.
    pub name: String,
    /// The pose of this node relative to its parent.
    pub local: Isometry<Real>,
    /// The collidable body carried by this node, if any.
    pub body: Option<Body>,
}

impl SceneNode {
    /// A node without body at the given local pose.
    pub fn new(name: impl Into<String>, local: Isometry<Real>) -> Self {
        Self {
            name: name.into(),
            local,
            body: None,
        }
    }

    /// A node carrying a body at the given local pose.
    pub fn with_body(name: impl Into<String>, local: Isometry<Real>, body: Body) -> Self {
        Self {
            name: name.into(),
            local,
            body: Some(body),
        }
    }

    /// Translates this node in its parent's frame.
    #[inline]
    pub fn translate(&mut self, displacement: &Vector<Real>) {
        self.local.translation.vector += displacement;
    }
}
