use crate::bounding_volume::Aabb;

/// The identity of a collidable body.
///
/// Two bodies are the same body iff their handles are equal. This is the only relation used to
/// keep a moving body from colliding with itself.
pub use crate::scene::NodeHandle as BodyHandle;

/// A collidable body that does not move during a query.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticBody {
    /// The identity of this body.
    pub handle: BodyHandle,
    /// The world-space bounding box of this body.
    pub aabb: Aabb,
}

impl StaticBody {
    /// Creates a new static body.
    #[inline]
    pub fn new(handle: BodyHandle, aabb: Aabb) -> Self {
        Self { handle, aabb }
    }
}

/// A set of static bodies a moving body may strike.
///
/// The registry is only read during a query.
pub trait StaticRegistry {
    /// Calls `f` on every body of this registry except the one identified by `exclude`.
    ///
    /// Only the body with a handle equal to `exclude` is skipped; in particular, bodies related to
    /// it by a parent/child relationship are still visited.
    fn for_each_static_body(&self, exclude: Option<BodyHandle>, f: &mut dyn FnMut(StaticBody));
}

impl StaticRegistry for [StaticBody] {
    fn for_each_static_body(&self, exclude: Option<BodyHandle>, f: &mut dyn FnMut(StaticBody)) {
        for body in self {
            if Some(body.handle) != exclude {
                f(*body);
            }
        }
    }
}

impl StaticRegistry for Vec<StaticBody> {
    #[inline]
    fn for_each_static_body(&self, exclude: Option<BodyHandle>, f: &mut dyn FnMut(StaticBody)) {
        self.as_slice().for_each_static_body(exclude, f)
    }
}
