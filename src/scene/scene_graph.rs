use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::query::{StaticBody, StaticRegistry};
use crate::scene::{NodeHandle, SceneError, SceneNode};
use alloc::vec::Vec;
use slab::Slab;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct NodeEntry {
    node: SceneNode,
    parent: Option<NodeHandle>,
    children: SmallVec<[NodeHandle; 4]>,
}

/// A transform hierarchy of [`SceneNode`]s stored in an arena.
///
/// Each node has at most one parent, and the graph never contains a cycle. Nodes without parent
/// are the roots of the scene. The world pose of a node is recomputed from its ancestor chain
/// on every query, so any change of a local pose or of a parent is immediately visible.
///
/// The body nodes of the graph form a [`StaticRegistry`], visited depth-first from the roots in
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Slab<NodeEntry>,
    roots: Vec<NodeHandle>,
}

impl SceneGraph {
    /// An empty scene graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of nodes of this graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Does this graph contain no node?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Does `handle` identify a node of this graph?
    #[inline]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains(handle.0)
    }

    /// Inserts a new root node.
    pub fn insert(&mut self, node: SceneNode) -> NodeHandle {
        let handle = NodeHandle(self.nodes.insert(NodeEntry {
            node,
            parent: None,
            children: SmallVec::new(),
        }));
        self.roots.push(handle);
        handle
    }

    /// Inserts a new node as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: NodeHandle,
        node: SceneNode,
    ) -> Result<NodeHandle, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::InvalidHandle(parent));
        }

        let handle = NodeHandle(self.nodes.insert(NodeEntry {
            node,
            parent: Some(parent),
            children: SmallVec::new(),
        }));
        self.nodes[parent.0].children.push(handle);
        Ok(handle)
    }

    /// Moves `child` under `parent`, or makes it a root if `parent` is `None`.
    ///
    /// The child is removed from the children of its previous parent and appended to the
    /// children of the new one. Its local pose is kept as is, so its world pose changes.
    /// Fails without modifying the graph if a handle is invalid or if `parent` is `child` or one
    /// of its descendants.
    pub fn set_parent(
        &mut self,
        child: NodeHandle,
        parent: Option<NodeHandle>,
    ) -> Result<(), SceneError> {
        if !self.contains(child) {
            return Err(SceneError::InvalidHandle(child));
        }

        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(SceneError::InvalidHandle(parent));
            }

            if self.ancestors_and_self(parent).any(|h| h == child) {
                return Err(SceneError::CycleDetected { child, parent });
            }
        }

        if self.nodes[child.0].parent == parent {
            return Ok(());
        }

        self.detach(child);
        self.nodes[child.0].parent = parent;

        match parent {
            Some(parent) => self.nodes[parent.0].children.push(child),
            None => self.roots.push(child),
        }

        Ok(())
    }

    /// Removes a node and all its descendants.
    ///
    /// Returns the removed node itself, or `None` if `handle` is invalid.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<SceneNode> {
        if !self.contains(handle) {
            return None;
        }

        self.detach(handle);
        let removed = self.nodes.remove(handle.0);
        let mut stack: Vec<NodeHandle> = removed.children.to_vec();

        while let Some(descendant) = stack.pop() {
            let entry = self.nodes.remove(descendant.0);
            stack.extend_from_slice(&entry.children);
        }

        Some(removed.node)
    }

    /// The node identified by `handle`.
    #[inline]
    pub fn get(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle.0).map(|entry| &entry.node)
    }

    /// The node identified by `handle`.
    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle.0).map(|entry| &mut entry.node)
    }

    /// The parent of a node, or `None` for roots and invalid handles.
    #[inline]
    pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(handle.0).and_then(|entry| entry.parent)
    }

    /// The children of a node, in insertion order. Empty for invalid handles.
    #[inline]
    pub fn children(&self, handle: NodeHandle) -> &[NodeHandle] {
        self.nodes
            .get(handle.0)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    /// The nodes without parent, in insertion order.
    #[inline]
    pub fn roots(&self) -> &[NodeHandle] {
        &self.roots
    }

    /// Iterates through `handle` then all its ancestors up to the root.
    pub fn ancestors_and_self(&self, handle: NodeHandle) -> impl Iterator<Item = NodeHandle> + '_ {
        let first = self.contains(handle).then_some(handle);
        core::iter::successors(first, move |h| self.parent(*h))
    }

    /// Visits every node depth-first from the roots, in insertion order, together with its world
    /// pose.
    pub fn traverse_depth_first(&self, mut f: impl FnMut(NodeHandle, &SceneNode, &Isometry<Real>)) {
        let mut stack: Vec<(NodeHandle, Isometry<Real>)> = self
            .roots
            .iter()
            .rev()
            .map(|h| (*h, Isometry::identity()))
            .collect();

        while let Some((handle, parent_pose)) = stack.pop() {
            let entry = &self.nodes[handle.0];
            let pose = parent_pose * entry.node.local;
            f(handle, &entry.node, &pose);
            stack.extend(entry.children.iter().rev().map(|child| (*child, pose)));
        }
    }

    /// The pose of a node relative to the world frame.
    pub fn world_pose(&self, handle: NodeHandle) -> Option<Isometry<Real>> {
        let mut pose = self.get(handle)?.local;
        let mut curr = self.parent(handle);

        while let Some(ancestor) = curr {
            let entry = &self.nodes[ancestor.0];
            pose = entry.node.local * pose;
            curr = entry.parent;
        }

        Some(pose)
    }

    /// The world-space position of the origin of a node.
    #[inline]
    pub fn world_origin(&self, handle: NodeHandle) -> Option<Point<Real>> {
        self.world_pose(handle)
            .map(|pose| Point::from(pose.translation.vector))
    }

    /// The world-space AABB of the body carried by a node.
    ///
    /// The AABB is centered at the node's world origin and encloses the body's box rotated by the
    /// node's world rotation.
    pub fn collider_aabb(&self, handle: NodeHandle) -> Result<Aabb, SceneError> {
        let node = self.get(handle).ok_or(SceneError::InvalidHandle(handle))?;
        let body = node.body.as_ref().ok_or(SceneError::NotABody(handle))?;
        let pose = self
            .world_pose(handle)
            .ok_or(SceneError::InvalidHandle(handle))?;
        Ok(Aabb::from_pose(&pose, &body.half_extents))
    }

    fn detach(&mut self, handle: NodeHandle) {
        match self.nodes[handle.0].parent {
            Some(parent) => self.nodes[parent.0].children.retain(|h| *h != handle),
            None => self.roots.retain(|h| *h != handle),
        }
    }
}

impl StaticRegistry for SceneGraph {
    fn for_each_static_body(
        &self,
        exclude: Option<NodeHandle>,
        f: &mut dyn FnMut(StaticBody),
    ) {
        self.traverse_depth_first(|handle, node, pose| {
            if Some(handle) == exclude {
                return;
            }

            if let Some(body) = &node.body {
                f(StaticBody::new(
                    handle,
                    Aabb::from_pose(pose, &body.half_extents),
                ));
            }
        })
    }
}
