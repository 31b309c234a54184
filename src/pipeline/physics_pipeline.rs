use crate::math::{Real, Vector};
use crate::motion::{resolve_motion, MotionOutput, SlideOptions};
use crate::scene::{NodeHandle, SceneGraph};
use alloc::vec::Vec;

/// The reason why a [`PhysicsPipeline::step`] did not move anything.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The timestep was zero, negative, or NaN.
    NonPositiveTimestep(Real),
    /// Some asynchronous loads are still in flight.
    PendingLoads(usize),
}

/// What a [`PhysicsPipeline::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepReport {
    /// The frame was skipped and the scene left untouched.
    Skipped(SkipReason),
    /// Every character body was moved, in scene order.
    Stepped(Vec<(NodeHandle, MotionOutput)>),
}

impl StepReport {
    /// Was this frame skipped?
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, StepReport::Skipped(_))
    }

    /// The motion resolved for each character body, empty if the frame was skipped.
    pub fn motions(&self) -> &[(NodeHandle, MotionOutput)] {
        match self {
            StepReport::Skipped(_) => &[],
            StepReport::Stepped(motions) => motions,
        }
    }
}

/// Moves the character bodies of a scene graph once per frame.
///
/// Each character body is moved by its velocity times the timestep, through
/// [`resolve_motion`] against every other body of the scene.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhysicsPipeline {
    /// The options of the collide-and-slide resolution of each character.
    pub options: SlideOptions,
    pending_loads: usize,
}

impl PhysicsPipeline {
    /// A pipeline with the default slide options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipeline with the given slide options.
    pub fn with_options(options: SlideOptions) -> Self {
        Self {
            options,
            pending_loads: 0,
        }
    }

    /// Signals that an asynchronous load started. Frames are skipped until it finishes.
    pub fn begin_load(&mut self) {
        self.pending_loads += 1;
    }

    /// Signals that an asynchronous load finished.
    pub fn finish_load(&mut self) {
        if self.pending_loads == 0 {
            log::warn!("finish_load called without a matching begin_load");
        }

        self.pending_loads = self.pending_loads.saturating_sub(1);
    }

    /// The number of asynchronous loads still in flight.
    #[inline]
    pub fn pending_loads(&self) -> usize {
        self.pending_loads
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Nothing happens if `dt` is not positive or if some loads are pending. Otherwise, the
    /// character bodies are moved one after the other, in the depth-first order of the scene:
    /// each one is resolved against the scene as already updated by the previous ones. The
    /// displacement computed in world-space is converted into the parent's frame before being
    /// applied to the local translation of the node.
    pub fn step(&mut self, scene: &mut SceneGraph, dt: Real) -> StepReport {
        if dt <= 0.0 || dt.is_nan() {
            log::debug!("skipping physics step: non-positive timestep {}", dt);
            return StepReport::Skipped(SkipReason::NonPositiveTimestep(dt));
        }

        if self.pending_loads > 0 {
            log::debug!(
                "skipping physics step: {} pending loads",
                self.pending_loads
            );
            return StepReport::Skipped(SkipReason::PendingLoads(self.pending_loads));
        }

        let mut characters: Vec<(NodeHandle, Vector<Real>)> = Vec::new();
        scene.traverse_depth_first(|handle, node, _| {
            if let Some(velocity) = node.body.as_ref().and_then(|body| body.velocity()) {
                characters.push((handle, velocity));
            }
        });

        let mut motions = Vec::with_capacity(characters.len());

        for (handle, velocity) in characters {
            let Ok(collider) = scene.collider_aabb(handle) else {
                continue;
            };

            let output = resolve_motion(
                &collider,
                &collider.center(),
                &(velocity * dt),
                &*scene,
                Some(handle),
                &self.options,
            );

            let local_displacement = match scene.parent(handle).and_then(|p| scene.world_pose(p)) {
                Some(parent_pose) => parent_pose.inverse_transform_vector(&output.displacement),
                None => output.displacement,
            };

            if let Some(node) = scene.get_mut(handle) {
                node.translate(&local_displacement);
            }

            motions.push((handle, output));
        }

        StepReport::Stepped(motions)
    }
}
