//! Per-frame driver of the character bodies of a scene graph.

pub use self::physics_pipeline::{PhysicsPipeline, SkipReason, StepReport};

mod physics_pipeline;
