//! Motion resolution of boxes moving among static bodies.

pub use self::collide_and_slide::{resolve_motion, MotionOutput, MotionStatus, SlideOptions};

mod collide_and_slide;
