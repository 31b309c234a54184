use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::query::{sweep_test, BodyHandle, StaticRegistry, SweepOptions};
use crate::utils::{self, NORMALIZE_EPSILON};

/// Configuration of [`resolve_motion`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideOptions {
    /// The maximum number of contacts resolved before the remaining motion is dropped.
    pub max_bounces: usize,
    /// A margin kept between the moving box and the surfaces it slides on.
    ///
    /// The box is shrunk by this amount before each sweep and the sweep is lengthened by the same
    /// amount, so that contacts closer than the margin are still detected despite rounding
    /// errors. It must be smaller than the thinnest static body the box can run into. Negative
    /// values are treated as zero.
    pub skin_width: Real,
    /// If `true`, the motion left after a contact keeps its magnitude once projected on the
    /// contact plane. If `false`, only its tangential component is kept.
    pub preserve_speed: bool,
}

impl SlideOptions {
    /// Creates a [`SlideOptions`] with the default values except for the skin width.
    pub fn with_skin_width(skin_width: Real) -> Self {
        Self {
            skin_width,
            ..Default::default()
        }
    }
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            max_bounces: 5,
            skin_width: 0.015,
            preserve_speed: true,
        }
    }
}

/// The way [`resolve_motion`] terminated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionStatus {
    /// The last sweep did not hit anything: all the remaining motion was applied.
    Clear,
    /// `max_bounces + 1` contacts were resolved and the remaining motion was dropped.
    ///
    /// This typically happens when the box is wedged in a crevice.
    Exhausted,
}

/// The result of [`resolve_motion`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionOutput {
    /// The displacement to apply to the moving body.
    pub displacement: Vector<Real>,
    /// How the resolution terminated.
    pub status: MotionStatus,
    /// The number of contacts the moving box slid along.
    pub bounces: usize,
    /// The normal of the last contact, if there was any.
    pub last_normal: Option<Vector<Real>>,
}

impl MotionOutput {
    /// The number of sweeps performed to compute this output.
    #[inline]
    pub fn sweeps(&self) -> usize {
        match self.status {
            MotionStatus::Clear => self.bounces.saturating_add(1),
            MotionStatus::Exhausted => self.bounces,
        }
    }
}

/// Collide-and-slide: the safe displacement of a box that wants to move along `velocity`.
///
/// The box has the half-extents of `moving` and is centered at `position`. Each step sweeps it
/// along the motion left; on contact the box moves up to the contact surface, the rest of the
/// motion is projected on the contact plane, and the next step starts from there. The motion
/// ends when a sweep hits nothing, or after `options.max_bounces + 1` contacts in which case the
/// motion left is dropped.
///
/// The body identified by `exclude` (usually the moving body itself) is ignored. Neither the
/// registry nor `moving` are modified: applying the returned displacement is up to the caller.
pub fn resolve_motion<R: StaticRegistry + ?Sized>(
    moving: &Aabb,
    position: &Point<Real>,
    velocity: &Vector<Real>,
    registry: &R,
    exclude: Option<BodyHandle>,
    options: &SlideOptions,
) -> MotionOutput {
    let skin = options.skin_width.max(0.0);
    let half_extents = moving.half_extents();
    let mut position = *position;
    let mut velocity = *velocity;
    let mut displacement = Vector::zeros();
    let mut last_normal = None;

    for bounce in 0..=options.max_bounces {
        let collider = Aabb::from_half_extents(position, half_extents).tightened(skin);
        let dir = utils::normalize_or_zero(&velocity);
        let cast = velocity + dir * skin;

        let Some((handle, hit)) =
            sweep_test(&collider, &cast, registry, exclude, SweepOptions::default())
        else {
            return MotionOutput {
                displacement: displacement + velocity,
                status: MotionStatus::Clear,
                bounces: bounce,
                last_normal,
            };
        };

        // Distance to travel along `dir` so that the gap along the normal closes down to the skin.
        let cos = dir.dot(&hit.normal).abs();
        let travel = if cos > NORMALIZE_EPSILON {
            ((hit.gap() - skin) / cos).clamp(0.0, velocity.norm())
        } else {
            0.0
        };
        let snap = dir * travel;
        let leftover = velocity - snap;
        let mut slide = utils::project_on_plane(&leftover, &hit.normal);

        if options.preserve_speed {
            slide = utils::normalize_or_zero(&slide) * leftover.norm();
        }

        log::trace!(
            "bounce {}: hit {:?} at toi {}, normal {:?}, snap {:?}, slide {:?}",
            bounce,
            handle,
            hit.time_of_impact,
            hit.normal,
            snap,
            slide
        );

        displacement += snap;
        position += snap;
        velocity = slide;
        last_normal = Some(hit.normal);
    }

    let bounces = options.max_bounces.saturating_add(1);
    log::debug!(
        "collide-and-slide exhausted after {} bounces, dropping {:?}",
        bounces,
        velocity
    );

    MotionOutput {
        displacement,
        status: MotionStatus::Exhausted,
        bounces,
        last_normal,
    }
}
