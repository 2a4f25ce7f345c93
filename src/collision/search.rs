//! Collision time search for two linearly moving 2D points.
//!
//! Provides the fixed-step forward scan used by the runtime path plus a
//! closed-form solver used by tests and the benchmark as an exact
//! cross-check. Both assume straight-line, constant-velocity motion with
//! no forces and no response before detection.

use crate::collision::objects::{NVec2, Object};
use crate::collision::params::Parameters;

/// The detected collision instant. `point` is the first object's position
/// at `t`, taken as the shared impact point.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub t: f64,
    pub point: NVec2,
}

/// Scan forward in time until the two objects are within `merge_t` of each
/// other, or `t_end` is reached.
///
/// Advances `t` from 0 by `h0`; at each step both positions are evaluated
/// as `x + v t` and compared. Resolution is `h0` and cost is
/// `O(t_end / h0)`. The distance-squared is quadratic in `t`, so
/// [`find_collision_closed_form`] answers the same question in O(1); the
/// scan is kept as the canonical path because its step-quantized answer is
/// the observed behavior of the model.
///
/// `None` means no approach within tolerance before the horizon. That is a
/// valid negative outcome, not a failure.
pub fn find_collision(o1: &Object, o2: &Object, params: &Parameters) -> Option<CollisionEvent> {
    let mut t = 0.0;
    while t <= params.t_end {
        let p1 = o1.position_at(t);
        let p2 = o2.position_at(t);
        if (p1 - p2).norm() < params.merge_t {
            return Some(CollisionEvent { t, point: p1 });
        }
        t += params.h0;
    }
    None
}

/// Solve for the earliest non-negative time at which the separation equals
/// `merge_t`, without stepping.
///
/// With `r0 = x1 - x2` and `w = v1 - v2`, the squared separation is
/// `|r0 + w t|^2`, a quadratic in `t`:
///
/// ```text
/// (w.w) t^2 + 2 (r0.w) t + (r0.r0 - merge_t^2) = 0
/// ```
///
/// The smaller root is the moment the bodies first close to the tolerance.
/// Exact up to floating error. Tangential approaches that only ever reach
/// a separation of exactly `merge_t` are rejected, matching the scan's
/// strict `< merge_t` test.
pub fn find_collision_closed_form(
    o1: &Object,
    o2: &Object,
    params: &Parameters,
) -> Option<CollisionEvent> {
    let r0 = o1.position() - o2.position();
    let w = o1.velocity() - o2.velocity();

    let a = w.dot(&w);
    let b = 2.0 * r0.dot(&w);
    let c = r0.dot(&r0) - params.merge_t * params.merge_t;

    // Already within tolerance at t = 0
    if c < 0.0 {
        return Some(CollisionEvent {
            t: 0.0,
            point: o1.position(),
        });
    }

    // Zero relative velocity: the separation never changes
    if a == 0.0 {
        return None;
    }

    let disc = b * b - 4.0 * a * c;
    if disc <= 0.0 {
        // Closest approach stays outside the tolerance. Exact tangency
        // (disc == 0) only touches merge_t without going below it, which
        // the scan's strict inequality never accepts either
        return None;
    }

    // Earliest crossing; the bodies must still be converging (b < 0 when
    // the relative velocity points inward), otherwise the root is behind us
    let t = (-b - disc.sqrt()) / (2.0 * a);
    if t < 0.0 || t > params.t_end {
        return None;
    }

    Some(CollisionEvent {
        t,
        point: o1.position_at(t),
    })
}
