//! Post-collision velocity formulas for two bodies.
//!
//! Two interaction kinds for each dimensionality:
//! - elastic: momentum and kinetic energy both conserved,
//! - perfectly inelastic: bodies merge, momentum conserved.
//!
//! The elastic case applies the closed-form two-body 1D formulas to each
//! axis independently. That treats the axes as separate head-on collisions
//! rather than resolving along the actual impact normal. It is a modeling
//! simplification carried over from the source model, not a general
//! 2D/3D elastic solution.

use std::fmt;

use crate::collision::error::CollisionError;
use crate::collision::objects::{NVec2, NVec3, Object, Object3};

/// Which interaction the resolver applies.
/// In YAML: `mode: "elastic"` or `mode: "inelastic"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    Elastic,
    Inelastic,
}

/// Result of resolving a 2D collision. Immutable once computed.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionOutcome {
    /// Both bodies survive with new velocities.
    Elastic { v1: NVec2, v2: NVec2 },
    /// Bodies merge into one with the combined mass.
    Inelastic { mass: f64, v: NVec2 },
}

impl fmt::Display for CollisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elastic { v1, v2 } => write!(
                f,
                "elastic: object 1 leaves with velocity ({}, {}), object 2 with ({}, {})",
                v1.x, v1.y, v2.x, v2.y
            ),
            Self::Inelastic { mass, v } => write!(
                f,
                "inelastic: merged body of mass {} moves with velocity ({}, {})",
                mass, v.x, v.y
            ),
        }
    }
}

/// Resolve a 2D collision between `o1` and `o2` under `mode`.
pub fn resolve(
    mode: CollisionMode,
    o1: &Object,
    o2: &Object,
) -> Result<CollisionOutcome, CollisionError> {
    let (m1, m2) = (o1.mass(), o2.mass());
    let m_total = checked_total_mass(m1, m2)?;
    let (v1, v2) = (o1.velocity(), o2.velocity());

    match mode {
        CollisionMode::Elastic => {
            // Per axis: v1' = ((m1-m2) v1 + 2 m2 v2) / (m1+m2)
            //           v2' = (2 m1 v1 + (m2-m1) v2) / (m1+m2)
            // The expressions are linear per component, so they can be
            // evaluated directly on the nalgebra vectors.
            let v1_new = ((m1 - m2) * v1 + 2.0 * m2 * v2) / m_total;
            let v2_new = (2.0 * m1 * v1 + (m2 - m1) * v2) / m_total;
            Ok(CollisionOutcome::Elastic {
                v1: v1_new,
                v2: v2_new,
            })
        }
        CollisionMode::Inelastic => {
            // Conservation of momentum for a single merged body:
            // v' = (m1 v1 + m2 v2) / (m1 + m2)
            let v_new = (o1.momentum() + o2.momentum()) / m_total;
            Ok(CollisionOutcome::Inelastic {
                mass: m_total,
                v: v_new,
            })
        }
    }
}

// =========================================================================================
// 3d stuff below
// =========================================================================================

/// Result of resolving a 3D collision. Same shape as [`CollisionOutcome`]
/// with three-component vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionOutcome3 {
    Elastic { v1: NVec3, v2: NVec3 },
    Inelastic { mass: f64, v: NVec3 },
}

impl fmt::Display for CollisionOutcome3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elastic { v1, v2 } => write!(
                f,
                "elastic: object 1 leaves with velocity ({}, {}, {}), object 2 with ({}, {}, {})",
                v1.x, v1.y, v1.z, v2.x, v2.y, v2.z
            ),
            Self::Inelastic { mass, v } => write!(
                f,
                "inelastic: merged body of mass {} moves with velocity ({}, {}, {})",
                mass, v.x, v.y, v.z
            ),
        }
    }
}

/// Resolve a 3D collision between `o1` and `o2` under `mode`.
pub fn resolve_3d(
    mode: CollisionMode,
    o1: &Object3,
    o2: &Object3,
) -> Result<CollisionOutcome3, CollisionError> {
    let (m1, m2) = (o1.mass(), o2.mass());
    let m_total = checked_total_mass(m1, m2)?;
    let (v1, v2) = (o1.velocity(), o2.velocity());

    match mode {
        CollisionMode::Elastic => {
            let v1_new = ((m1 - m2) * v1 + 2.0 * m2 * v2) / m_total;
            let v2_new = (2.0 * m1 * v1 + (m2 - m1) * v2) / m_total;
            Ok(CollisionOutcome3::Elastic {
                v1: v1_new,
                v2: v2_new,
            })
        }
        CollisionMode::Inelastic => {
            let v_new = (o1.momentum() + o2.momentum()) / m_total;
            Ok(CollisionOutcome3::Inelastic {
                mass: m_total,
                v: v_new,
            })
        }
    }
}

/// Guard against a vanishing denominator. Object construction already
/// enforces positive masses, so this only trips at the floating boundary.
fn checked_total_mass(m1: f64, m2: f64) -> Result<f64, CollisionError> {
    let m_total = m1 + m2;
    if m_total > 0.0 {
        Ok(m_total)
    } else {
        Err(CollisionError::DegenerateInput(format!(
            "combined mass must be strictly positive, got {m_total}"
        )))
    }
}
