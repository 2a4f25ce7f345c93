//! Core value types for the two-body collision model.
//!
//! Defines 2D and 3D physical objects:
//! - `Object`  using `NVec2` (2d, carries a position for the time search)
//! - `Object3` using `NVec3` (3d, velocity only)
//!
//! Speed, momentum and kinetic energy are derived once at construction and
//! never recomputed. Fields are private so the mass-positivity invariant
//! cannot be broken after `new` succeeds.

use nalgebra::{Vector2, Vector3};

use crate::collision::error::CollisionError;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    m: f64,                 // mass
    v: NVec2,               // velocity
    x: NVec2,               // initial position
    speed: f64,             // |v|
    momentum: NVec2,        // m * v
    kinetic_energy: f64,    // 0.5 * m * |v|^2
}

impl Object {
    /// Build a 2D object from mass, velocity and initial position.
    /// Fails with `InvalidInput` unless `mass > 0` (NaN is rejected too).
    pub fn new(m: f64, v: NVec2, x: NVec2) -> Result<Self, CollisionError> {
        check_mass(m)?;
        let speed = v.norm();
        Ok(Self {
            m,
            v,
            x,
            speed,
            momentum: m * v,
            kinetic_energy: 0.5 * m * speed * speed,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn momentum(&self) -> NVec2 {
        self.momentum
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    /// Position at time `t` under straight-line, constant-velocity motion.
    pub fn position_at(&self, t: f64) -> NVec2 {
        self.x + self.v * t
    }
}

// =========================================================================================
// 3d stuff below
// =========================================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Object3 {
    m: f64,                 // mass
    v: NVec3,               // velocity
    speed: f64,             // |v|, all three components squared
    momentum: NVec3,        // m * v
    kinetic_energy: f64,    // 0.5 * m * |v|^2
}

impl Object3 {
    /// Build a 3D object from mass and velocity.
    ///
    /// Speed is `sqrt(vx^2 + vy^2 + vz^2)`. The program this model comes
    /// from dropped the square on the z component; that was a defect, not
    /// intended behavior, so the dimensionally consistent norm is used here.
    pub fn new(m: f64, v: NVec3) -> Result<Self, CollisionError> {
        check_mass(m)?;
        let speed = v.norm();
        Ok(Self {
            m,
            v,
            speed,
            momentum: m * v,
            kinetic_energy: 0.5 * m * speed * speed,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn momentum(&self) -> NVec3 {
        self.momentum
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }
}

/// Shared mass validation for both dimensionalities.
fn check_mass(m: f64) -> Result<(), CollisionError> {
    // `m > 0.0` is false for NaN, so this single comparison covers both
    if m > 0.0 {
        Ok(())
    } else {
        Err(CollisionError::InvalidInput(format!(
            "mass must be strictly positive, got {m}"
        )))
    }
}
