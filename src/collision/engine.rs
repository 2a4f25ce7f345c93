//! High-level runtime engine settings
//!
//! Selects dimension (2D/3D) and the collision mode applied when a
//! `Scenario` is resolved

use crate::collision::resolver::CollisionMode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub dimension: bool,      // false = 2D, true = 3D
    pub mode: CollisionMode,  // elastic or inelastic
}
