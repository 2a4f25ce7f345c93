//! Configuration types for loading collision scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! two-body collision scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (dimension, collision mode)
//! - [`ParametersConfig`] – time-search settings (horizon, step, tolerance)
//! - [`ObjectConfig`]     – initial state for each object
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 2D scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   dimension: false        # false -> 2D, true -> 3D
//!   mode: "elastic"         # or "inelastic"
//!
//! parameters:
//!   t_end: 20.0             # search horizon
//!   h0: 0.01                # fixed step size
//!   merge_t: 0.1            # distance tolerance
//!
//! objects:
//!   - x: [ -5.0, 5.0 ]
//!     v: [  1.0, -1.0 ]
//!     m: 1.0
//!   - x: [  4.0, -4.0 ]
//!     v: [ -1.0, 1.0 ]
//!     m: 1.0
//! ```
//!
//! 3D scenarios carry three-component `v` vectors, omit `x` (the 3D variant
//! has no positions and no time search) and may omit `parameters` entirely.
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

use crate::collision::resolver::CollisionMode;

/// Which interaction kind the resolver applies
/// `mode: "elastic"` or `mode: "inelastic"`
#[derive(Deserialize, Debug, Clone)]
pub enum ModeConfig {
    #[serde(rename = "elastic")] // momentum and kinetic energy conserved
    Elastic,

    #[serde(rename = "inelastic")] // bodies merge, momentum conserved, energy lost
    Inelastic,
}

impl From<ModeConfig> for CollisionMode {
    fn from(cfg: ModeConfig) -> Self {
        match cfg {
            ModeConfig::Elastic => CollisionMode::Elastic,
            ModeConfig::Inelastic => CollisionMode::Inelastic,
        }
    }
}

/// High-level engine configuration
/// Controls the structure of the run
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub dimension: bool, // `false` - 2D scenario, `true` - 3D scenario
    pub mode: ModeConfig, // interaction kind applied at resolution
}

/// Time-search parameters for a 2D scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,   // search horizon
    pub h0: f64,      // step size
    pub merge_t: f64, // distance tolerance below which the points collide
}

/// Configuration for a single object's initial state
#[derive(Deserialize, Debug)]
pub struct ObjectConfig {
    pub x: Option<Vec<f64>>, // Initial position (2D scenarios only)
    pub v: Vec<f64>,         // Initial velocity, 2 or 3 components per `dimension`
    pub m: f64,              // Mass of the object, must be positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (dimension, mode)
    pub parameters: Option<ParametersConfig>, // Search settings, defaulted when absent
    pub objects: Vec<ObjectConfig>, // Exactly two objects
}
