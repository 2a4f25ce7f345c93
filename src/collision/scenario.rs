//! Build fully-initialized collision scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles
//! (`Scenario` for 2D, `Scenario3` for 3D) containing:
//! - engine settings (`Engine`)
//! - search parameters (`Parameters`, 2D only)
//! - the two validated objects
//!
//! All input validation happens here: object count, vector dimensionality
//! and mass positivity are checked before any physics runs. The 2D bundle
//! is inserted into Bevy as a `Resource` and consumed by the static plot

use bevy::prelude::Resource;

use crate::collision::engine::Engine;
use crate::collision::error::CollisionError;
use crate::collision::objects::{NVec2, NVec3, Object, Object3};
use crate::collision::params::Parameters;
use crate::configuration::config::{ObjectConfig, ScenarioConfig};

/// Bevy resource representing a fully-initialized 2D collision scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, search parameters and the two objects.
/// The visualization reads it as a `Resource` after the collision has been
/// searched and resolved
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub objects: (Object, Object),
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, CollisionError> {
        let [oc1, oc2] = exactly_two(&cfg.objects)?;

        // Objects: map `ObjectConfig` -> runtime `Object` using nalgebra vectors
        let o1 = build_object_2d(oc1)?;
        let o2 = build_object_2d(oc2)?;

        // Parameters (runtime) from ParametersConfig, defaults when absent
        let parameters = match &cfg.parameters {
            Some(p) => Parameters {
                t_end: p.t_end,
                h0: p.h0,
                merge_t: p.merge_t,
            },
            None => Parameters::default(),
        };
        check_parameters(&parameters)?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            dimension: cfg.engine.dimension,
            mode: cfg.engine.mode.into(),
        };

        Ok(Self {
            engine,
            parameters,
            objects: (o1, o2),
        })
    }
}

fn build_object_2d(oc: &ObjectConfig) -> Result<Object, CollisionError> {
    let v = vec2_from(&oc.v, "velocity")?;
    let x = match &oc.x {
        Some(x) => vec2_from(x, "position")?,
        None => {
            return Err(CollisionError::InvalidInput(
                "2D objects require an initial position `x`".into(),
            ))
        }
    };
    Object::new(oc.m, v, x)
}

fn vec2_from(raw: &[f64], what: &str) -> Result<NVec2, CollisionError> {
    match raw {
        [a, b] => Ok(NVec2::new(*a, *b)),
        _ => Err(CollisionError::InvalidInput(format!(
            "{what} must have 2 components in a 2D scenario, got {}",
            raw.len()
        ))),
    }
}

/// The scan costs `O(t_end / h0)` steps; a zero or negative `h0` would
/// never advance past `t_end`, so bad values are rejected before any
/// search runs
fn check_parameters(p: &Parameters) -> Result<(), CollisionError> {
    // `h0 > 0.0` is false for NaN, finiteness covers the rest
    if !(p.h0 > 0.0 && p.h0.is_finite()) {
        return Err(CollisionError::InvalidInput(format!(
            "step size h0 must be a finite positive number, got {}",
            p.h0
        )));
    }
    if !p.t_end.is_finite() {
        return Err(CollisionError::InvalidInput(format!(
            "search horizon t_end must be finite, got {}",
            p.t_end
        )));
    }
    if !p.merge_t.is_finite() {
        return Err(CollisionError::InvalidInput(format!(
            "merge threshold merge_t must be finite, got {}",
            p.merge_t
        )));
    }
    Ok(())
}

fn exactly_two(objects: &[ObjectConfig]) -> Result<[&ObjectConfig; 2], CollisionError> {
    match objects {
        [a, b] => Ok([a, b]),
        _ => Err(CollisionError::InvalidInput(format!(
            "a scenario needs exactly two objects, got {}",
            objects.len()
        ))),
    }
}

// =========================================================================================
// 3d stuff below
// =========================================================================================

/// A fully-initialized 3D collision scenario
///
/// The 3D variant has no positions and no time search, so it carries only
/// the engine settings and the two objects; the outcome goes to the console
pub struct Scenario3 {
    pub engine: Engine,
    pub objects: (Object3, Object3),
}

impl Scenario3 {
    pub fn build_scenario_3d(cfg: ScenarioConfig) -> Result<Self, CollisionError> {
        let [oc1, oc2] = exactly_two(&cfg.objects)?;

        let o1 = build_object_3d(oc1)?;
        let o2 = build_object_3d(oc2)?;

        let engine = Engine {
            dimension: cfg.engine.dimension,
            mode: cfg.engine.mode.into(),
        };

        Ok(Self {
            engine,
            objects: (o1, o2),
        })
    }
}

fn build_object_3d(oc: &ObjectConfig) -> Result<Object3, CollisionError> {
    let v = match oc.v.as_slice() {
        [a, b, c] => NVec3::new(*a, *b, *c),
        other => {
            return Err(CollisionError::InvalidInput(format!(
                "velocity must have 3 components in a 3D scenario, got {}",
                other.len()
            )))
        }
    };
    Object3::new(oc.m, v)
}
