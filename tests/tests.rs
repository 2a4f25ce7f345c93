use colsim::collision::objects::{NVec2, NVec3, Object, Object3};
use colsim::collision::params::Parameters;
use colsim::collision::resolver::{resolve, resolve_3d, CollisionMode, CollisionOutcome, CollisionOutcome3};
use colsim::collision::search::{find_collision, find_collision_closed_form};
use colsim::collision::error::CollisionError;
use colsim::collision::scenario::{Scenario, Scenario3};
use colsim::configuration::config::ScenarioConfig;

const TOL: f64 = 1e-9;

/// Build a 2D object, panicking on invalid input (tests use valid data)
pub fn obj2(m: f64, v: [f64; 2], x: [f64; 2]) -> Object {
    Object::new(m, NVec2::new(v[0], v[1]), NVec2::new(x[0], x[1])).unwrap()
}

/// Default search parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 20.0,
        h0: 0.01,
        merge_t: 0.1,
    }
}

// ==================================================================================
// Object construction tests
// ==================================================================================

#[test]
fn object_rejects_nonpositive_mass() {
    for m in [0.0, -1.0, f64::NAN] {
        let res = Object::new(m, NVec2::new(1.0, 0.0), NVec2::zeros());
        assert!(
            matches!(res, Err(CollisionError::InvalidInput(_))),
            "mass {m} should be rejected"
        );
    }
}

#[test]
fn object_derives_speed_momentum_energy_at_construction() {
    let o = obj2(2.0, [3.0, 4.0], [0.0, 0.0]);
    assert!((o.speed() - 5.0).abs() < TOL);
    assert!((o.momentum() - NVec2::new(6.0, 8.0)).norm() < TOL);
    assert!((o.kinetic_energy() - 25.0).abs() < TOL); // 0.5 * 2 * 25
}

#[test]
fn object3_speed_squares_all_three_components() {
    // The model this came from dropped the square on vz; the fixed,
    // dimensionally consistent norm is the specified behavior here:
    // |(1, 2, 2)| = 3, not sqrt(1 + 4 + 2).
    let o = Object3::new(2.0, NVec3::new(1.0, 2.0, 2.0)).unwrap();
    assert!((o.speed() - 3.0).abs() < TOL);
    assert!((o.kinetic_energy() - 9.0).abs() < TOL); // 0.5 * 2 * 9
}

// ==================================================================================
// Elastic resolver tests
// ==================================================================================

#[test]
fn elastic_conserves_momentum_and_energy() {
    let o1 = obj2(2.0, [3.0, -1.5], [0.0, 0.0]);
    let o2 = obj2(5.0, [-0.5, 2.0], [1.0, 1.0]);

    let CollisionOutcome::Elastic { v1, v2 } =
        resolve(CollisionMode::Elastic, &o1, &o2).unwrap()
    else {
        panic!("expected elastic outcome");
    };

    let p_before = o1.momentum() + o2.momentum();
    let p_after = o1.mass() * v1 + o2.mass() * v2;
    assert!((p_before - p_after).norm() < TOL, "momentum not conserved");

    let ke_before = o1.kinetic_energy() + o2.kinetic_energy();
    let ke_after = 0.5 * o1.mass() * v1.norm_squared() + 0.5 * o2.mass() * v2.norm_squared();
    assert!((ke_before - ke_after).abs() < TOL, "energy not conserved");
}

#[test]
fn elastic_equal_masses_swap_velocities() {
    let o1 = obj2(1.0, [1.0, 0.0], [0.0, 0.0]);
    let o2 = obj2(1.0, [-1.0, 0.0], [2.0, 0.0]);

    let CollisionOutcome::Elastic { v1, v2 } =
        resolve(CollisionMode::Elastic, &o1, &o2).unwrap()
    else {
        panic!("expected elastic outcome");
    };

    assert!((v1 - NVec2::new(-1.0, 0.0)).norm() < TOL);
    assert!((v2 - NVec2::new(1.0, 0.0)).norm() < TOL);
}

#[test]
fn elastic_3d_conserves_momentum_and_energy() {
    let o1 = Object3::new(1.0, NVec3::new(1.0, 0.0, 0.0)).unwrap();
    let o2 = Object3::new(10.0, NVec3::new(-1.0, 0.0, 0.0)).unwrap();

    let CollisionOutcome3::Elastic { v1, v2 } =
        resolve_3d(CollisionMode::Elastic, &o1, &o2).unwrap()
    else {
        panic!("expected elastic outcome");
    };

    let p_before = o1.momentum() + o2.momentum();
    let p_after = o1.mass() * v1 + o2.mass() * v2;
    assert!((p_before - p_after).norm() < TOL);

    let ke_before = o1.kinetic_energy() + o2.kinetic_energy();
    let ke_after = 0.5 * o1.mass() * v1.norm_squared() + 0.5 * o2.mass() * v2.norm_squared();
    assert!((ke_before - ke_after).abs() < TOL);
}

// ==================================================================================
// Inelastic resolver tests
// ==================================================================================

#[test]
fn inelastic_equal_opposite_bodies_stop() {
    let o1 = obj2(1.0, [1.0, 0.0], [0.0, 0.0]);
    let o2 = obj2(1.0, [-1.0, 0.0], [2.0, 0.0]);

    let CollisionOutcome::Inelastic { mass, v } =
        resolve(CollisionMode::Inelastic, &o1, &o2).unwrap()
    else {
        panic!("expected inelastic outcome");
    };

    assert!((mass - 2.0).abs() < TOL);
    assert!(v.norm() < TOL, "combined body should be at rest, got {v:?}");
}

#[test]
fn inelastic_conserves_momentum_and_never_gains_energy() {
    let o1 = obj2(3.0, [2.0, 1.0], [0.0, 0.0]);
    let o2 = obj2(7.0, [-1.0, 4.0], [5.0, 5.0]);

    let CollisionOutcome::Inelastic { mass, v } =
        resolve(CollisionMode::Inelastic, &o1, &o2).unwrap()
    else {
        panic!("expected inelastic outcome");
    };

    let p_before = o1.momentum() + o2.momentum();
    assert!((p_before - mass * v).norm() < TOL, "momentum not conserved");

    let ke_before = o1.kinetic_energy() + o2.kinetic_energy();
    let ke_after = 0.5 * mass * v.norm_squared();
    assert!(
        ke_after <= ke_before + TOL,
        "kinetic energy gained: {ke_before} -> {ke_after}"
    );
}

// ==================================================================================
// Collision time search tests
// ==================================================================================

#[test]
fn search_finds_head_on_collision_near_exact_root() {
    let o1 = obj2(1.0, [1.0, -1.0], [-5.0, 5.0]);
    let o2 = obj2(1.0, [-1.0, 1.0], [4.0, -4.0]);
    let params = test_params();

    let ev = find_collision(&o1, &o2, &params).expect("converging paths must collide");
    let exact = find_collision_closed_form(&o1, &o2, &params).expect("quadratic must have a root");

    // The scan lands on the first step past the exact crossing
    assert!(ev.t >= exact.t - TOL, "scan fired before the tolerance was reached");
    assert!(
        ev.t - exact.t <= params.h0 + TOL,
        "scan overshot by more than one step: {} vs {}",
        ev.t,
        exact.t
    );

    // The reported point lies on the first object's trajectory, and both
    // trajectories are within tolerance of each other there
    assert!((ev.point - o1.position_at(ev.t)).norm() < TOL);
    assert!((o1.position_at(ev.t) - o2.position_at(ev.t)).norm() < params.merge_t);
}

#[test]
fn search_parallel_paths_report_no_collision() {
    // Same direction, same speed: the separation never changes
    let o1 = obj2(1.0, [1.0, 0.0], [0.0, 0.0]);
    let o2 = obj2(1.0, [1.0, 0.0], [0.0, 3.0]);
    let params = test_params();

    assert!(find_collision(&o1, &o2, &params).is_none());
    assert!(find_collision_closed_form(&o1, &o2, &params).is_none());
}

#[test]
fn search_miss_beyond_tolerance_reports_no_collision() {
    // Converging but passing at closest approach 1.0 > merge_t
    let o1 = obj2(1.0, [1.0, 0.0], [-5.0, 0.0]);
    let o2 = obj2(1.0, [-1.0, 0.0], [5.0, 1.0]);
    let params = test_params();

    assert!(find_collision(&o1, &o2, &params).is_none());
    assert!(find_collision_closed_form(&o1, &o2, &params).is_none());
}

#[test]
fn search_exact_tangency_reports_no_collision() {
    // Closest approach is exactly merge_t: the separation touches the
    // tolerance but never drops below it, so neither the scan's strict
    // inequality nor the closed form's root accepts it
    let o1 = obj2(1.0, [1.0, 0.0], [-5.0, 0.0]);
    let o2 = obj2(1.0, [-1.0, 0.0], [5.0, 0.1]);
    let params = test_params(); // merge_t = 0.1

    assert!(find_collision(&o1, &o2, &params).is_none());
    assert!(find_collision_closed_form(&o1, &o2, &params).is_none());
}

#[test]
fn search_already_overlapping_fires_at_t_zero() {
    let o1 = obj2(1.0, [1.0, 0.0], [0.0, 0.0]);
    let o2 = obj2(1.0, [0.0, 0.0], [0.01, 0.0]);
    let params = test_params();

    let ev = find_collision(&o1, &o2, &params).unwrap();
    assert_eq!(ev.t, 0.0);
    let exact = find_collision_closed_form(&o1, &o2, &params).unwrap();
    assert_eq!(exact.t, 0.0);
}

// ==================================================================================
// Scenario building tests
// ==================================================================================

fn parse(yaml: &str) -> ScenarioConfig {
    serde_yaml::from_str(yaml).expect("test YAML must parse")
}

#[test]
fn scenario_2d_builds_from_yaml() {
    let cfg = parse(
        r#"
engine: { dimension: false, mode: "elastic" }
parameters: { t_end: 20.0, h0: 0.01, merge_t: 0.1 }
objects:
  - { x: [ -5.0, 5.0 ], v: [ 1.0, -1.0 ], m: 1.0 }
  - { x: [ 4.0, -4.0 ], v: [ -1.0, 1.0 ], m: 1.0 }
"#,
    );
    let scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.parameters.h0, 0.01);
    assert_eq!(scenario.objects.0.position(), NVec2::new(-5.0, 5.0));
}

#[test]
fn scenario_rejects_wrong_dimensionality() {
    // Three-component vectors in a 2D scenario
    let cfg = parse(
        r#"
engine: { dimension: false, mode: "elastic" }
objects:
  - { x: [ 0.0, 0.0 ], v: [ 1.0, 0.0, 0.0 ], m: 1.0 }
  - { x: [ 1.0, 0.0 ], v: [ -1.0, 0.0 ], m: 1.0 }
"#,
    );
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(CollisionError::InvalidInput(_))
    ));
}

#[test]
fn scenario_rejects_wrong_object_count() {
    let cfg = parse(
        r#"
engine: { dimension: false, mode: "inelastic" }
objects:
  - { x: [ 0.0, 0.0 ], v: [ 1.0, 0.0 ], m: 1.0 }
"#,
    );
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(CollisionError::InvalidInput(_))
    ));
}

#[test]
fn scenario_rejects_nonpositive_step_size() {
    // A zero or negative h0 would make the scan loop forever
    for h0 in ["0.0", "-0.01", ".nan"] {
        let cfg = parse(&format!(
            r#"
engine: {{ dimension: false, mode: "elastic" }}
parameters: {{ t_end: 20.0, h0: {h0}, merge_t: 0.1 }}
objects:
  - {{ x: [ 0.0, 0.0 ], v: [ 1.0, 0.0 ], m: 1.0 }}
  - {{ x: [ 5.0, 0.0 ], v: [ -1.0, 0.0 ], m: 1.0 }}
"#
        ));
        assert!(
            matches!(
                Scenario::build_scenario(cfg),
                Err(CollisionError::InvalidInput(_))
            ),
            "h0 = {h0} should be rejected"
        );
    }
}

#[test]
fn scenario_rejects_nonfinite_horizon_and_tolerance() {
    for (t_end, merge_t) in [(".inf", "0.1"), ("20.0", ".nan")] {
        let cfg = parse(&format!(
            r#"
engine: {{ dimension: false, mode: "elastic" }}
parameters: {{ t_end: {t_end}, h0: 0.01, merge_t: {merge_t} }}
objects:
  - {{ x: [ 0.0, 0.0 ], v: [ 1.0, 0.0 ], m: 1.0 }}
  - {{ x: [ 5.0, 0.0 ], v: [ -1.0, 0.0 ], m: 1.0 }}
"#
        ));
        assert!(
            matches!(
                Scenario::build_scenario(cfg),
                Err(CollisionError::InvalidInput(_))
            ),
            "t_end = {t_end}, merge_t = {merge_t} should be rejected"
        );
    }
}

#[test]
fn scenario_3d_builds_without_positions_or_parameters() {
    let cfg = parse(
        r#"
engine: { dimension: true, mode: "elastic" }
objects:
  - { v: [ 1.0, 0.0, 0.0 ], m: 1.0 }
  - { v: [ -1.0, 0.0, 0.0 ], m: 10.0 }
"#,
    );
    let scenario = Scenario3::build_scenario_3d(cfg).unwrap();
    assert_eq!(scenario.objects.1.mass(), 10.0);
}
