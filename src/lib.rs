pub mod collision;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use collision::objects::{Object, NVec2, Object3, NVec3};
pub use collision::resolver::{resolve, resolve_3d, CollisionMode, CollisionOutcome, CollisionOutcome3};
pub use collision::search::{find_collision, find_collision_closed_form, CollisionEvent};
pub use collision::params::Parameters;
pub use collision::scenario::{Scenario, Scenario3};
pub use collision::error::CollisionError;

pub use configuration::config::{EngineConfig, ModeConfig, ParametersConfig, ObjectConfig, ScenarioConfig};

pub use visualization::vis2d::{run_2d, CollisionReport};

pub use benchmark::benchmark::{timed, bench_search};
