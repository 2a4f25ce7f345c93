pub mod engine;
pub mod error;
pub mod objects;
pub mod params;
pub mod resolver;
pub mod scenario;
pub mod search;
