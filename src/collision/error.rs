//! Error taxonomy for the collision core.
//!
//! Two failure classes, both pure input validation:
//! - `InvalidInput`  – rejected at object/scenario construction
//! - `DegenerateInput` – rejected at resolver invocation
//!
//! A search that finds no collision is `None`, never an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollisionError {
    /// Non-positive mass, wrong vector dimensionality, or wrong object count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Combined mass vanished in a collision formula. Unreachable while the
    /// mass-positivity invariant holds, guarded anyway at the boundary.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
