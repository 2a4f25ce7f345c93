//! Numerical parameters for the collision time search.
//!
//! `Parameters` holds runtime settings:
//! - search horizon and step size (`t_end`, `h0`),
//! - merge threshold (`merge_t`), the distance below which two points
//!   count as colliding

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64,   // search horizon
    pub h0: f64,      // step size
    pub merge_t: f64, // merge threshold (distance tolerance)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 20.0,
            h0: 0.01,
            merge_t: 0.1,
        }
    }
}
