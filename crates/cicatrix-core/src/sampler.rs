//! Source of uniform random draws.
//!
//! The scenario never owns a random generator; callers hand one in. Seeding
//! and stream management belong to the implementation.

use crate::types::Position;

pub trait UniformSampler {
    /// One draw from `[low, high)`. Returns `low` when `high <= low`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Three independent draws from `[low, high)`, as x, y, z.
    fn uniform_array3(&mut self, low: f64, high: f64) -> Position {
        let x = self.uniform(low, high);
        let y = self.uniform(low, high);
        let z = self.uniform(low, high);
        Position::new(x, y, z)
    }
}

impl<S: UniformSampler + ?Sized> UniformSampler for &mut S {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn uniform_array3(&mut self, low: f64, high: f64) -> Position {
        (**self).uniform_array3(low, high)
    }
}
