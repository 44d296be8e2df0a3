//! Uniform random sources for the stochastic painters.
//!
//! The fern walk only needs uniform draws in `[0, 1)`, so it is written against
//! [`UniformSource`] rather than a concrete RNG. Renders use an entropy-seeded
//! [`StdRng`]; tests plug in a seeded RNG or a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait UniformSource {
    /// Next sample, uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` RNG.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedUniform {
    /// Samples outside `[0, 1)` are clamped into it. An empty script yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, index: 0 }
    }
}

impl UniformSource for ScriptedUniform {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
