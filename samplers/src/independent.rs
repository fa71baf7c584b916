//! Independent Sampler.

use sampler_core::common::*;
use sampler_core::error::*;
use sampler_core::geometry::*;
use sampler_core::hash::*;
use sampler_core::paramset::*;
use sampler_core::rng::*;
use sampler_core::sampler::*;

/// Implements a sampler that uses a PRNG to generate independent, uniformly
/// random samples in [0, 1).
#[derive(Clone, Debug)]
pub struct IndependentSampler {
    /// The common sampler data.
    pub data: SamplerData,

    /// The random number generator.
    pub rng: RNG,
}

impl IndependentSampler {
    /// Create a new `IndependentSampler`.
    ///
    /// * `samples_per_pixel` - Number of samples to generate for each pixel.
    pub fn new(samples_per_pixel: u32) -> Self {
        Self {
            data: SamplerData::new(samples_per_pixel),
            rng: RNG::default(),
        }
    }
}

impl Sampler for IndependentSampler {
    /// Returns a shared reference underlying `SamplerData`.
    fn get_data(&self) -> &SamplerData {
        &self.data
    }

    /// Returns a mutable reference to underlying `SamplerData`.
    fn get_data_mut(&mut self) -> &mut SamplerData {
        &mut self.data
    }

    /// Returns an exact copy, including the generator state, for use by
    /// another rendering thread.
    fn clone_sampler(&self) -> Box<dyn Sampler> {
        Box::new(self.clone())
    }

    /// Reseeds the generator from the pixel and base seed, then skips ahead by
    /// the sample index.
    ///
    /// * `p`            - The pixel.
    /// * `sample_index` - The sample number within the pixel.
    fn start_pixel(&mut self, p: &Point2i, sample_index: u32) {
        self.data.start_pixel(p, sample_index);
        self.rng.seed(hash_pixel(p, self.data.base_seed));
        self.rng.advance(sample_index as i64);

        trace!("Start pixel {p} sample {sample_index}");
    }

    /// Returns the sample value for the next dimension of the current sample vector.
    fn next_1d(&mut self) -> Float {
        self.data.consume_dimensions(1);
        self.rng.uniform_float()
    }

    /// Returns the sample value for the next two dimensions of the current sample vector.
    fn next_2d(&mut self) -> Point2f {
        self.data.consume_dimensions(2);
        self.rng.uniform_point2f()
    }
}

impl TryFrom<&ParamSet> for IndependentSampler {
    type Error = ConfigError;

    /// Create an `IndependentSampler` from a parameter set. The integer
    /// parameter `samples` is required and must be positive.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let samples_per_pixel = params.find_required_positive_int("samples")?;
        debug!("Creating independent sampler with {samples_per_pixel} samples per pixel");
        Ok(Self::new(samples_per_pixel as u32))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
