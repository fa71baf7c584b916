//! Common

use super::*;

/// Lifecycle state of a sampler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplerState {
    /// Constructed from configuration; no pixel sample started yet.
    Configured,

    /// A (pixel, sample index) pair has been started and values may be drawn.
    PixelActive,
}

/// Stores the sampler data and implements common functionality for all samplers.
#[derive(Clone, Debug)]
pub struct SamplerData {
    /// Seed shared by every sampler of a render.
    pub base_seed: u32,

    /// Number of samples generated for each pixel.
    pub samples_per_pixel: u32,

    /// Sample number of the pixel currently being generated.
    pub sample_index: u32,

    /// Number of dimensions consumed by the current sample.
    pub dimension: u32,

    /// Coordinates of current pixel being generated.
    pub current_pixel: Point2i,

    /// Lifecycle state.
    pub state: SamplerState,
}

impl SamplerData {
    /// Create a new `SamplerData` instance.
    ///
    /// * `samples_per_pixel` - Number of samples to generate for each pixel.
    pub fn new(samples_per_pixel: u32) -> Self {
        Self {
            base_seed: 0,
            samples_per_pixel,
            sample_index: 0,
            dimension: 0,
            current_pixel: Point2i::default(),
            state: SamplerState::Configured,
        }
    }

    /// This should be called when the rendering algorithm is ready to start
    /// working on a given pixel sample. Resets the dimension counter.
    ///
    /// * `p`            - The pixel.
    /// * `sample_index` - The sample number within the pixel.
    pub fn start_pixel(&mut self, p: &Point2i, sample_index: u32) {
        debug_assert!(
            sample_index < self.samples_per_pixel,
            "sample index {} out of range for {} samples per pixel",
            sample_index,
            self.samples_per_pixel
        );

        self.current_pixel = *p;
        self.sample_index = sample_index;
        self.dimension = 0;
        self.state = SamplerState::PixelActive;
    }

    /// Record that `n` more dimensions of the current sample were consumed.
    /// The counter saturates at `u32::MAX`.
    ///
    /// * `n` - Number of dimensions.
    #[inline]
    pub fn consume_dimensions(&mut self, n: u32) {
        debug_assert!(
            self.state == SamplerState::PixelActive,
            "sample values drawn before start_pixel()"
        );
        self.dimension = self.dimension.saturating_add(n);
    }
}

impl Default for SamplerData {
    /// Returns the "default value" for `SamplerData`: one sample per pixel.
    fn default() -> Self {
        Self::new(1)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
