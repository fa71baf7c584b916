//! Sampler

mod common;

use crate::common::*;
use crate::geometry::*;

// Re-export
pub use common::*;

/// Sampler interface.
///
/// A sampler supplies the random values an integrator consumes while it
/// estimates one sample of one pixel. Call `start_pixel()` for every
/// (pixel, sample index) pair, then draw values with `next_1d()` and
/// `next_2d()` in the order the integrator needs them. The same base seed,
/// pixel, sample index and call order always produce the same values.
pub trait Sampler: Send {
    /// Returns a shared reference underlying `SamplerData`.
    fn get_data(&self) -> &SamplerData;

    /// Returns a mutable reference to underlying `SamplerData`.
    fn get_data_mut(&mut self) -> &mut SamplerData;

    /// Returns a deep copy of this sampler, random number state included. The
    /// copy shares nothing with the original.
    fn clone_sampler(&self) -> Box<dyn Sampler>;

    /// Set the base seed. Call once before cloning so every clone of the
    /// render shares it.
    ///
    /// * `seed` - The seed.
    fn set_base_seed(&mut self, seed: u32) {
        self.get_data_mut().base_seed = seed;
    }

    /// This should be called when the rendering algorithm is ready to start
    /// working on a given pixel sample. Calling it again with any pair starts
    /// over.
    ///
    /// * `p`            - The pixel.
    /// * `sample_index` - The sample number within the pixel.
    fn start_pixel(&mut self, p: &Point2i, sample_index: u32) {
        self.get_data_mut().start_pixel(p, sample_index);
    }

    /// Returns the sample value for the next dimension of the current sample vector.
    fn next_1d(&mut self) -> Float;

    /// Returns the sample value for the next two dimensions of the current sample vector.
    fn next_2d(&mut self) -> Point2f;

    /// Start the next sample of the current pixel. Returns `false` without
    /// starting anything once all samples of the pixel were started.
    fn start_next_sample(&mut self) -> bool {
        let data = self.get_data();
        debug_assert!(
            data.state == SamplerState::PixelActive,
            "start_next_sample() called before start_pixel()"
        );

        let next = data.sample_index + 1;
        if next >= data.samples_per_pixel {
            return false;
        }

        let p = data.current_pixel;
        self.start_pixel(&p, next);
        true
    }

    /// Returns the number of samples generated for each pixel.
    fn samples_per_pixel(&self) -> u32 {
        self.get_data().samples_per_pixel
    }

    /// Returns the sample number within the current pixel.
    fn sample_index(&self) -> u32 {
        self.get_data().sample_index
    }

    /// Overrides the sample number within the current pixel, e.g. to resume a
    /// render. The generator is not moved; `start_next_sample()` continues
    /// from the new index.
    ///
    /// * `sample_index` - The sample number.
    fn set_sample_index(&mut self, sample_index: u32) {
        let data = self.get_data_mut();
        debug_assert!(sample_index < data.samples_per_pixel);
        data.sample_index = sample_index;
    }

    /// Returns the number of dimensions consumed by the current sample.
    fn dimension(&self) -> u32 {
        self.get_data().dimension
    }

    /// Returns the pixel currently being sampled.
    fn current_pixel(&self) -> Point2i {
        self.get_data().current_pixel
    }

    /// Returns the base seed.
    fn base_seed(&self) -> u32 {
        self.get_data().base_seed
    }

    /// Returns the lifecycle state.
    fn state(&self) -> SamplerState {
        self.get_data().state
    }
}

// Implement `Sampler` so `Box<dyn Sampler>` can be passed around where `&dyn Sampler` or `&mut dyn Sampler` can be
// used, e.g. the boxed samplers returned by `Sampler::clone_sampler()` and the registry.
impl<S: Sampler + ?Sized> Sampler for Box<S> {
    #[inline]
    fn get_data(&self) -> &SamplerData {
        (**self).get_data()
    }

    #[inline]
    fn get_data_mut(&mut self) -> &mut SamplerData {
        (**self).get_data_mut()
    }

    #[inline]
    fn clone_sampler(&self) -> Box<dyn Sampler> {
        (**self).clone_sampler()
    }

    #[inline]
    fn set_base_seed(&mut self, seed: u32) {
        (**self).set_base_seed(seed);
    }

    #[inline]
    fn start_pixel(&mut self, p: &Point2i, sample_index: u32) {
        (**self).start_pixel(p, sample_index);
    }

    #[inline]
    fn next_1d(&mut self) -> Float {
        (**self).next_1d()
    }

    #[inline]
    fn next_2d(&mut self) -> Point2f {
        (**self).next_2d()
    }

    #[inline]
    fn start_next_sample(&mut self) -> bool {
        (**self).start_next_sample()
    }

    #[inline]
    fn set_sample_index(&mut self, sample_index: u32) {
        (**self).set_sample_index(sample_index);
    }
}

impl Clone for Box<dyn Sampler> {
    fn clone(&self) -> Self {
        self.clone_sampler()
    }
}

/// Sets the base seed on `prototype` and returns `n` deep copies of it, one
/// for each rendering thread.
///
/// * `prototype` - The configured sampler.
/// * `base_seed` - Seed shared by the whole render.
/// * `n`         - Number of copies.
pub fn clone_for_workers(prototype: &mut dyn Sampler, base_seed: u32, n: usize) -> Vec<Box<dyn Sampler>> {
    prototype.set_base_seed(base_seed);
    debug!("Cloning sampler for {n} workers with base seed {base_seed}");
    (0..n).map(|_| prototype.clone_sampler()).collect()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns an arithmetic sequence so draws are easy to predict.
    #[derive(Clone)]
    struct CountingSampler {
        data: SamplerData,
        next: Float,
    }

    impl CountingSampler {
        fn new(samples_per_pixel: u32) -> Self {
            Self {
                data: SamplerData::new(samples_per_pixel),
                next: 0.0,
            }
        }
    }

    impl Sampler for CountingSampler {
        fn get_data(&self) -> &SamplerData {
            &self.data
        }

        fn get_data_mut(&mut self) -> &mut SamplerData {
            &mut self.data
        }

        fn clone_sampler(&self) -> Box<dyn Sampler> {
            Box::new(self.clone())
        }

        fn start_pixel(&mut self, p: &Point2i, sample_index: u32) {
            self.data.start_pixel(p, sample_index);
            self.next = sample_index as Float / 16.0;
        }

        fn next_1d(&mut self) -> Float {
            self.data.consume_dimensions(1);
            let v = self.next;
            self.next += 1.0 / 1024.0;
            v
        }

        fn next_2d(&mut self) -> Point2f {
            let x = self.next_1d();
            let y = self.next_1d();
            Point2f::new(x, y)
        }
    }

    #[test]
    fn new_sampler_is_configured() {
        let s = CountingSampler::new(4);
        assert_eq!(s.state(), SamplerState::Configured);
        assert_eq!(s.samples_per_pixel(), 4);
        assert_eq!(s.base_seed(), 0);
    }

    #[test]
    fn start_pixel_resets_bookkeeping() {
        let mut s = CountingSampler::new(4);
        s.start_pixel(&Point2i::new(2, 3), 1);
        s.next_2d();
        assert_eq!(s.dimension(), 2);

        s.start_pixel(&Point2i::new(5, 6), 3);
        assert_eq!(s.state(), SamplerState::PixelActive);
        assert_eq!(s.current_pixel(), Point2i::new(5, 6));
        assert_eq!(s.sample_index(), 3);
        assert_eq!(s.dimension(), 0);
    }

    #[test]
    fn start_next_sample_walks_all_samples_of_pixel() {
        let mut s = CountingSampler::new(3);
        let p = Point2i::new(7, 1);
        s.start_pixel(&p, 0);

        let mut seen = vec![s.sample_index()];
        while s.start_next_sample() {
            assert_eq!(s.current_pixel(), p);
            assert_eq!(s.dimension(), 0);
            seen.push(s.sample_index());
        }
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(s.sample_index(), 2);
    }

    #[test]
    fn set_sample_index_overrides_index() {
        let mut s = CountingSampler::new(8);
        s.set_sample_index(5);
        assert_eq!(s.sample_index(), 5);
    }

    #[test]
    fn clone_for_workers_sets_seed_before_cloning() {
        let mut prototype = CountingSampler::new(2);
        let workers = clone_for_workers(&mut prototype, 1234, 3);
        assert_eq!(prototype.base_seed(), 1234);
        assert_eq!(workers.len(), 3);
        assert!(workers.iter().all(|w| w.base_seed() == 1234 && w.samples_per_pixel() == 2));
    }

    #[test]
    fn boxed_sampler_forwards_calls() {
        let mut boxed: Box<dyn Sampler> = Box::new(CountingSampler::new(2));
        boxed.set_base_seed(9);
        boxed.start_pixel(&Point2i::new(1, 1), 1);
        let first = boxed.next_1d();
        assert_eq!(first, 1.0 / 16.0);

        let mut copy = boxed.clone();
        assert_eq!(copy.base_seed(), 9);
        assert_eq!(copy.next_1d(), boxed.next_1d());
        assert_eq!(copy.dimension(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn drawing_before_start_pixel_panics_in_debug() {
        let mut s = CountingSampler::new(1);
        s.next_1d();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn start_pixel_with_index_past_samples_per_pixel_panics_in_debug() {
        let mut s = CountingSampler::new(2);
        s.start_pixel(&Point2i::new(0, 0), 2);
    }
}
