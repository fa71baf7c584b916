//! Command line options

use clap::Parser;
use sampler_core::common::*;
use sampler_core::geometry::*;
use sampler_core::paramset::*;

/// Prints the values a sampler produces for a window of pixels.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Sampler type name.
    #[arg(long, short = 's', value_name = "NAME", default_value = "independent")]
    pub sampler: String,

    /// Number of samples per pixel.
    #[arg(long = "samples", short = 'n', value_name = "NUM", default_value_t = 4)]
    pub samples_per_pixel: Int,

    /// Base seed shared by all workers.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    pub seed: u32,

    /// First pixel of the window (x y).
    #[arg(long = "pixel-min", value_name = "INT", num_args = 2, allow_negative_numbers = true, default_values_t = [0, 0])]
    pub pixel_min: Vec<Int>,

    /// Pixel one past the end of the window (x y).
    #[arg(long = "pixel-max", value_name = "INT", num_args = 2, allow_negative_numbers = true, default_values_t = [2, 2])]
    pub pixel_max: Vec<Int>,

    /// Number of 1-D values drawn for each sample.
    #[arg(long, short = 'd', value_name = "NUM", default_value_t = 4)]
    pub dims: usize,

    /// Number of threads to use.
    #[arg(long = "nthreads", short = 't', value_name = "NUM", default_value_t = 1)]
    n_threads: usize,

    /// List the known sampler types and exit.
    #[arg(long)]
    pub list: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the pixel window.
    pub fn pixel_bounds(&self) -> Bounds2i {
        Bounds2i::new(
            Point2i::new(self.pixel_min[0], self.pixel_min[1]),
            Point2i::new(self.pixel_max[0], self.pixel_max[1]),
        )
    }

    /// Returns the sampler parameters given on the command line.
    pub fn params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params.add_int("samples", &[self.samples_per_pixel]);
        params
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["sampler-dump"]);
        assert_eq!(options.sampler, "independent");
        assert_eq!(options.params().find_required_positive_int("samples"), Ok(4));
        assert_eq!(
            options.pixel_bounds(),
            Bounds2i::new(Point2i::new(0, 0), Point2i::new(2, 2))
        );
        assert_eq!(options.threads(), 1);
    }

    #[test]
    fn parses_window_and_sampler() {
        let options = Options::parse_from([
            "sampler-dump",
            "--sampler",
            "random",
            "--samples",
            "16",
            "--pixel-min",
            "4",
            "5",
            "--pixel-max",
            "8",
            "6",
            "--seed",
            "7",
        ]);
        assert_eq!(options.sampler, "random");
        assert_eq!(options.seed, 7);
        assert_eq!(options.params().find_one_int("samples", 0), 16);
        assert_eq!(options.pixel_bounds().area(), 4);
    }

    #[test]
    fn full_range_window_is_accepted() {
        let options = Options::parse_from([
            "sampler-dump",
            "--pixel-min",
            "-2147483648",
            "-2147483648",
            "--pixel-max",
            "2147483647",
            "2147483647",
        ]);
        let bounds = options.pixel_bounds();
        assert_eq!(bounds.p_min, Point2i::new(Int::MIN, Int::MIN));
        assert_eq!(bounds.area(), u32::MAX as u64 * u32::MAX as u64);
        assert_eq!(bounds.split_rows(2).len(), 2);
    }
}
