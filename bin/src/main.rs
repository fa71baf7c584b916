#[macro_use]
extern crate log;

mod options;

use anyhow::{bail, Context};
use clap::Parser;
use options::*;
use sampler_api::*;
use sampler_core::common::*;
use sampler_core::geometry::*;
use sampler_core::sampler::*;

/// Values drawn for one sample of one pixel.
struct SampleRecord {
    pixel: Point2i,
    sample_index: u32,
    values: Vec<Float>,
}

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let registry = default_registry();
    if options.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut prototype = registry
        .make_sampler(&options.sampler, &options.params())
        .with_context(|| format!("Unable to create sampler '{}'", options.sampler))?;

    let bounds = options.pixel_bounds();
    if bounds.is_empty() {
        bail!("Pixel window {bounds} is empty");
    }

    let bands = bounds.split_rows(options.threads());
    let workers = clone_for_workers(prototype.as_mut(), options.seed, bands.len());
    info!("Sampling {bounds} with {} workers", workers.len());

    let mut records = draw_samples(bands, workers, options.dims);
    records.sort_by_key(|r| (r.pixel.y, r.pixel.x, r.sample_index));

    for r in records.iter() {
        let values: Vec<String> = r.values.iter().map(|v| format!("{v:.6}")).collect();
        println!("{} {} {}: {}", r.pixel.x, r.pixel.y, r.sample_index, values.join(" "));
    }
    Ok(())
}

/// Draws `dims` values for every sample of every pixel, one band of rows per
/// worker sampler.
///
/// * `bands`   - Pixel windows.
/// * `workers` - One sampler per band.
/// * `dims`    - Values drawn per sample.
fn draw_samples(bands: Vec<Bounds2i>, workers: Vec<Box<dyn Sampler>>, dims: usize) -> Vec<SampleRecord> {
    let (tx, rx) = crossbeam_channel::unbounded();

    std::thread::scope(|scope| {
        for (band, mut sampler) in bands.into_iter().zip(workers) {
            let tx = tx.clone();
            scope.spawn(move || {
                for pixel in band {
                    sampler.start_pixel(&pixel, 0);
                    loop {
                        let values = (0..dims).map(|_| sampler.next_1d()).collect();
                        let record = SampleRecord {
                            pixel,
                            sample_index: sampler.sample_index(),
                            values,
                        };
                        if tx.send(record).is_err() {
                            return;
                        }
                        if !sampler.start_next_sample() {
                            break;
                        }
                    }
                }
                debug!("Finished band {band}");
            });
        }

        // Only the workers hold senders now.
        drop(tx);
        rx.iter().collect()
    })
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_core::paramset::*;

    fn records(n_workers: usize) -> Vec<SampleRecord> {
        let mut params = ParamSet::new();
        params.add_int("samples", &[3]);
        let mut prototype = make_sampler("independent", &params).unwrap();

        let bounds = Bounds2i::new(Point2i::new(0, 0), Point2i::new(3, 5));
        let bands = bounds.split_rows(n_workers);
        let workers = clone_for_workers(prototype.as_mut(), 42, bands.len());
        let mut records = draw_samples(bands, workers, 5);
        records.sort_by_key(|r| (r.pixel.y, r.pixel.x, r.sample_index));
        records
    }

    #[test]
    fn every_sample_of_every_pixel_is_drawn() {
        let records = records(2);
        assert_eq!(records.len(), 3 * 5 * 3);
        assert!(records.iter().all(|r| r.values.len() == 5));
    }

    #[test]
    fn output_does_not_depend_on_worker_count() {
        let one = records(1);
        let many = records(4);
        assert_eq!(one.len(), many.len());
        for (a, b) in one.iter().zip(many.iter()) {
            assert_eq!(a.pixel, b.pixel);
            assert_eq!(a.sample_index, b.sample_index);
            assert_eq!(a.values, b.values);
        }
    }
}
