//! Hashing

use crate::geometry::*;
use murmurhash3::murmurhash3_x64_128;

/// Scrambles the bits of a 64-bit value so that nearby inputs map to
/// unrelated outputs.
///
/// * `v` - The value to mix.
#[inline(always)]
pub fn mix_bits(mut v: u64) -> u64 {
    v ^= v >> 31;
    v = v.wrapping_mul(0x7fb5d329728ea185);
    v ^= v >> 27;
    v = v.wrapping_mul(0x81dadef4bc2dd44d);
    v ^= v >> 33;
    v
}

/// Combines a pixel coordinate and a seed into a single value. The same
/// inputs always give the same result on every platform.
///
/// * `pixel` - The pixel coordinate.
/// * `seed`  - The seed.
pub fn hash_pixel(pixel: &Point2i, seed: u32) -> u64 {
    let mut bytes = [0_u8; 12];
    bytes[0..4].copy_from_slice(&pixel.x.to_le_bytes());
    bytes[4..8].copy_from_slice(&pixel.y.to_le_bytes());
    bytes[8..12].copy_from_slice(&seed.to_le_bytes());
    mix_bits(murmurhash3_x64_128(&bytes, 0).0)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
