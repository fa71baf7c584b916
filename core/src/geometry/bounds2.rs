//! 2D Axis Aligned Bounding Boxes.

use crate::common::*;
use crate::geometry::*;
use itertools::{iproduct, Product};
use num_traits::Num;
use std::fmt;
use std::ops::Range;

/// 2D Axis Aligned Bounding Box. The minimum bound is inclusive and the
/// maximum bound is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds2<T: Num> {
    /// Minimum bounds.
    pub p_min: Point2<T>,

    /// Maximum bounds.
    pub p_max: Point2<T>,
}

/// 2-D bounding box containing `Int` points. Used for pixel windows.
pub type Bounds2i = Bounds2<Int>;

impl<T: Num + Copy> Bounds2<T> {
    /// Creates a new 2D bounding box from 2 points. The minimum and maximum bounds
    /// are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self
    where
        T: PartialOrd,
    {
        Self {
            p_min: Point2::new(min(p1.x, p2.x), min(p1.y, p2.y)),
            p_max: Point2::new(max(p1.x, p2.x), max(p1.y, p2.y)),
        }
    }

    /// Returns true if the box covers no points.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd,
    {
        self.p_max.x <= self.p_min.x || self.p_max.y <= self.p_min.y
    }
}

impl Bounds2i {
    /// Returns the number of pixels in the box. Computed in 64 bits so that
    /// windows spanning the whole `Int` range do not overflow.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            let width = (self.p_max.x as i64 - self.p_min.x as i64) as u64;
            let height = (self.p_max.y as i64 - self.p_min.y as i64) as u64;
            width * height
        }
    }

    /// Splits the box into at most `n` horizontal bands of whole rows. Bands
    /// are returned top to bottom and together cover the original box.
    ///
    /// * `n` - Maximum number of bands.
    pub fn split_rows(&self, n: usize) -> Vec<Bounds2i> {
        if self.is_empty() || n == 0 {
            return vec![];
        }

        // Row arithmetic is done in 64 bits; the band edges always lie in
        // [p_min.y, p_max.y] so converting back to `Int` is lossless.
        let rows = (self.p_max.y as i64 - self.p_min.y as i64) as usize;
        let bands = n.min(rows);
        let mut result = Vec::with_capacity(bands);
        let mut y0 = self.p_min.y as i64;
        for i in 0..bands {
            // Spread the remainder over the first bands.
            let height = rows / bands + usize::from(i < rows % bands);
            let y1 = y0 + height as i64;
            result.push(Bounds2i {
                p_min: Point2i::new(self.p_min.x, y0 as Int),
                p_max: Point2i::new(self.p_max.x, y1 as Int),
            });
            y0 = y1;
        }
        result
    }
}

impl<T: Num + fmt::Display> fmt::Display for Bounds2<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.p_min, self.p_max)
    }
}

/// An iterator that can step through integer coordinates in a bounding box
/// in a left-to-right (x-axis) and top-to-bottom (y-axis) scan order.
pub struct Bounds2iIterator {
    /// The iterator that will supply points.
    p: Product<Range<Int>, Range<Int>>,
}

impl IntoIterator for Bounds2i {
    type Item = Point2i;
    type IntoIter = Bounds2iIterator;

    /// Create an iterator for `Bounds2i`.
    fn into_iter(self) -> Self::IntoIter {
        // An empty range on either axis yields no points.
        let max_y = max(self.p_min.y, self.p_max.y);
        let max_x = max(self.p_min.x, self.p_max.x);
        Bounds2iIterator {
            p: iproduct!(self.p_min.y..max_y, self.p_min.x..max_x),
        }
    }
}

impl Iterator for Bounds2iIterator {
    type Item = Point2i;

    /// Get the next point.
    fn next(&mut self) -> Option<Self::Item> {
        self.p.next().map(|(y, x)| Point2i::new(x, y))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
