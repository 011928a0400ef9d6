//! Space distribution across a line of sizers.
//!
//! # Algorithm
//!
//! 1. Clamp every hint into its sizer's bounds and total the results.
//! 2. Return early when the clamped hints already fill the space, or when the
//!    space is at or beyond the summed minimums/maximums (every sizer is then
//!    pinned to that bound).
//! 3. **Stretch phase**: hand the remaining delta to sizers with a positive
//!    stretch, proportionally to their stretch. A sizer whose share would
//!    reach its limit is pinned there, only the distance it actually moved is
//!    deducted, and the pass repeats with the leftover over the sizers still
//!    free to move.
//! 4. **Equal phase**: whatever is left after every stretchable sizer is
//!    pinned is split evenly among the sizers that are still free, with the
//!    same pin-and-repeat rule.
//!
//! Every pass either spends the free space down to the near-zero threshold
//! or pins at least one sizer for the rest of the call, so the number of
//! passes is bounded by the number of sizers plus a few residue passes.

use crate::sizer::Sizer;

/// Free space at or below this magnitude counts as fully distributed.
pub const NEAR_ZERO: f64 = 0.01;

/// Distribution settings.
///
/// The default distributor is what [`distribute`] and [`compute_sizes`] use.
///
/// ```
/// use linebox::{Distributor, Sizer};
///
/// let mut line = [Sizer::new().with_size_hint(10.0), Sizer::new().with_size_hint(10.0)];
/// let slack = Distributor::new().tolerance(0.001).distribute(&mut line, 30.0);
/// assert_eq!(slack, 0.0);
/// assert_eq!(line[0].size, 15.0);
/// assert_eq!(line[1].size, 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "DistributorSettings"))]
pub struct Distributor {
    tolerance: f64,
}

/// Deserialized form of [`Distributor`]; converted through the builder so a
/// stored threshold is sanitized the same way as one set in code.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DistributorSettings {
    tolerance: f64,
}

#[cfg(feature = "serde")]
impl From<DistributorSettings> for Distributor {
    fn from(settings: DistributorSettings) -> Self {
        Distributor::new().tolerance(settings.tolerance)
    }
}

impl Default for Distributor {
    fn default() -> Self {
        Self::new()
    }
}

impl Distributor {
    /// A distributor using [`NEAR_ZERO`] as its threshold.
    pub const fn new() -> Self {
        Self {
            tolerance: NEAR_ZERO,
        }
    }

    /// Set the near-zero threshold below which leftover space is ignored.
    ///
    /// Values that are not finite and strictly positive fall back to
    /// [`NEAR_ZERO`].
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            NEAR_ZERO
        };
        self
    }

    /// The near-zero threshold in use.
    #[inline]
    pub fn near_zero(&self) -> f64 {
        self.tolerance
    }

    /// Distribute `space` across `sizers`, writing each sizer's `size`.
    ///
    /// Returns the part of `space` that could not be honoured, signed like
    /// `space - Σsize`:
    ///
    /// - `0.0` when the clamped hints fit exactly
    /// - `space - Σmin` (zero or negative) when every sizer had to stop at its
    ///   minimum, `space - Σmax` (zero or positive) when every sizer had to
    ///   stop at its maximum
    /// - otherwise the leftover the passes stopped at, at most the near-zero
    ///   threshold in magnitude
    /// - `space` unchanged for an empty line; NaN when `space` is NaN
    ///
    /// Malformed sizers (inverted bounds, NaN fields) give unspecified sizes
    /// but never panic.
    pub fn distribute(&self, sizers: &mut [Sizer], space: f64) -> f64 {
        let count = sizers.len();
        if count == 0 {
            return space;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("distribute", count, space);
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let mut total_size = 0.0;
        let mut total_min = 0.0;
        let mut total_max = 0.0;
        let mut total_stretch = 0u64;
        let mut stretch_count = 0usize;
        for sizer in sizers.iter_mut() {
            sizer.size = sizer.clamp(sizer.size_hint);
            total_size += sizer.size;
            total_min += sizer.min_size;
            total_max += sizer.max_size;
            if sizer.stretch > 0 {
                total_stretch += u64::from(sizer.stretch);
                stretch_count += 1;
            }
        }

        if space == total_size {
            #[cfg(feature = "tracing")]
            tracing::trace!(outcome = "exact", "distributed");
            return 0.0;
        }

        if space <= total_min {
            for sizer in sizers.iter_mut() {
                sizer.size = sizer.min_size;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(outcome = "minimized", total_min, "distributed");
            return space - total_min;
        }

        if space >= total_max {
            for sizer in sizers.iter_mut() {
                sizer.size = sizer.max_size;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(outcome = "maximized", total_max, "distributed");
            return space - total_max;
        }

        let direction = if space < total_size {
            Direction::Shrink
        } else {
            Direction::Grow
        };
        let mut line = Line {
            sizers,
            done: vec![false; count],
            not_done: count,
            free_space: (space - total_size).abs(),
            direction,
            tolerance: self.tolerance,
        };
        line.stretch_phase(total_stretch, stretch_count);
        line.equal_phase();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            outcome = "distributed",
            direction = ?line.direction,
            slack = line.free_space,
            pinned = count - line.not_done,
            "distributed"
        );
        match line.direction {
            Direction::Shrink => -line.free_space,
            Direction::Grow => line.free_space,
        }
    }

    /// Run the distribution on a copy of `sizers` and return the sizes.
    ///
    /// The input slice is left untouched.
    ///
    /// ```
    /// use linebox::{Distributor, Sizer};
    ///
    /// let line = [Sizer::new().with_size_hint(5.0).with_max_size(10.0)];
    /// assert_eq!(Distributor::new().compute_sizes(&line, 7.0), vec![7.0]);
    /// assert_eq!(line[0].size, 0.0);
    /// ```
    #[must_use]
    pub fn compute_sizes(&self, sizers: &[Sizer], space: f64) -> Vec<f64> {
        let mut scratch = sizers.to_vec();
        self.distribute(&mut scratch, space);
        scratch.into_iter().map(|sizer| sizer.size).collect()
    }
}

/// Distribute `space` across `sizers` with the default [`Distributor`].
///
/// See [`Distributor::distribute`] for the return value.
///
/// ```
/// use linebox::{Sizer, distribute};
///
/// let mut line = [
///     Sizer::new().with_size_hint(10.0).with_max_size(100.0),
///     Sizer::new().with_size_hint(10.0).with_max_size(100.0),
/// ];
/// distribute(&mut line, 30.0);
/// assert_eq!(line[0].size, 15.0);
/// assert_eq!(line[1].size, 15.0);
/// ```
pub fn distribute(sizers: &mut [Sizer], space: f64) -> f64 {
    Distributor::new().distribute(sizers, space)
}

/// Compute sizes for `sizers` without mutating them, using the default
/// [`Distributor`].
#[must_use]
pub fn compute_sizes(sizers: &[Sizer], space: f64) -> Vec<f64> {
    Distributor::new().compute_sizes(sizers, space)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Shrink,
    Grow,
}

impl Direction {
    /// Whether moving `sizer` by `amount` reaches or crosses its limit.
    #[inline]
    fn reaches_limit(self, sizer: &Sizer, amount: f64) -> bool {
        match self {
            Direction::Shrink => sizer.size - amount <= sizer.min_size,
            Direction::Grow => sizer.size + amount >= sizer.max_size,
        }
    }

    /// Distance between the sizer's current size and its limit.
    #[inline]
    fn room(self, sizer: &Sizer) -> f64 {
        match self {
            Direction::Shrink => sizer.size - sizer.min_size,
            Direction::Grow => sizer.max_size - sizer.size,
        }
    }

    #[inline]
    fn pin(self, sizer: &mut Sizer) {
        sizer.size = match self {
            Direction::Shrink => sizer.min_size,
            Direction::Grow => sizer.max_size,
        };
    }

    #[inline]
    fn step(self, sizer: &mut Sizer, amount: f64) {
        match self {
            Direction::Shrink => sizer.size -= amount,
            Direction::Grow => sizer.size += amount,
        }
    }
}

/// Working state for one call. `done` marks sizers pinned to a limit.
struct Line<'a> {
    sizers: &'a mut [Sizer],
    done: Vec<bool>,
    not_done: usize,
    /// Magnitude of the delta still to hand out.
    free_space: f64,
    direction: Direction,
    tolerance: f64,
}

impl Line<'_> {
    /// Move the sizer at `index` by `amount`, pinning it when that reaches
    /// its limit. Returns `true` if the sizer was pinned.
    fn apply(&mut self, index: usize, amount: f64) -> bool {
        let direction = self.direction;
        let sizer = &mut self.sizers[index];
        if direction.reaches_limit(sizer, amount) {
            self.free_space -= direction.room(sizer);
            direction.pin(sizer);
            self.done[index] = true;
            self.not_done -= 1;
            true
        } else {
            self.free_space -= amount;
            direction.step(sizer, amount);
            false
        }
    }

    fn stretch_phase(&mut self, mut total_stretch: u64, mut stretch_count: usize) {
        while stretch_count > 0 && self.free_space > self.tolerance {
            // Shares within a pass are computed against this snapshot.
            let dist_space = self.free_space;
            let dist_stretch = total_stretch as f64;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                phase = "stretch",
                free_space = dist_space,
                stretch = total_stretch,
                movable = stretch_count,
                "pass"
            );

            for index in 0..self.sizers.len() {
                let stretch = self.sizers[index].stretch;
                if self.done[index] || stretch == 0 {
                    continue;
                }
                let amount = f64::from(stretch) * dist_space / dist_stretch;
                if self.apply(index, amount) {
                    total_stretch -= u64::from(stretch);
                    stretch_count -= 1;
                }
            }
        }
    }

    fn equal_phase(&mut self) {
        while self.not_done > 0 && self.free_space > self.tolerance {
            let amount = self.free_space / self.not_done as f64;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                phase = "equal",
                free_space = self.free_space,
                movable = self.not_done,
                "pass"
            );

            for index in 0..self.sizers.len() {
                if !self.done[index] {
                    self.apply(index, amount);
                }
            }
        }
    }
}
