//! The sizer record: one element's constraints and computed size along a
//! layout axis.

use std::fmt;

/// Geometry inputs and output for one element of a layout line.
///
/// Callers own a slice of sizers (one per child along the axis), fill in the
/// input fields, and read [`size`](Self::size) back after running
/// [`distribute`](crate::distribute). Records are reused pass after pass; the
/// algorithm rewrites `size` every time and never looks at the value left
/// over from a previous call.
///
/// # Example
///
/// ```
/// use linebox::Sizer;
///
/// let sizer = Sizer::new().with_size_hint(40.0).with_min_size(10.0).with_max_size(60.0);
/// assert_eq!(sizer.clamp(80.0), 60.0);
/// assert_eq!(sizer.clamp(5.0), 10.0);
/// assert_eq!(sizer.stretch, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sizer {
    /// Preferred size. Clamped into `[min_size, max_size]` before use.
    pub size_hint: f64,
    /// Lower bound.
    pub min_size: f64,
    /// Upper bound, may be `f64::INFINITY`.
    pub max_size: f64,
    /// Relative weight for growing and shrinking.
    ///
    /// A sizer with stretch `0` only moves once every sizer with a positive
    /// stretch has reached its limit.
    pub stretch: u32,
    /// Computed size, written by the distribution algorithm.
    pub size: f64,
}

impl Default for Sizer {
    fn default() -> Self {
        Self {
            size_hint: 0.0,
            min_size: 0.0,
            max_size: f64::INFINITY,
            stretch: 1,
            size: 0.0,
        }
    }
}

impl Sizer {
    /// A sizer with no hint, no minimum, unbounded maximum and stretch 1.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A rigid sizer: hint, minimum and maximum all equal `size`, stretch 0.
    #[inline]
    pub fn fixed(size: f64) -> Self {
        Self {
            size_hint: size,
            min_size: size,
            max_size: size,
            stretch: 0,
            size,
        }
    }

    /// Set the preferred size.
    #[must_use]
    pub fn with_size_hint(mut self, size_hint: f64) -> Self {
        self.size_hint = size_hint;
        self
    }

    /// Set the lower bound.
    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn with_max_size(mut self, max_size: f64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the stretch factor.
    #[must_use]
    pub fn with_stretch(mut self, stretch: u32) -> Self {
        self.stretch = stretch;
        self
    }

    /// Clamp a value to this sizer's bounds.
    ///
    /// The minimum wins when the bounds are inverted.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        self.min_size.max(value.min(self.max_size))
    }

    /// Check the input fields against the invariants the algorithm assumes.
    ///
    /// Distribution never calls this; malformed sizers produce unspecified
    /// (but non-panicking) output. Use it at the boundary where sizers are
    /// built from untrusted data.
    pub fn validate(&self) -> Result<(), SizerError> {
        if self.min_size.is_nan() || self.min_size.is_infinite() {
            return Err(SizerError::NonFiniteBound {
                min_size: self.min_size,
                max_size: self.max_size,
            });
        }
        if self.max_size.is_nan() {
            return Err(SizerError::NonFiniteBound {
                min_size: self.min_size,
                max_size: self.max_size,
            });
        }
        if self.min_size < 0.0 {
            return Err(SizerError::NegativeMinimum {
                min_size: self.min_size,
            });
        }
        if self.min_size > self.max_size {
            return Err(SizerError::InvertedBounds {
                min_size: self.min_size,
                max_size: self.max_size,
            });
        }
        if self.size_hint.is_nan() || self.size_hint < 0.0 {
            return Err(SizerError::InvalidSizeHint {
                size_hint: self.size_hint,
            });
        }
        Ok(())
    }
}

/// Validate every sizer in a line, reporting the first failure.
///
/// ```
/// use linebox::{Sizer, SizerError, validate_sizers};
///
/// let line = [Sizer::new(), Sizer::new().with_min_size(5.0).with_max_size(1.0)];
/// let err = validate_sizers(&line).unwrap_err();
/// assert!(matches!(err, SizerError::AtIndex { index: 1, .. }));
/// ```
pub fn validate_sizers(sizers: &[Sizer]) -> Result<(), SizerError> {
    for (index, sizer) in sizers.iter().enumerate() {
        sizer.validate().map_err(|source| SizerError::AtIndex {
            index,
            source: Box::new(source),
        })?;
    }
    Ok(())
}

/// Reason a sizer fails [`Sizer::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum SizerError {
    /// The minimum is NaN or infinite, or the maximum is NaN.
    NonFiniteBound { min_size: f64, max_size: f64 },
    /// The minimum is below zero.
    NegativeMinimum { min_size: f64 },
    /// `min_size > max_size`.
    InvertedBounds { min_size: f64, max_size: f64 },
    /// The hint is NaN or negative.
    InvalidSizeHint { size_hint: f64 },
    /// A sizer inside a line failed validation.
    AtIndex {
        index: usize,
        source: Box<SizerError>,
    },
}

impl fmt::Display for SizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { min_size, max_size } => {
                write!(f, "sizer bounds are not usable: min={min_size}, max={max_size}")
            }
            Self::NegativeMinimum { min_size } => {
                write!(f, "sizer minimum is negative: {min_size}")
            }
            Self::InvertedBounds { min_size, max_size } => {
                write!(f, "sizer minimum {min_size} exceeds maximum {max_size}")
            }
            Self::InvalidSizeHint { size_hint } => {
                write!(f, "sizer size hint is invalid: {size_hint}")
            }
            Self::AtIndex { index, source } => write!(f, "sizer {index}: {source}"),
        }
    }
}

impl std::error::Error for SizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::AtIndex { source, .. } = self {
            return Some(source.as_ref());
        }
        None
    }
}
