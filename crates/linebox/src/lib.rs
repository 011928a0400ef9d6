#![forbid(unsafe_code)]

//! One-dimensional space distribution for box layouts.
//!
//! This crate answers a single question for a row or column of elements: given
//! a fixed amount of space, how big should each element be?
//!
//! - [`Sizer`] - one element's size hint, bounds and stretch factor, plus the
//!   computed size
//! - [`distribute`] - fill a line of sizers with sizes that sum to the space
//! - [`adjust`] - move the boundary between two sizers (split-handle drag)
//! - [`Distributor`] - distribution settings (near-zero threshold)
//!
//! The algorithm is stateless across calls: sizers carry inputs in and the
//! computed size out, and every call starts from the hints again.
//!
//! # Example
//!
//! ```
//! use linebox::{Sizer, distribute};
//!
//! let mut line = [
//!     Sizer::fixed(20.0),
//!     Sizer::new().with_size_hint(40.0).with_stretch(1),
//!     Sizer::new().with_size_hint(40.0).with_stretch(3),
//! ];
//!
//! // 40 extra units go to the stretchable sizers, 1:3.
//! let slack = distribute(&mut line, 140.0);
//! assert_eq!(slack, 0.0);
//! assert_eq!(line[0].size, 20.0);
//! assert_eq!(line[1].size, 50.0);
//! assert_eq!(line[2].size, 70.0);
//! ```
//!
//! # Features
//!
//! - `tracing`: spans and trace events for each distribution and adjustment
//! - `serde`: `Serialize`/`Deserialize` for [`Sizer`] and [`Distributor`]

pub mod adjust;
pub mod distribute;
pub mod sizer;

pub use adjust::adjust;
pub use distribute::{Distributor, NEAR_ZERO, compute_sizes, distribute};
pub use sizer::{Sizer, SizerError, validate_sizers};
