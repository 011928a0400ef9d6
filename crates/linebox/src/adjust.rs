//! Dragging the boundary between two sizers.
//!
//! A split handle sits after sizer `index`. Moving it by `delta` grows the
//! sizers on one side and shrinks those on the other by the same amount,
//! nearest sizers first. Only `size_hint` is rewritten, starting from the
//! sizes of the last distribution; run [`distribute`](crate::distribute)
//! afterwards to turn the new hints into sizes.

use crate::sizer::Sizer;

/// Move the boundary after `sizers[index]` by `delta`.
///
/// A positive delta grows `sizers[..=index]` and shrinks `sizers[index + 1..]`;
/// a negative delta does the opposite. The movement is capped by how far the
/// growing side can grow and the shrinking side can shrink. Each sizer the
/// walk reaches gets `size ± step` as its new hint; sizers beyond the point
/// where the movement runs out keep the hint they had.
///
/// Empty lines, a zero or NaN delta, and out-of-range indices are ignored.
///
/// ```
/// use linebox::{Sizer, adjust, distribute};
///
/// let mut line = [
///     Sizer::new().with_size_hint(50.0),
///     Sizer::new().with_size_hint(50.0),
/// ];
/// distribute(&mut line, 100.0);
/// adjust(&mut line, 0, 20.0);
/// distribute(&mut line, 100.0);
/// assert_eq!(line[0].size, 70.0);
/// assert_eq!(line[1].size, 30.0);
/// ```
pub fn adjust(sizers: &mut [Sizer], index: usize, delta: f64) {
    if sizers.is_empty() || index >= sizers.len() || delta == 0.0 || delta.is_nan() {
        return;
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("adjust", count = sizers.len(), index, delta);
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let (before, after) = sizers.split_at_mut(index + 1);
    let (before_side, after_side) = if delta > 0.0 {
        (Resize::Grow, Resize::Shrink)
    } else {
        (Resize::Shrink, Resize::Grow)
    };

    let before_limit: f64 = before.iter().map(|s| before_side.room(s)).sum();
    let after_limit: f64 = after.iter().map(|s| after_side.room(s)).sum();
    let amount = delta.abs().min(before_limit).min(after_limit);

    #[cfg(feature = "tracing")]
    tracing::trace!(before_limit, after_limit, applied = amount, "boundary moved");

    if amount.is_nan() || amount <= 0.0 {
        return;
    }

    // Both halves are walked outward from the handle.
    walk(before.iter_mut().rev(), amount, before_side);
    walk(after.iter_mut(), amount, after_side);
}

#[derive(Debug, Clone, Copy)]
enum Resize {
    Grow,
    Shrink,
}

impl Resize {
    /// How far the sizer can move from its current size in this direction.
    fn room(self, sizer: &Sizer) -> f64 {
        match self {
            Resize::Grow => sizer.max_size - sizer.size,
            Resize::Shrink => sizer.size - sizer.min_size,
        }
    }
}

fn walk<'a>(sizers: impl Iterator<Item = &'a mut Sizer>, mut remaining: f64, resize: Resize) {
    for sizer in sizers {
        if remaining.is_nan() || remaining <= 0.0 {
            break;
        }
        let limit = resize.room(sizer);
        let step = if limit >= remaining { remaining } else { limit };
        sizer.size_hint = match resize {
            Resize::Grow => sizer.size + step,
            Resize::Shrink => sizer.size - step,
        };
        remaining -= step;
    }
}
