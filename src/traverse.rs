// model = "claude-opus-4-5"
// created = "2026-02-04"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Range-bounded traversal with a size-triggered batched path.
//!
//! [`traverse`] visits the elements at absolute indices `from..=to` in
//! ascending order, exactly once each. Two interchangeable strategies
//! sit behind that one entry point:
//!
//! - **naive**: a per-index loop, one bounds-checked `get` per element;
//! - **batched**: a walk over the backing's contiguous slice, where the
//!   whole range is checked once and iteration inside it is free of
//!   per-element checks.
//!
//! The batched path engages when the backing holds [`BATCH_THRESHOLD`]
//! or more elements and can expose a slice. The strategy never changes
//! which elements are visited or their order; both strategies are public
//! so tests and benches can force either one on the same input.
//!
//! Visitors must not structurally mutate the sequence mid-traversal;
//! the borrow held by the traversal makes that unrepresentable.

use crate::backing::BackingSequence;
use crate::error::ListError;
use crate::error::Result;
use crate::profile;

/// Backings at or above this size take the batched path when they can
/// expose contiguous storage. Purely a performance heuristic.
pub const BATCH_THRESHOLD: usize = 100;

/// Validate an inclusive visitation range against a sequence size.
fn check_range(from: usize, to: usize, size: usize) -> Result<()> {
    if from > to {
        return Err(ListError::IllegalRange { from, to });
    }
    if to >= size {
        return Err(ListError::IndexOutOfRange { index: to, len: size });
    }
    return Ok(());
}

/// Visit the elements at `from..=to`, picking a strategy by size.
pub fn traverse<S, F>(seq: &S, from: usize, to: usize, visitor: F) -> Result<()>
where
    S: BackingSequence,
    F: FnMut(&S::Item),
{
    if seq.size() >= BATCH_THRESHOLD {
        if let Some(slice) = seq.as_slice() {
            return traverse_batched(slice, from, to, visitor);
        }
    }
    return traverse_naive(seq, from, to, visitor);
}

/// Visit the elements at `from..=to` along with their absolute indices,
/// picking a strategy by size.
pub fn traverse_indexed<S, F>(seq: &S, from: usize, to: usize, visitor: F) -> Result<()>
where
    S: BackingSequence,
    F: FnMut(usize, &S::Item),
{
    if seq.size() >= BATCH_THRESHOLD {
        if let Some(slice) = seq.as_slice() {
            return traverse_batched_indexed(slice, from, to, visitor);
        }
    }
    return traverse_naive_indexed(seq, from, to, visitor);
}

/// The per-index strategy. Every access goes through the backing's
/// `get`.
pub fn traverse_naive<S, F>(seq: &S, from: usize, to: usize, mut visitor: F) -> Result<()>
where
    S: BackingSequence,
    F: FnMut(&S::Item),
{
    check_range(from, to, seq.size())?;
    profile::naive_run();
    for index in from..=to {
        visitor(seq.get(index));
    }
    return Ok(());
}

/// The per-index strategy, passing the absolute index to the visitor.
pub fn traverse_naive_indexed<S, F>(seq: &S, from: usize, to: usize, mut visitor: F) -> Result<()>
where
    S: BackingSequence,
    F: FnMut(usize, &S::Item),
{
    check_range(from, to, seq.size())?;
    profile::naive_run();
    for index in from..=to {
        visitor(index, seq.get(index));
    }
    return Ok(());
}

/// The batched strategy: one range check for the whole run, then plain
/// slice iteration.
pub fn traverse_batched<T, F>(slice: &[T], from: usize, to: usize, mut visitor: F) -> Result<()>
where
    F: FnMut(&T),
{
    check_range(from, to, slice.len())?;
    profile::batched_run();
    for item in &slice[from..=to] {
        visitor(item);
    }
    return Ok(());
}

/// The batched strategy, passing the absolute index to the visitor.
pub fn traverse_batched_indexed<T, F>(
    slice: &[T],
    from: usize,
    to: usize,
    mut visitor: F,
) -> Result<()>
where
    F: FnMut(usize, &T),
{
    check_range(from, to, slice.len())?;
    profile::batched_run();
    for (offset, item) in slice[from..=to].iter().enumerate() {
        visitor(from + offset, item);
    }
    return Ok(());
}
