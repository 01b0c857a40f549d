// model = "claude-opus-4-5"
// created = "2026-02-04"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Decorators layering a lock or a mutation guard over a list.
//!
//! Both wrappers are plain composition: they hold the wrapped list and
//! forward calls, adding exactly one concern. [`SynchronizedList`]
//! serializes every call through a single coarse lock held for the
//! duration of that call. [`UnmodifiableList`] forwards reads and fails
//! every mutation with [`ListError::UnsupportedOperation`]. Neither
//! copies any state.

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::backing::BackingSequence;
use crate::error::ListError;
use crate::error::Result;
use crate::list::AdaptiveList;

/// A list wrapper that serializes every call through one lock.
///
/// The lock is coarse-grained and per-call: two separate calls are two
/// separate critical sections, so check-then-act sequences need
/// [`with_lock`]. The lock is not re-entrant - do not call other
/// methods on the wrapper from inside a `with_lock` closure.
///
/// [`with_lock`]: SynchronizedList::with_lock
pub struct SynchronizedList<S: BackingSequence> {
    inner: Mutex<AdaptiveList<S>>,
}

impl<S: BackingSequence> SynchronizedList<S> {
    /// Wrap `list`, taking ownership. No state is copied.
    pub fn new(list: AdaptiveList<S>) -> SynchronizedList<S> {
        return SynchronizedList {
            inner: Mutex::new(list),
        };
    }

    fn lock(&self) -> MutexGuard<'_, AdaptiveList<S>> {
        return self.inner.lock().expect("list lock poisoned");
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.lock().len();
    }

    /// Check whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        return self.lock().is_empty();
    }

    /// Copy out the element at `index`.
    pub fn get(&self, index: usize) -> Result<S::Item>
    where
        S::Item: Clone,
    {
        return self.lock().get(index).cloned();
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&self, index: usize, value: S::Item) -> Result<S::Item> {
        return self.lock().set(index, value);
    }

    /// Insert `value` at `index`.
    pub fn insert(&self, index: usize, value: S::Item) -> Result<()> {
        return self.lock().insert(index, value);
    }

    /// Append `value` at the end.
    pub fn push(&self, value: S::Item) {
        self.lock().push(value);
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<S::Item> {
        return self.lock().remove_at(index);
    }

    /// Check whether any element equals `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        return self.lock().contains(value);
    }

    /// Copy the content into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        return self.lock().to_vec();
    }

    /// Run `f` with the lock held, for compound operations that must
    /// see a consistent list across multiple steps.
    pub fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut AdaptiveList<S>) -> R,
    {
        return f(&mut self.lock());
    }

    /// Unwrap the decorated list.
    pub fn into_inner(self) -> AdaptiveList<S> {
        return self.inner.into_inner().expect("list lock poisoned");
    }
}

/// A read-only list wrapper. Every mutating call fails with
/// [`ListError::UnsupportedOperation`] and leaves the list untouched.
pub struct UnmodifiableList<S: BackingSequence> {
    inner: AdaptiveList<S>,
}

impl<S: BackingSequence> UnmodifiableList<S> {
    /// Wrap `list`, taking ownership. No state is copied.
    pub fn new(list: AdaptiveList<S>) -> UnmodifiableList<S> {
        return UnmodifiableList { inner: list };
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.inner.len();
    }

    /// Check whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        return self.inner.is_empty();
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&S::Item> {
        return self.inner.get(index);
    }

    /// Check whether any element equals `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        return self.inner.contains(value);
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        return self.inner.index_of(value);
    }

    /// Visit the elements at `from..=to` in ascending order.
    pub fn for_each<F>(&self, from: usize, to: usize, visitor: F) -> Result<()>
    where
        F: FnMut(&S::Item),
    {
        return self.inner.for_each(from, to, visitor);
    }

    /// Copy the content into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        return self.inner.to_vec();
    }

    /// Rejected: the list is unmodifiable.
    pub fn set(&self, _index: usize, _value: S::Item) -> Result<S::Item> {
        return Err(ListError::UnsupportedOperation("set"));
    }

    /// Rejected: the list is unmodifiable.
    pub fn insert(&self, _index: usize, _value: S::Item) -> Result<()> {
        return Err(ListError::UnsupportedOperation("insert"));
    }

    /// Rejected: the list is unmodifiable.
    pub fn push(&self, _value: S::Item) -> Result<()> {
        return Err(ListError::UnsupportedOperation("push"));
    }

    /// Rejected: the list is unmodifiable.
    pub fn remove_at(&self, _index: usize) -> Result<S::Item> {
        return Err(ListError::UnsupportedOperation("remove_at"));
    }

    /// Rejected: the list is unmodifiable.
    pub fn clear(&self) -> Result<()> {
        return Err(ListError::UnsupportedOperation("clear"));
    }

    /// Unwrap the decorated list, restoring mutability.
    pub fn into_inner(self) -> AdaptiveList<S> {
        return self.inner;
    }
}
