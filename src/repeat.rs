//! Bounded and unbounded value producers.
//!
//! The same finite sequence is built two ways: an explicit iterator state
//! machine, and a one-liner from standard adapters. Both are lazy; nothing
//! is produced until the iterator is driven.

/// Yields a fixed value exactly `max_repeats` times, then `None` forever.
///
/// The hand-rolled form of [`bounded`]: the remaining count is the entire
/// iterator state.
#[derive(Debug, Clone)]
pub struct BoundedRepeater<T: Clone> {
    value: T,
    remaining: usize,
}

impl<T: Clone> BoundedRepeater<T> {
    pub fn new(value: T, max_repeats: usize) -> Self {
        BoundedRepeater { value, remaining: max_repeats }
    }
}

impl<T: Clone> Iterator for BoundedRepeater<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// The adapter-built equivalent of [`BoundedRepeater`].
pub fn bounded<T: Clone>(value: T, max_repeats: usize) -> impl Iterator<Item = T> {
    std::iter::repeat(value).take(max_repeats)
}

/// Yields its value forever; `next` never returns `None`.
///
/// Consuming this without `.take(n)` (or another terminating adapter) loops
/// forever. That is the point of the example, not an oversight.
#[derive(Debug, Clone)]
pub struct Repeater<T: Clone> {
    value: T,
}

impl<T: Clone> Repeater<T> {
    pub fn new(value: T) -> Self {
        Repeater { value }
    }
}

impl<T: Clone> Iterator for Repeater<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.value.clone())
    }
}
