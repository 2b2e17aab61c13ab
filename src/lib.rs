#![no_std]
#![warn(missing_docs)]

//! A growable priority queue implemented with an array-backed binary max-heap.
//!
//! [`BinaryHeap<T>`](BinaryHeap) stores its elements in a single contiguous
//! buffer that doubles in capacity whenever an insertion finds it full, and
//! never shrinks. Insertion and popping the largest element have amortized
//! O(log(n)) time complexity, checking the largest element is O(1).
//!
//! Mutating and accessing operations come in two flavors, which differ only
//! in how they report failure:
//!
//! * strict ([`insert`](BinaryHeap::insert), [`remove_top`](BinaryHeap::remove_top),
//!   [`peek_top`](BinaryHeap::peek_top)) return a `Result` with a typed error,
//! * lenient ([`offer`](BinaryHeap::offer), [`pop`](BinaryHeap::pop),
//!   [`peek`](BinaryHeap::peek)) return a sentinel (`false` or [`None`]) instead.
//!
//! This crate is `#![no_std]`, but requires the `alloc` crate.

extern crate alloc;

pub mod binary_heap;

pub use crate::binary_heap::{BinaryHeap, EmptyHeapError, NullElementError};

#[cfg(test)]
mod test_utils;
