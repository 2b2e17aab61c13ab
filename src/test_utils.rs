//! Shared fixtures for the unit tests in this crate.

use alloc::vec::Vec;
use core::cell::RefCell;
use core::cmp::Ordering;

/// Fixed seed so the randomized tests are reproducible.
pub const RNG_SEED: [u8; 32] = [
    0xC0, 0xCA, 0x15, 0xF4, 0x11, 0xEC, 0x5E, 0xED, 0x13, 0x37, 0xB0, 0x07, 0xCA, 0xFE, 0xD0, 0x0D,
    0x6E, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E, 0x6F, 0x70, 0x81, 0x92, 0xA3, 0xB4, 0xC5, 0xD6, 0xE7, 0xF8,
];

/// Records the values dropped through [`Droppable`] wrappers handed out by
/// [`new_droppable`](DropCounter::new_droppable), in drop order.
pub struct DropCounter {
    log: RefCell<Vec<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn new_droppable(&self, value: usize) -> Droppable<'_> {
        Droppable {
            value,
            counter: self,
        }
    }

    pub fn dropped(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn log(&self) -> Vec<usize> {
        self.log.borrow().clone()
    }
}

/// A value that reports its own drop to the [`DropCounter`] it was made by.
/// Compares by `value` alone.
pub struct Droppable<'a> {
    pub value: usize,
    counter: &'a DropCounter,
}

impl Drop for Droppable<'_> {
    fn drop(&mut self) {
        self.counter.log.borrow_mut().push(self.value);
    }
}

impl PartialEq for Droppable<'_> {
    fn eq(&self, rhs: &Self) -> bool {
        self.value == rhs.value
    }
}

impl Eq for Droppable<'_> {}

impl PartialOrd for Droppable<'_> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Droppable<'_> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.value.cmp(&rhs.value)
    }
}
