#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A unit type, used to check that collections handle elements which need no storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unit;

/// A shared tally of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    pub fn new() -> DropTally {
        DropTally::default()
    }

    /// Creates a new value which increments this tally when dropped.
    pub fn track(&self) -> Tracked {
        Tracked(self.0.clone())
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value that records its own drop in the [`DropTally`] it was created from.
#[derive(Debug)]
pub struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
