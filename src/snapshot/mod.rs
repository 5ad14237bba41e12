#![allow(dead_code)] // Complete API module, not all methods currently used
// Snapshot management for reverse stepping

use std::collections::VecDeque;

use crate::interpreter::channels::{InputQueue, OutputLog};
use crate::interpreter::engine::{Op, Outcome};
use crate::machine::grid::Grid;
use crate::machine::heading::Heading;
use crate::machine::stack::Stack;

/// Complete machine state at one point in execution.
///
/// Captured by [`Interpreter::snapshot`] before each forward step and
/// applied back with [`Interpreter::restore`]; restoring reproduces the
/// state exactly, pending input and emitted output included.
///
/// [`Interpreter::snapshot`]: crate::interpreter::engine::Interpreter::snapshot
/// [`Interpreter::restore`]: crate::interpreter::engine::Interpreter::restore
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: Grid,
    pub heading: Heading,
    pub stack: Stack,
    pub input: InputQueue,
    pub output: OutputLog,
    pub last_op: Option<Op>,
    pub last_outcome: Outcome,
    pub steps: u64,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes.
    pub fn estimated_size(&self) -> usize {
        // Rough per-entry costs: a grid cell is a 16-byte key, a char, and
        // hash-table overhead; stack entries are plain i64s.
        let grid_size = self.grid.cell_count() * 32;
        let stack_size = self.stack.len() * 8;
        let channel_size = self.input.len() * 4 + self.output.len();
        std::mem::size_of::<Snapshot>() + grid_size + stack_size + channel_size
    }
}

/// Execution history with a bounded memory budget.
///
/// Pushing past the budget evicts the oldest snapshots, so stepping
/// backward always works for the most recent stretch of execution even
/// when a program runs unboundedly.
#[derive(Debug)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(max_memory: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot, evicting from the front if the budget is exceeded.
    /// The newest snapshot is always retained, even if it alone exceeds
    /// the budget.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.current_memory += snapshot.estimated_size();
        self.snapshots.push_back(snapshot);
        while self.current_memory > self.max_memory && self.snapshots.len() > 1 {
            if let Some(evicted) = self.snapshots.pop_front() {
                self.current_memory -= evicted.estimated_size();
            }
        }
    }

    /// Take the most recent snapshot back off the history.
    pub fn pop(&mut self) -> Option<Snapshot> {
        let snapshot = self.snapshots.pop_back()?;
        self.current_memory -= snapshot.estimated_size();
        Some(snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::Interpreter;

    #[test]
    fn pop_returns_newest_first() {
        let mut it = Interpreter::from_program(" *");
        let mut history = History::new(1024 * 1024);
        history.push(it.snapshot());
        it.step();
        history.push(it.snapshot());
        assert_eq!(history.len(), 2);
        let newest = history.pop().unwrap();
        assert_eq!(newest.steps, 1);
        let oldest = history.pop().unwrap();
        assert_eq!(oldest.steps, 0);
        assert!(history.is_empty());
        assert_eq!(history.memory_usage(), 0);
    }

    #[test]
    fn tight_budget_evicts_oldest_but_keeps_newest() {
        let it = Interpreter::from_program(" *");
        let mut history = History::new(1);
        history.push(it.snapshot());
        history.push(it.snapshot());
        assert_eq!(history.len(), 1);
    }
}
