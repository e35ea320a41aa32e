//! Integer container for the Monty interpreter
//!
//! This module provides the single container a Monty program operates on:
//! - [`Stack`]: a doubly-linked sequence of integer cells
//! - [`Mode`]: the addressing discipline (LIFO stack or FIFO queue)
//!
//! # Storage
//!
//! Cells live in an arena (`Vec<Cell>`) and link to each other by index. The
//! arena owns every cell; `prev`/`next` are plain indices used for ordering
//! only, so there is no ownership cycle and dropping the container never
//! recurses. Slots of removed cells are recycled through a free list.
//!
//! # Front and back
//!
//! The front is where `pop`, `pint`, `pchar` and the arithmetic opcodes act.
//! In [`Mode::Stack`] a push inserts at the front; in [`Mode::Queue`] it
//! appends at the back.

use super::value::Value;
use crate::interpreter::errors::MontyError;
use std::fmt;
use tracing::trace;

/// Addressing discipline of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// LIFO: push and pop both act at the front
    #[default]
    Stack,
    /// FIFO: push appends at the back, pop removes from the front
    Queue,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stack => write!(f, "stack"),
            Mode::Queue => write!(f, "queue"),
        }
    }
}

/// Index of a cell in the arena
type CellId = usize;

#[derive(Debug, Clone, Copy)]
struct Cell {
    value: Value,
    prev: Option<CellId>,
    next: Option<CellId>,
}

/// The container: an ordered sequence of integers plus its addressing mode
#[derive(Debug, Default)]
pub struct Stack {
    cells: Vec<Cell>,
    free: Vec<CellId>,
    head: Option<CellId>,
    tail: Option<CellId>,
    len: usize,
    mode: Mode,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: Mode) -> Self {
        let mut stack = Self::default();
        stack.mode = mode;
        stack
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Number of values in the container
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert a value where the active mode designates
    pub fn push(&mut self, value: Value) -> Result<(), MontyError> {
        match self.mode {
            Mode::Stack => self.push_front(value),
            Mode::Queue => self.push_back(value),
        }
    }

    /// Insert a value before the current front
    pub fn push_front(&mut self, value: Value) -> Result<(), MontyError> {
        let id = self.allocate(value)?;
        self.link_front(id);
        Ok(())
    }

    /// Append a value after the current back
    pub fn push_back(&mut self, value: Value) -> Result<(), MontyError> {
        let id = self.allocate(value)?;
        self.link_back(id);
        Ok(())
    }

    /// Remove and return the front value
    pub fn pop_front(&mut self, line: usize) -> Result<Value, MontyError> {
        self.take_front()
            .ok_or(MontyError::EmptyStackOnPop { line })
    }

    /// Return the front value without removing it
    pub fn peek_front(&self, line: usize) -> Result<Value, MontyError> {
        self.front().ok_or(MontyError::EmptyStackOnPrint { line })
    }

    pub fn front(&self) -> Option<Value> {
        self.head.map(|id| self.cells[id].value)
    }

    pub fn front_mut(&mut self) -> Option<&mut Value> {
        let id = self.head?;
        Some(&mut self.cells[id].value)
    }

    pub fn back(&self) -> Option<Value> {
        self.tail.map(|id| self.cells[id].value)
    }

    /// Remove the front value, if any
    pub fn take_front(&mut self) -> Option<Value> {
        let id = self.head?;
        self.unlink(id);
        self.free.push(id);
        Some(self.cells[id].value)
    }

    /// Remove the back value, if any
    pub fn take_back(&mut self) -> Option<Value> {
        let id = self.tail?;
        self.unlink(id);
        self.free.push(id);
        Some(self.cells[id].value)
    }

    /// Exchange the two front values. Returns false if there are fewer than two.
    pub fn swap_front(&mut self) -> bool {
        let Some(first) = self.head else {
            return false;
        };
        let Some(second) = self.cells[first].next else {
            return false;
        };
        let value = self.cells[first].value;
        self.cells[first].value = self.cells[second].value;
        self.cells[second].value = value;
        true
    }

    /// Move the front cell to the back (no-op with fewer than two values)
    pub fn rotate_left(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(id) = self.head {
            self.unlink(id);
            self.link_back(id);
        }
    }

    /// Move the back cell to the front (no-op with fewer than two values)
    pub fn rotate_right(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(id) = self.tail {
            self.unlink(id);
            self.link_front(id);
        }
    }

    /// Iterate values front to back
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self,
            cursor: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Free every cell. Safe to call any number of times.
    pub fn release_all(&mut self) {
        if self.cells.is_empty() && self.head.is_none() {
            return;
        }
        trace!(cells = self.len, "releasing container");
        self.cells = Vec::new();
        self.free = Vec::new();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn allocate(&mut self, value: Value) -> Result<CellId, MontyError> {
        let cell = Cell {
            value,
            prev: None,
            next: None,
        };

        if let Some(id) = self.free.pop() {
            self.cells[id] = cell;
            return Ok(id);
        }

        self.cells
            .try_reserve(1)
            .map_err(|_| MontyError::AllocationFailure)?;
        self.cells.push(cell);
        Ok(self.cells.len() - 1)
    }

    fn link_front(&mut self, id: CellId) {
        self.cells[id].prev = None;
        self.cells[id].next = self.head;
        match self.head {
            Some(old) => self.cells[old].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    fn link_back(&mut self, id: CellId) {
        self.cells[id].next = None;
        self.cells[id].prev = self.tail;
        match self.tail {
            Some(old) => self.cells[old].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Detach a cell from the chain without freeing its slot
    fn unlink(&mut self, id: CellId) {
        let Cell { prev, next, .. } = self.cells[id];
        match prev {
            Some(p) => self.cells[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.cells[n].prev = prev,
            None => self.tail = prev,
        }
        self.cells[id].prev = None;
        self.cells[id].next = None;
        self.len -= 1;
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Front-to-back iterator over a [`Stack`]
pub struct Iter<'a> {
    stack: &'a Stack,
    cursor: Option<CellId>,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let id = self.cursor?;
        let cell = &self.stack.cells[id];
        self.cursor = cell.next;
        Some(cell.value)
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
