//! Cursor over a row-major grid of items.
//!
//! The board is a grid of `columns` tiles per row; the topic menu is the
//! same cursor with a single column.

use crate::map::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    len: usize,
    columns: usize,
}

impl GridCursor {
    pub fn new(len: usize, columns: usize) -> Self {
        Self {
            index: 0,
            len,
            columns: columns.max(1),
        }
    }

    /// Cursor for a single-column list.
    pub fn list(len: usize) -> Self {
        Self::new(len, 1)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(column, row)` of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.index % self.columns, self.index / self.columns)
    }

    /// Change the number of items, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move one step. Moves off the grid are ignored.
    ///
    /// Returns whether the cursor moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.len == 0 {
            return false;
        }
        let (col, _) = self.position();
        let next = match direction {
            Direction::Left if col > 0 => Some(self.index - 1),
            Direction::Right if col + 1 < self.columns => Some(self.index + 1),
            Direction::Up => self.index.checked_sub(self.columns),
            Direction::Down => Some(self.index + self.columns),
            _ => None,
        };

        match next {
            Some(i) if i < self.len => {
                self.index = i;
                true
            }
            _ => false,
        }
    }
}
