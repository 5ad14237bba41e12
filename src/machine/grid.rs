#![allow(dead_code)] // Complete API module, not all methods currently used
//! Sparse playfield storage
//!
//! The playfield is a mapping from integer coordinates to single characters.
//! Cells exist only once written; everything else reads as [`BLANK`]. The
//! grid additionally tracks the bounding box of every cell ever written
//! (until [`Grid::clear`]), which the playfield pane uses to frame its
//! viewport.
//!
//! An explicitly written blank is a real entry: it reads back as blank and
//! counts as unoccupied, but it still extends the tracked bounds. This
//! mirrors how the GET/PUT instruction can "erase" a cell without shrinking
//! the visible program area.

use rustc_hash::FxHashMap;

/// What unwritten cells read as. Program text treats this character as
/// empty space rather than content.
pub const BLANK: char = ' ';

/// Bounding box of every written cell.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Bounds {
    fn point(x: i64, y: i64) -> Self {
        Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    fn grow(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// A sparse two-dimensional character store
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: FxHashMap<(i64, i64), char>,
    bounds: Option<Bounds>,
}

impl Grid {
    pub fn new() -> Self {
        Grid::default()
    }

    /// Read the character at a coordinate. Never fails; unwritten cells
    /// read as [`BLANK`].
    pub fn get(&self, x: i64, y: i64) -> char {
        self.cells.get(&(x, y)).copied().unwrap_or(BLANK)
    }

    /// Whether a cell holds program content. Explicit blanks and unwritten
    /// cells are both unoccupied.
    pub fn is_occupied(&self, x: i64, y: i64) -> bool {
        self.get(x, y) != BLANK
    }

    /// Store a character, overwriting any prior value and extending the
    /// tracked bounds if needed.
    pub fn put(&mut self, x: i64, y: i64, ch: char) {
        self.cells.insert((x, y), ch);
        match &mut self.bounds {
            Some(bounds) => bounds.grow(x, y),
            None => self.bounds = Some(Bounds::point(x, y)),
        }
    }

    /// Discard all entries and reset the bounds to empty.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.bounds = None;
    }

    /// Write program text into the grid. Rows are separated by line breaks;
    /// row `r`, column `c` lands at `(origin_x + c, origin_y + r)`. Blank
    /// characters in the text are skipped, so loading never creates
    /// explicit-blank entries.
    pub fn load(&mut self, origin_x: i64, origin_y: i64, text: &str) {
        for (row, line) in text.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch != BLANK {
                    self.put(origin_x + col as i64, origin_y + row as i64, ch);
                }
            }
        }
    }

    pub fn min_x(&self) -> Option<i64> {
        self.bounds.map(|b| b.min_x)
    }

    pub fn max_x(&self) -> Option<i64> {
        self.bounds.map(|b| b.max_x)
    }

    pub fn min_y(&self) -> Option<i64> {
        self.bounds.map(|b| b.min_y)
    }

    pub fn max_y(&self) -> Option<i64> {
        self.bounds.map(|b| b.max_y)
    }

    /// Number of written cells (explicit blanks included).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
