#![allow(dead_code)] // Complete API module, not all methods currently used
//! The instruction pointer: a position with a compass direction
//!
//! Wierd has no linear program counter. The "next instruction" is wherever
//! probing from the current position and direction finds occupied cells, so
//! the heading is the whole of control-flow state. Directions are restricted
//! to the eight octile vectors and rotate in 45° steps; rotation is a cyclic
//! table lookup, never trigonometry, so components stay exactly in
//! {-1, 0, 1}.

/// The eight compass vectors in counterclockwise order, starting from
/// straight up (screen coordinates: y grows downward).
const COMPASS: [(i64, i64); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Arrow glyph per compass slot, same order as `COMPASS`. Used by the
/// playfield pane to draw the cursor on blank cells.
const ARROWS: [char; 8] = ['↑', '↖', '←', '↙', '↓', '↘', '→', '↗'];

/// A position plus one of eight compass directions.
///
/// `Copy` is deliberate: instruction decoding probes by mutating a copy
/// (rotate, advance, test) and only commits the copy back when a probe
/// succeeds, so the committed heading is never corrupted by speculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    x: i64,
    y: i64,
    dir: usize,
}

impl Heading {
    /// Create a heading at `(x, y)` facing `(dx, dy)`.
    ///
    /// # Panics
    ///
    /// Panics if `(dx, dy)` is not one of the eight octile unit vectors.
    pub fn new(x: i64, y: i64, dx: i64, dy: i64) -> Self {
        let dir = COMPASS
            .iter()
            .position(|&d| d == (dx, dy))
            .expect("heading direction must be one of the eight compass vectors");
        Heading { x, y, dir }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    pub fn dx(&self) -> i64 {
        COMPASS[self.dir].0
    }

    pub fn dy(&self) -> i64 {
        COMPASS[self.dir].1
    }

    pub fn direction(&self) -> (i64, i64) {
        COMPASS[self.dir]
    }

    /// Move one cell along the current direction.
    pub fn advance(&mut self) {
        self.x += self.dx();
        self.y += self.dy();
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.dir = (self.dir + 1) % 8;
    }

    pub fn rotate_clockwise(&mut self) {
        self.dir = (self.dir + 7) % 8;
    }

    /// Rotate counterclockwise in 45° increments. `degrees` is a
    /// non-negative multiple of 45; full turns wrap, so 0 and 360 are
    /// no-ops and 315 is one clockwise step.
    pub fn rotate_degrees(&mut self, degrees: u16) {
        self.dir = (self.dir + degrees as usize / 45) % 8;
    }

    /// Arrow glyph for the current direction.
    pub fn arrow(&self) -> char {
        ARROWS[self.dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_eighth_turns_restore_direction() {
        for &(dx, dy) in COMPASS.iter() {
            let mut heading = Heading::new(0, 0, dx, dy);
            for _ in 0..16 {
                heading.rotate_degrees(45);
            }
            assert_eq!(heading.direction(), (dx, dy));
        }
    }

    #[test]
    fn clockwise_undoes_counterclockwise() {
        let mut heading = Heading::new(0, 0, 1, 1);
        heading.rotate_counterclockwise();
        heading.rotate_clockwise();
        assert_eq!(heading.direction(), (1, 1));
    }

    #[test]
    fn rotate_315_matches_one_clockwise_step() {
        let mut by_degrees = Heading::new(0, 0, 1, 1);
        by_degrees.rotate_degrees(315);
        let mut by_step = Heading::new(0, 0, 1, 1);
        by_step.rotate_clockwise();
        assert_eq!(by_degrees.direction(), by_step.direction());
    }

    #[test]
    fn rotate_zero_is_a_noop() {
        let mut heading = Heading::new(3, 4, 0, -1);
        heading.rotate_degrees(0);
        assert_eq!(heading.direction(), (0, -1));
        assert_eq!(heading.position(), (3, 4));
    }

    #[test]
    fn advance_follows_direction() {
        let mut heading = Heading::new(1, 1, 1, -1);
        heading.advance();
        assert_eq!(heading.position(), (2, 0));
    }

    #[test]
    fn full_counterclockwise_cycle() {
        let mut heading = Heading::new(0, 0, 0, -1);
        let mut seen = vec![heading.direction()];
        for _ in 0..7 {
            heading.rotate_counterclockwise();
            seen.push(heading.direction());
        }
        assert_eq!(
            seen,
            vec![
                (0, -1),
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
                (1, 0),
                (1, -1)
            ]
        );
    }
}
