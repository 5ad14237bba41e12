// Integration tests for the playfield store

use wierdtty::machine::grid::{Grid, BLANK};

/// Read a row back out of the grid, trimming trailing blanks.
fn read_row(grid: &Grid, y: i64, min_x: i64, max_x: i64) -> String {
    let row: String = (min_x..=max_x).map(|x| grid.get(x, y)).collect();
    row.trim_end().to_string()
}

#[test]
fn unwritten_cells_read_blank() {
    let grid = Grid::new();
    assert_eq!(grid.get(0, 0), BLANK);
    assert_eq!(grid.get(-1000, 1000), BLANK);
    assert!(!grid.is_occupied(0, 0));
}

#[test]
fn clear_forgets_everything() {
    let mut grid = Grid::new();
    grid.load(1, 1, "abc\ndef");
    grid.clear();
    for y in -2..5 {
        for x in -2..5 {
            assert_eq!(grid.get(x, y), BLANK);
        }
    }
    assert_eq!(grid.min_x(), None);
    assert_eq!(grid.max_x(), None);
    assert_eq!(grid.min_y(), None);
    assert_eq!(grid.max_y(), None);
}

#[test]
fn load_round_trips_program_text() {
    let text = "ab c\n  d\nxy";
    let mut grid = Grid::new();
    grid.load(1, 1, text);

    assert_eq!(grid.min_x(), Some(1));
    assert_eq!(grid.max_x(), Some(4));
    assert_eq!(grid.min_y(), Some(1));
    assert_eq!(grid.max_y(), Some(3));

    let rows: Vec<String> = (1..=3).map(|y| read_row(&grid, y, 1, 4)).collect();
    let original: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    assert_eq!(rows, original);
}

#[test]
fn load_skips_blanks_but_put_may_write_them() {
    let mut grid = Grid::new();
    grid.load(1, 1, "a b");
    // The gap between a and b was never written.
    assert_eq!(grid.cell_count(), 2);

    // An explicit blank is a real entry: readable as blank, unoccupied,
    // and it still stretches the bounds.
    grid.put(10, 10, BLANK);
    assert_eq!(grid.get(10, 10), BLANK);
    assert!(!grid.is_occupied(10, 10));
    assert_eq!(grid.cell_count(), 3);
    assert_eq!(grid.max_x(), Some(10));
    assert_eq!(grid.max_y(), Some(10));
}

#[test]
fn put_overwrites_and_grows_bounds() {
    let mut grid = Grid::new();
    grid.put(2, 3, 'x');
    grid.put(2, 3, 'y');
    assert_eq!(grid.get(2, 3), 'y');
    grid.put(-4, 7, 'z');
    assert_eq!(grid.min_x(), Some(-4));
    assert_eq!(grid.max_x(), Some(2));
    assert_eq!(grid.min_y(), Some(3));
    assert_eq!(grid.max_y(), Some(7));
}

#[test]
fn negative_origin_offsets_every_cell() {
    let mut grid = Grid::new();
    grid.load(-2, -2, "ab");
    assert_eq!(grid.get(-2, -2), 'a');
    assert_eq!(grid.get(-1, -2), 'b');
}
