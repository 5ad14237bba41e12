// Integration tests for single-instruction behavior through the public API

use wierdtty::interpreter::engine::{Interpreter, Op, Outcome};

#[test]
fn push1_on_the_cell_beside_the_origin() {
    // The 45-degree probe from (1,1) facing down-right lands on (2,1):
    // row 0, column 1 of the text.
    let mut it = Interpreter::from_program(" *");
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.last_op(), Some(Op::PushOne));
    assert_eq!(it.stack().len(), 1);
    assert_eq!(it.stack().peek(), Some(1));
    assert_eq!(it.heading().position(), (2, 1));
    assert_eq!(it.heading().direction(), (1, 0));
}

#[test]
fn nop_follows_the_occupied_diagonal() {
    let mut it = Interpreter::from_program("\n *");
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.last_op(), Some(Op::Nop));
    assert!(it.stack().is_empty());
    assert_eq!(it.heading().position(), (2, 2));
    assert_eq!(it.heading().direction(), (1, 1));
}

#[test]
fn blank_program_terminates_immediately() {
    let mut it = Interpreter::from_program("   \n   ");
    assert_eq!(it.step(), Outcome::Terminated);
    assert!(it.stack().is_empty());
    assert_eq!(it.steps(), 0);
    // Termination is stable under repeated stepping.
    assert_eq!(it.step(), Outcome::Terminated);
}

#[test]
fn empty_program_terminates_immediately() {
    let mut it = Interpreter::from_program("");
    assert_eq!(it.step(), Outcome::Terminated);
}

#[test]
fn conditional_with_empty_stack_turns_onto_the_probe() {
    // Two nops down the diagonal, then a cell on the 90-degree probe.
    // An empty pop reads as zero, so the heading turns 90 and lands on
    // the probed cell.
    let mut it = Interpreter::from_program("\n * *\n  *");
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.last_op(), Some(Op::Branch));
    assert_eq!(it.heading().position(), (4, 2));
    assert_eq!(it.heading().direction(), (1, -1));
    assert!(it.stack().is_empty());
    assert_eq!(it.step(), Outcome::Terminated);
}

#[test]
fn spark_jumps_the_gap() {
    // Only (3,3) is occupied: no probe fires, but the cell two ahead is
    // written, so the heading jumps onto it.
    let mut it = Interpreter::from_program("\n\n  *");
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.last_op(), Some(Op::Spark));
    assert_eq!(it.heading().position(), (3, 3));
    assert_eq!(it.step(), Outcome::Terminated);
}

#[test]
fn load_resets_grid_stack_and_heading() {
    let mut it = Interpreter::from_program(" *");
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.stack().len(), 1);

    it.load("\n *");
    assert!(it.stack().is_empty());
    assert_eq!(it.heading().position(), (1, 1));
    assert_eq!(it.heading().direction(), (1, 1));
    assert_eq!(it.steps(), 0);
    assert_eq!(it.last_op(), None);
    assert!(!it.grid().is_occupied(2, 1));
    assert!(it.grid().is_occupied(2, 2));
}

#[test]
fn trailing_blank_rows_do_not_extend_the_grid() {
    let it = Interpreter::from_program(" *  \n\n   ");
    assert_eq!(it.grid().cell_count(), 1);
    assert_eq!(it.grid().max_y(), Some(1));
}
