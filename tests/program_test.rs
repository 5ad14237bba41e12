// End-to-end tests running the bundled demo programs to termination

use wierdtty::interpreter::engine::{Interpreter, Op, Outcome};

const ECHO: &str = include_str!("../demos/echo.w");
const SUBTRACT: &str = include_str!("../demos/subtract.w");
const SPARKS: &str = include_str!("../demos/sparks.w");

/// Step until the program halts, panicking if it blocks or runs away.
fn run_to_termination(it: &mut Interpreter) {
    for _ in 0..10_000 {
        match it.step() {
            Outcome::Continue => {}
            Outcome::Terminated => return,
            Outcome::Blocked => panic!("program blocked unexpectedly"),
        }
    }
    panic!("program did not terminate");
}

#[test]
fn subtract_demo_leaves_a_zero() {
    // Two pushed ones cancel: nop, nop, push, push, subtract, halt.
    let mut it = Interpreter::from_program(SUBTRACT);
    run_to_termination(&mut it);
    assert_eq!(it.stack().values(), &[0]);
    assert_eq!(it.steps(), 5);
    assert!(it.output().is_empty());
}

#[test]
fn sparks_demo_glides_to_the_edge() {
    let mut it = Interpreter::from_program(SPARKS);
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.last_op(), Some(Op::Spark));
    assert_eq!(it.heading().position(), (3, 3));
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.heading().position(), (5, 5));
    assert_eq!(it.step(), Outcome::Continue);
    assert_eq!(it.heading().position(), (7, 7));
    assert_eq!(it.step(), Outcome::Terminated);
    assert!(it.stack().is_empty());
    assert_eq!(it.steps(), 3);
}

#[test]
fn echo_blocks_cleanly_until_input_arrives() {
    let mut it = Interpreter::from_program(ECHO);

    // Twelve instructions bring the heading to the input corner.
    for _ in 0..12 {
        assert_eq!(it.step(), Outcome::Continue);
    }
    assert_eq!(it.steps(), 12);

    let position_before = it.heading().position();
    let direction_before = it.heading().direction();
    assert_eq!(it.step(), Outcome::Blocked);
    assert_eq!(it.last_outcome(), Outcome::Blocked);

    // Blocking mutated nothing: same heading, empty stack, no output,
    // and the step counter stands still.
    assert_eq!(it.heading().position(), position_before);
    assert_eq!(it.heading().direction(), direction_before);
    assert!(it.stack().is_empty());
    assert!(it.output().is_empty());
    assert_eq!(it.steps(), 12);

    // Still blocked on a retry.
    assert_eq!(it.step(), Outcome::Blocked);
}

#[test]
fn echo_golden_output() {
    let mut it = Interpreter::from_program(ECHO);
    it.feed_input('A');
    run_to_termination(&mut it);

    assert_eq!(it.output().as_str(), "A");
    // Documented end state: the scenic route home leaves a blank code
    // from a GET of the empty origin plus two stray ones.
    assert_eq!(it.stack().values(), &[32, 1, 1]);
    assert_eq!(it.steps(), 38);
    assert!(!it.input().has_pending());
}

#[test]
fn echo_consumes_exactly_one_character() {
    let mut it = Interpreter::from_program(ECHO);
    it.feed_str("AB");
    run_to_termination(&mut it);
    assert_eq!(it.output().as_str(), "A");
    assert_eq!(it.input().len(), 1);
    assert_eq!(it.input().chars().next(), Some('B'));
}

#[test]
fn echo_echoes_whatever_it_is_fed() {
    for ch in ['!', 'z', '7'] {
        let mut it = Interpreter::from_program(ECHO);
        it.feed_input(ch);
        run_to_termination(&mut it);
        assert_eq!(it.output().as_str(), ch.to_string());
    }
}
