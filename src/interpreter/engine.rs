#![allow(dead_code)] // Complete API module, not all methods currently used
// Execution engine for the Wierd interpreter

use crate::interpreter::channels::{InputQueue, OutputLog};
use crate::machine::grid::{Grid, BLANK};
use crate::machine::heading::Heading;
use crate::machine::stack::Stack;
use crate::snapshot::Snapshot;

/// Where loaded program text lands in the playfield, and where the heading
/// starts. Row 0, column 0 of the text is cell (1, 1).
pub const ORIGIN: (i64, i64) = (1, 1);

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An instruction executed; call `step` again.
    Continue,
    /// The program wants one input character and none is pending. Nothing
    /// was mutated; feed input and call `step` again.
    Blocked,
    /// The program ran off the edge of written content.
    Terminated,
}

/// Which instruction the probe sequence selected, reported for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Nop,
    PushOne,
    Subtract,
    Branch,
    Get,
    Put,
    Input,
    Output,
    Spark,
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Nop => "NOP",
            Op::PushOne => "PUSH1",
            Op::Subtract => "SUBT",
            Op::Branch => "COND",
            Op::Get => "GET",
            Op::Put => "PUT",
            Op::Input => "IN",
            Op::Output => "OUT",
            Op::Spark => "SPRK",
        }
    }
}

/// The character a popped code writes: codes outside the valid range write
/// the blank sentinel.
fn char_for_code(code: i64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(BLANK)
}

/// The Wierd machine: playfield, heading, stack, and the two channels.
///
/// There is no instruction pointer beyond the heading. Each call to
/// [`Interpreter::step`] probes the heading's neighborhood to decode one
/// instruction, executes it, and reports an [`Outcome`]. The caller drives
/// the loop and polls state between steps; nothing here blocks or spawns.
pub struct Interpreter {
    grid: Grid,
    heading: Heading,
    stack: Stack,
    input: InputQueue,
    output: OutputLog,
    last_op: Option<Op>,
    last_outcome: Outcome,
    steps: u64,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            grid: Grid::new(),
            heading: Heading::new(ORIGIN.0, ORIGIN.1, 1, 1),
            stack: Stack::new(),
            input: InputQueue::new(),
            output: OutputLog::new(),
            last_op: None,
            last_outcome: Outcome::Continue,
            steps: 0,
        }
    }

    /// Create an interpreter with `text` already loaded.
    pub fn from_program(text: &str) -> Self {
        let mut interpreter = Interpreter::new();
        interpreter.load(text);
        interpreter
    }

    /// Load program text: clears the playfield and stack, writes the text
    /// at [`ORIGIN`], and resets the heading to the origin facing the
    /// down-right diagonal. Doubles as the reset operation. Channels are
    /// left alone; their lifecycle belongs to the caller.
    pub fn load(&mut self, text: &str) {
        self.grid.clear();
        self.stack.clear();
        self.grid.load(ORIGIN.0, ORIGIN.1, text);
        self.heading = Heading::new(ORIGIN.0, ORIGIN.1, 1, 1);
        self.last_op = None;
        self.last_outcome = Outcome::Continue;
        self.steps = 0;
    }

    /// Probe the cell one step away at `degrees` counterclockwise from the
    /// heading. Works on a copy, so the committed heading is untouched;
    /// returns the moved copy when the probed cell is occupied.
    fn probe(&self, degrees: u16) -> Option<Heading> {
        let mut lookahead = self.heading;
        lookahead.rotate_degrees(degrees);
        lookahead.advance();
        self.grid
            .is_occupied(lookahead.x(), lookahead.y())
            .then_some(lookahead)
    }

    /// Decode and execute exactly one instruction.
    ///
    /// The probes run in fixed priority order: 0, 45, 315, 90, 270, 135,
    /// 225. The first occupied probe selects the instruction; if none
    /// fires, the spark fallback looks two cells ahead along the current
    /// direction and terminates when that cell is blank too.
    pub fn step(&mut self) -> Outcome {
        let outcome = self.dispatch();
        self.last_outcome = outcome;
        if outcome == Outcome::Continue {
            self.steps += 1;
        }
        outcome
    }

    fn dispatch(&mut self) -> Outcome {
        if let Some(ahead) = self.probe(0) {
            self.heading = ahead;
            self.last_op = Some(Op::Nop);
        } else if let Some(ahead) = self.probe(45) {
            self.heading = ahead;
            self.stack.push(1);
            self.last_op = Some(Op::PushOne);
        } else if let Some(ahead) = self.probe(315) {
            // With fewer than two elements the subtraction silently skips,
            // but the probe still moves the heading. Programs rely on this
            // quirk to coast through subtract corners with a shallow stack.
            self.heading = ahead;
            if self.stack.len() >= 2 {
                let a = self.stack.pop().unwrap_or(0);
                let b = self.stack.pop().unwrap_or(0);
                self.stack.push(b - a);
            }
            self.last_op = Some(Op::Subtract);
        } else if self.probe(90).is_some() {
            let a = self.stack.pop().unwrap_or(0);
            self.heading.rotate_degrees(if a == 0 { 90 } else { 180 });
            self.heading.advance();
            self.last_op = Some(Op::Branch);
        } else if self.probe(270).is_some() {
            let a = self.stack.pop().unwrap_or(0);
            self.heading.rotate_degrees(if a == 0 { 270 } else { 180 });
            self.heading.advance();
            self.last_op = Some(Op::Branch);
        } else if let Some(ahead) = self.probe(135) {
            self.heading = ahead;
            let a = self.stack.pop().unwrap_or(0);
            let y = self.stack.pop().unwrap_or(0);
            let x = self.stack.pop().unwrap_or(0);
            if a != 0 {
                self.stack.push(self.grid.get(x, y) as i64);
                self.last_op = Some(Op::Get);
            } else {
                let value = self.stack.pop().unwrap_or(0);
                self.grid.put(x, y, char_for_code(value));
                self.last_op = Some(Op::Put);
            }
        } else if let Some(ahead) = self.probe(225) {
            if self.stack.peek().unwrap_or(0) == 0 {
                // Input wanted. Block before touching anything so the
                // caller can retry the identical step once input arrives.
                let Some(ch) = self.input.pop() else {
                    return Outcome::Blocked;
                };
                self.heading = ahead;
                self.stack.pop();
                self.stack.push(ch as i64);
                self.last_op = Some(Op::Input);
            } else {
                self.heading = ahead;
                self.stack.pop();
                let value = self.stack.pop().unwrap_or(0);
                self.output.push(char_for_code(value));
                self.last_op = Some(Op::Output);
            }
        } else {
            // No probe fired: spark across the gap, or run off the edge.
            let mut lookahead = self.heading;
            lookahead.advance();
            lookahead.advance();
            if self.grid.is_occupied(lookahead.x(), lookahead.y()) {
                self.heading = lookahead;
                self.last_op = Some(Op::Spark);
            } else {
                return Outcome::Terminated;
            }
        }
        Outcome::Continue
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    /// Queue one input character for the IN instruction.
    pub fn feed_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Queue a whole string of input.
    pub fn feed_str(&mut self, text: &str) {
        self.input.feed_str(text);
    }

    /// Remove the most recently queued input character.
    pub fn retract_input(&mut self) -> Option<char> {
        self.input.pop_last()
    }

    /// Number of instructions executed since the last load.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_op(&self) -> Option<Op> {
        self.last_op
    }

    pub fn last_outcome(&self) -> Outcome {
        self.last_outcome
    }

    /// Capture the full machine state for reverse stepping.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            heading: self.heading,
            stack: self.stack.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            last_op: self.last_op,
            last_outcome: self.last_outcome,
            steps: self.steps,
        }
    }

    /// Restore a previously captured state exactly.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.grid = snapshot.grid.clone();
        self.heading = snapshot.heading;
        self.stack = snapshot.stack.clone();
        self.input = snapshot.input.clone();
        self.output = snapshot.output.clone();
        self.last_op = snapshot.last_op;
        self.last_outcome = snapshot.last_outcome;
        self.steps = snapshot.steps;
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
