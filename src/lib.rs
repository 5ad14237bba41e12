//! # Introduction
//!
//! wierdtty executes programs in Wierd, an esoteric language whose source
//! is a two-dimensional playfield and whose instructions are decoded not
//! from symbols but from the *shape* of the code: each step probes which
//! cells neighbor the instruction pointer, in a fixed angular priority
//! order, and the first occupied probe picks the operation. A terminal UI
//! built with [ratatui](https://docs.rs/ratatui) shows the playfield,
//! stack, and channels while the program runs.
//!
//! ## Execution pipeline
//!
//! ```text
//! Program text → Grid ⇄ Interpreter::step ⇄ Stack/Channels → TUI
//! ```
//!
//! 1. [`machine`] — the state model: sparse [`machine::grid::Grid`],
//!    eight-direction [`machine::heading::Heading`], and integer
//!    [`machine::stack::Stack`].
//! 2. [`interpreter`] — probe-based instruction dispatch plus the
//!    input/output channel boundary.
//! 3. [`snapshot`] — full-state snapshots with a bounded history, enabling
//!    backward stepping in the UI.
//! 4. [`presets`] — bundled demo programs.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Language summary
//!
//! Probes in priority order: 0° nop, 45° push 1, 315° subtract, 90°/270°
//! conditional turn, 135° get/put, 225° input/output. No probe firing
//! sparks two cells ahead, or terminates at the edge of written content.

pub mod interpreter;
pub mod machine;
pub mod presets;
pub mod snapshot;
pub mod ui;
