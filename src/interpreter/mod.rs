//! Wierd execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the probe-dispatch interpreter
//! - [`channels`]: the input/output channel boundary
//!
//! # Execution Model
//!
//! The instruction at the cursor is not the character under it. Each step
//! probes the eight-cell neighborhood of the heading in a fixed priority
//! order (0, 45, 315, 90, 270, 135, 225 degrees counterclockwise); the
//! first occupied probe selects the instruction and, for most of them,
//! commits the probed position and direction as the new heading. When no
//! probe fires, the spark fallback jumps two cells ahead or terminates.
//!
//! Every "error" condition is a defined language behavior: empty pops,
//! blank reads, running off the edge, and missing input all map to normal
//! outcomes rather than failures.

pub mod channels;
pub mod engine;
