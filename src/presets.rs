//! Bundled demo programs
//!
//! Shipped inside the binary so the environment has something to show when
//! launched without a program file. The `p` key cycles through them.

/// A named, embedded Wierd program.
pub struct Preset {
    pub name: &'static str,
    /// One-line description for the status bar.
    pub blurb: &'static str,
    pub source: &'static str,
}

/// All bundled programs. The first is the default on startup.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "echo",
        blurb: "reads one character and echoes it back",
        source: include_str!("../demos/echo.w"),
    },
    Preset {
        name: "subtract",
        blurb: "pushes two ones and subtracts them",
        source: include_str!("../demos/subtract.w"),
    },
    Preset {
        name: "sparks",
        blurb: "glides across gaps until it runs off the edge",
        source: include_str!("../demos/sparks.w"),
    },
];
