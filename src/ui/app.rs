//! Main TUI application state and logic

use crate::interpreter::engine::{Interpreter, Outcome};
use crate::presets::PRESETS;
use crate::snapshot::History;
use crate::ui::panes::PlayfieldScrollState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Memory budget for the reverse-stepping history.
const HISTORY_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Playfield,
    Stack,
    Input,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (playfield -> stack -> input -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Playfield => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Playfield,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Playfield => FocusedPane::Output,
            FocusedPane::Stack => FocusedPane::Playfield,
            FocusedPane::Input => FocusedPane::Stack,
            FocusedPane::Output => FocusedPane::Input,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance
    pub interpreter: Interpreter,

    /// Source text of the loaded program (for reset)
    pub program_source: String,

    /// Display name of the loaded program
    pub program_name: String,

    /// Index into PRESETS when a preset is loaded, None for a file
    pub preset_index: Option<usize>,

    /// Snapshot history for stepping backward
    pub history: History,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub playfield_scroll: PlayfieldScrollState,
    pub stack_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Whether keystrokes are being routed into the input queue
    pub input_mode: bool,
}

impl App {
    /// Create a new app around an interpreter with `source` already loaded.
    pub fn new(
        interpreter: Interpreter,
        source: String,
        name: String,
        preset_index: Option<usize>,
    ) -> Self {
        App {
            interpreter,
            program_source: source,
            program_name: name,
            preset_index,
            history: History::new(HISTORY_MEMORY_LIMIT),
            focused_pane: FocusedPane::Playfield,
            playfield_scroll: PlayfieldScrollState::default(),
            stack_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval: Duration::from_millis(100),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            input_mode: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode. A blocked step is retried every tick,
            // so play resumes by itself once input is queued.
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.step_forward();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Playfield on the left, state column on the right, status bar
        // at the bottom.
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(20),
                Constraint::Percentage(35),
            ])
            .split(columns[1]);

        super::panes::render_playfield_pane(
            frame,
            columns[0],
            self.interpreter.grid(),
            self.interpreter.heading(),
            self.focused_pane == FocusedPane::Playfield,
            &self.playfield_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            self.interpreter.stack(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_input_pane(
            frame,
            right_rows[1],
            self.interpreter.input(),
            self.input_mode,
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_output_pane(
            frame,
            right_rows[2],
            self.interpreter.output(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.interpreter.steps(),
            self.interpreter.last_op(),
            self.interpreter.last_outcome(),
            self.is_playing,
            self.input_mode,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Input-entry mode captures everything except Esc.
        if self.input_mode {
            match key.code {
                KeyCode::Esc => {
                    self.input_mode = false;
                    self.status_message = format!(
                        "{} character(s) queued",
                        self.interpreter.input().len()
                    );
                }
                KeyCode::Enter => self.interpreter.feed_input('\n'),
                KeyCode::Backspace => {
                    let _ = self.interpreter.retract_input();
                }
                KeyCode::Char(c) => self.interpreter.feed_input(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                for _ in 0..n {
                    self.step_forward();
                    if self.interpreter.last_outcome() != Outcome::Continue {
                        break;
                    }
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right | KeyCode::Char('s') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.play_interval = (self.play_interval / 2).max(Duration::from_millis(10));
                self.status_message = format!("Play interval {:?}", self.play_interval);
            }
            KeyCode::Char('-') => {
                self.play_interval = (self.play_interval * 2).min(Duration::from_secs(2));
                self.status_message = format!("Play interval {:?}", self.play_interval);
            }
            KeyCode::Char('i') => {
                self.input_mode = true;
                self.status_message = "Typing into the input queue".to_string();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            KeyCode::Char('p') => {
                self.next_preset();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Playfield => {
                    self.playfield_scroll.pan_y -= 1;
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Input => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Playfield => {
                    self.playfield_scroll.pan_y += 1;
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Input => {}
            },
            // Horizontal pan for the playfield
            KeyCode::Char('h') => {
                if self.focused_pane == FocusedPane::Playfield {
                    self.playfield_scroll.pan_x -= 2;
                }
            }
            KeyCode::Char('l') => {
                if self.focused_pane == FocusedPane::Playfield {
                    self.playfield_scroll.pan_x += 2;
                }
            }
            _ => {}
        }
    }

    /// Execute one instruction, recording a snapshot for step-backward.
    fn step_forward(&mut self) {
        let snapshot = self.interpreter.snapshot();
        match self.interpreter.step() {
            Outcome::Continue => {
                self.history.push(snapshot);
                self.playfield_scroll.reset();
                self.output_scroll = usize::MAX;
                self.status_message = match self.interpreter.last_op() {
                    Some(op) => format!("Executed {}", op.mnemonic()),
                    None => "Stepped".to_string(),
                };
            }
            Outcome::Blocked => {
                self.status_message = "Waiting for input (press i and type)".to_string();
            }
            Outcome::Terminated => {
                self.is_playing = false;
                self.status_message = "Program halted".to_string();
            }
        }
    }

    /// Restore the previous snapshot, if any.
    fn step_backward(&mut self) {
        match self.history.pop() {
            Some(snapshot) => {
                self.interpreter.restore(&snapshot);
                self.playfield_scroll.reset();
                self.output_scroll = usize::MAX;
                self.status_message = "Stepped backward".to_string();
            }
            None => {
                self.status_message = "At the beginning of history".to_string();
            }
        }
    }

    /// Reload the current program from scratch: fresh interpreter,
    /// fresh channels, empty history.
    fn reset(&mut self) {
        self.is_playing = false;
        self.input_mode = false;
        self.interpreter = Interpreter::from_program(&self.program_source);
        self.history.clear();
        self.playfield_scroll.reset();
        self.stack_scroll = 0;
        self.output_scroll = 0;
        self.status_message = format!("Reset {}", self.program_name);
    }

    /// Cycle to the next bundled preset.
    fn next_preset(&mut self) {
        let index = match self.preset_index {
            Some(i) => (i + 1) % PRESETS.len(),
            None => 0,
        };
        let preset = &PRESETS[index];
        self.preset_index = Some(index);
        self.program_source = preset.source.to_string();
        self.program_name = preset.name.to_string();
        self.reset();
        self.status_message = format!("Preset {}: {}", preset.name, preset.blurb);
    }
}
