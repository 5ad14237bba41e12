// wierdtty: a Wierd playfield interpreter with terminal visualization

mod interpreter;
mod machine;
mod presets;
mod snapshot;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use interpreter::engine::Interpreter;
use presets::PRESETS;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [file.w]", program_name);
    eprintln!();
    eprintln!("Runs the given Wierd program in a terminal visualizer.");
    eprintln!("Without an argument the bundled '{}' demo loads;", PRESETS[0].name);
    eprintln!("press p inside the UI to cycle through all demos:");
    for preset in PRESETS {
        eprintln!("  {:<10} {}", preset.name, preset.blurb);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("wierdtty");

    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_usage(program_name);
        return Ok(());
    }

    // A file argument wins; otherwise start on the first bundled preset.
    let (name, source, preset_index) = match args.get(1) {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            (path.clone(), fs::read_to_string(path)?, None)
        }
        None => {
            let preset = &PRESETS[0];
            (preset.name.to_string(), preset.source.to_string(), Some(0))
        }
    };

    let interpreter = Interpreter::from_program(&source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter, source, name, preset_index);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
