// dsviz: step-by-step data structure visualizer for the terminal

mod generator;
mod parser;
mod step;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use generator::Family;
use parser::parser::Parser;
use step::Playback;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("dsviz");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <script> [family]", program_name);
        eprintln!();
        eprintln!("Families: array (default), stack, queue, sorting, searching, linked-list");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} demos/sorting.dsa sorting", program_name);
        eprintln!("  {} demos/linked_list.dsa linked-list", program_name);
        std::process::exit(1);
    }

    let script_file = &args[1];

    if !Path::new(script_file).exists() {
        eprintln!("Error: File '{}' not found", script_file);
        eprintln!(
            "Usage: {} <script> [family]",
            args.first().map(|s| s.as_str()).unwrap_or("dsviz")
        );
        std::process::exit(1);
    }

    let family = match args.get(2) {
        Some(name) => match Family::from_name(name) {
            Some(family) => family,
            None => {
                eprintln!("Error: Unknown family '{}'", name);
                eprintln!(
                    "Families: array, stack, queue, sorting, searching, linked-list"
                );
                std::process::exit(1);
            }
        },
        None => Family::Array,
    };

    // Read source script
    let source = fs::read_to_string(script_file)?;

    // Parse the script
    eprintln!("Parsing {}...", script_file);
    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            std::process::exit(1);
        }
    };

    let operations = match parser.parse_operations() {
        Ok(operations) => operations,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} operations.",
        operations.len()
    );

    // Replay operations into the step history
    let steps = generator::generate_steps(family, &operations);
    eprintln!("Generated {} steps.", steps.len());

    let playback = Playback::new(steps);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback, source, family);
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
