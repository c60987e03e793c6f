//! Main TUI application state and logic

use crate::generator::Family;
use crate::step::Playback;
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Wall-clock cadence between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(800);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Steps,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Steps,
            FocusedPane::Steps => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Cursor over the materialized step history
    pub playback: Playback,

    /// The source script being visualized
    pub source_code: String,

    /// Selected data-structure family
    pub family: Family,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Source pane scroll offset
    pub source_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app over a finished step history
    pub fn new(playback: Playback, source_code: String, family: Family) -> Self {
        App {
            playback,
            source_code,
            family,
            focused_pane: FocusedPane::Steps,
            source_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.playback.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
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

        // Main area plus status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.source_scroll,
            self.focused_pane == FocusedPane::Source,
        );

        panes::render_structure_pane(frame, right_rows[0], self.playback.current(), self.family);

        panes::render_steps_pane(
            frame,
            right_rows[1],
            self.playback.as_slice(),
            self.playback.position(),
            self.focused_pane == FocusedPane::Steps,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            self.playback.position(),
            self.playback.len(),
            self.family,
            &self.status_message,
        );
    }

    /// Handle a key event
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                self.status_message = if self.is_playing {
                    self.last_play_time = Instant::now();
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }

            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                if self.playback.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "At the last step".to_string();
                }
            }

            KeyCode::Left | KeyCode::Char('p') => {
                self.is_playing = false;
                if self.playback.step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "At the first step".to_string();
                }
            }

            KeyCode::Char('r') | KeyCode::Home => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Rewound to start".to_string();
            }

            KeyCode::End => {
                self.is_playing = false;
                if self.playback.len() > 0 {
                    self.playback.jump_to(self.playback.len() - 1);
                }
                self.status_message = "Jumped to end".to_string();
            }

            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }

            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.source_scroll = self.source_scroll.saturating_sub(1);
                }
                FocusedPane::Steps => {
                    self.is_playing = false;
                    self.playback.step_backward();
                }
            },

            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    let max = self.source_code.lines().count().saturating_sub(1);
                    if self.source_scroll < max {
                        self.source_scroll += 1;
                    }
                }
                FocusedPane::Steps => {
                    self.is_playing = false;
                    self.playback.step_forward();
                }
            },

            _ => {}
        }
    }
}
