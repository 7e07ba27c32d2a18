//! Main TUI application state and logic

use crate::playback::{DeadlineScheduler, PlaybackController};
use crate::trace::listing::CODE_LISTING;
use crate::ui::panes::{self, SourceScrollState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Narration,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Trace, cursor and autoplay timer
    pub controller: PlaybackController<DeadlineScheduler>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Pseudocode scroll, keeps the current line at a fixed row
    pub source_scroll: SourceScrollState,

    /// Narration scroll offset (usize::MAX follows the newest line)
    pub narration_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a controller that already holds a trace
    pub fn new(controller: PlaybackController<DeadlineScheduler>) -> Self {
        App {
            controller,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            narration_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.deliver_due_tick(Instant::now());

            // Wake up in time for the next tick
            let timeout = self
                .controller
                .scheduler()
                .time_until_due(Instant::now())
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Hand at most one due tick to the controller
    fn deliver_due_tick(&mut self, now: Instant) {
        let Some(token) = self.controller.scheduler_mut().take_due(now) else {
            return;
        };

        if self.controller.tick(token) {
            self.status_message = "Playing...".to_string();
            self.narration_scroll = usize::MAX;
        }
        if !self.controller.is_playing() {
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Array (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let step = self.controller.current_step();

        panes::render_array_pane(frame, left_rows[0], step);

        panes::render_narration_pane(
            frame,
            left_rows[1],
            self.controller.steps(),
            self.controller.cursor(),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        panes::render_source_pane(
            frame,
            columns[1],
            CODE_LISTING,
            step.code_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.controller.cursor(),
                total_steps: self.controller.steps().len(),
                interval_ms: self.controller.interval_ms(),
                state: self.controller.state(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| self.controller.step_forward())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.status_message = if self.controller.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: already at the first step".to_string()
                };
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.status_message = if self.controller.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Cannot step forward: already at the last step".to_string()
                };
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.controller.toggle_play() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.faster();
                self.status_message = format!("Interval {}ms", self.controller.interval_ms());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.controller.slower();
                self.status_message = format!("Interval {}ms", self.controller.interval_ms());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset(None);
                self.source_scroll = SourceScrollState::default();
                self.narration_scroll = usize::MAX;
                self.status_message = format!(
                    "New array: {} step(s)",
                    self.controller.steps().len()
                );
            }
            KeyCode::Enter => {
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.controller.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.narration_scroll = usize::MAX;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaybackConfig;

    fn app(values: &[i64]) -> App {
        let mut controller =
            PlaybackController::new(&PlaybackConfig::default(), DeadlineScheduler::new());
        controller.reset(Some(values.to_vec()));
        App::new(controller)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = app(&[2, 1]);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.cursor(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller.cursor(), 1);
    }

    #[test]
    fn test_enter_and_backspace_jump() {
        let mut app = app(&[3, 2, 1]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.cursor(), app.controller.last_index());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.cursor(), 0);
    }

    #[test]
    fn test_due_tick_advances_once() {
        let mut app = app(&[3, 2, 1]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.is_playing());

        let far_future = Instant::now() + Duration::from_secs(3600);
        app.deliver_due_tick(far_future);
        assert_eq!(app.controller.cursor(), 1);

        // one pending tick per call, never a catch-up burst
        app.deliver_due_tick(far_future);
        assert_eq!(app.controller.cursor(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = app(&[1]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
