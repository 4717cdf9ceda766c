use crate::animations::Confetti;
use crate::board::Board;
use crate::layout::Layout;
use crate::theme::{Theme, ThemeName};
use bubble_core::{PuzzleConfig, PuzzleError, PuzzleState, RandomShuffler, SystemClock};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use tracing::info;

/// Result of handling an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Startup options, usually from the command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub config: PuzzleConfig,
    pub seed: Option<u64>,
    pub theme: ThemeName,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: PuzzleConfig::default(),
            seed: None,
            theme: ThemeName::Dark,
        }
    }
}

/// The main application state
pub struct App {
    /// Current puzzle
    pub puzzle: PuzzleState,
    /// What is drawn for it
    pub board: Board,
    /// Box under the keyboard cursor
    pub cursor: usize,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer (ticks)
    message_timer: u32,
    /// Falling confetti after a solve
    pub confetti: Confetti,
    /// Terminal size, kept current by resize events
    pub term_size: (u16, u16),
    config: PuzzleConfig,
    shuffler: RandomShuffler,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self, PuzzleError> {
        let mut shuffler = match options.seed {
            Some(seed) => RandomShuffler::with_seed(seed),
            None => RandomShuffler::new(),
        };
        let puzzle = PuzzleState::new(options.config, &mut shuffler, SystemClock::new())?;
        Ok(Self::with_puzzle(puzzle, options, shuffler))
    }

    /// Start from a known row instead of a shuffled one
    pub fn from_arrangement(arrangement: Vec<u32>, options: AppOptions) -> Result<Self, PuzzleError> {
        let puzzle = PuzzleState::from_arrangement(arrangement, options.config, SystemClock::new())?;
        let shuffler = match options.seed {
            Some(seed) => RandomShuffler::with_seed(seed),
            None => RandomShuffler::new(),
        };
        Ok(Self::with_puzzle(puzzle, options, shuffler))
    }

    fn with_puzzle(puzzle: PuzzleState, options: AppOptions, shuffler: RandomShuffler) -> Self {
        let mut app = Self {
            board: Board::new(puzzle.arrangement()),
            puzzle,
            cursor: 0,
            theme: Theme::from_name(options.theme),
            message: None,
            message_timer: 0,
            confetti: Confetti::new(),
            term_size: (80, 24),
            config: options.config,
            shuffler,
        };
        app.on_new_puzzle();
        app
    }

    fn on_new_puzzle(&mut self) {
        if self.puzzle.is_solved() {
            self.board.mark_solved();
            self.show_message("Already sorted! Press n for a new row.");
        }
    }

    /// Replace the puzzle with a freshly shuffled one
    pub fn new_game(&mut self) {
        match PuzzleState::new(self.config, &mut self.shuffler, SystemClock::new()) {
            Ok(puzzle) => {
                info!(arrangement = ?puzzle.arrangement(), "starting new game");
                self.board = Board::new(puzzle.arrangement());
                self.puzzle = puzzle;
                self.cursor = self.cursor.min(self.puzzle.len().saturating_sub(1));
                self.confetti.stop();
                self.message = None;
                self.message_timer = 0;
                self.on_new_puzzle();
            }
            Err(e) => self.show_message(&e.to_string()),
        }
    }

    /// Faster ticks while something is moving
    pub fn get_tick_rate(&self) -> Duration {
        if self.board.is_animating() || self.confetti.is_active() || self.puzzle.solve_pending() {
            Duration::from_millis(33)
        } else {
            Duration::from_millis(100)
        }
    }

    /// Update animations, timers and the pending solve (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        self.board.tick();
        self.puzzle.poll(&mut self.board);
        if self.board.take_just_solved() {
            let (w, h) = self.term_size;
            self.confetti.start(w, h);
        }
        self.confetti.update();
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30;
    }

    /// Select the box at `position`
    pub fn select(&mut self, position: usize) {
        self.puzzle.select_position(position, &mut self.board);
    }

    fn show_hint(&mut self) {
        match self.puzzle.next_step() {
            Some(step) => {
                let msg = format!("Next swap: boxes {} and {}", step.left() + 1, step.right() + 1);
                self.show_message(&msg);
            }
            None => self.show_message("Nothing left to swap."),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.puzzle.len();
        if len == 0 {
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.puzzle.len().saturating_sub(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.select(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let position = c as usize - '1' as usize;
                if position < self.puzzle.len() {
                    self.cursor = position;
                }
                self.select(position);
            }
            KeyCode::Char('?') => self.show_hint(),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('t') => {
                self.theme = Theme::from_name(self.theme.name.next());
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Handle a mouse event; left clicks on a box select it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(position) = self.layout().hit_test(mouse.column, mouse.row) {
            self.cursor = position;
            self.select(position);
        }
    }

    /// Screen layout for the current terminal size, scrolled to the cursor
    pub fn layout(&self) -> Layout {
        let (w, h) = self.term_size;
        Layout::compute(w, h, self.puzzle.len(), self.cursor)
    }

    /// Record a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.term_size = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_core::Phase;
    use crossterm::event::KeyEventState;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app(arrangement: &[u32]) -> App {
        let options = AppOptions {
            config: PuzzleConfig::default().solve_delay(Duration::ZERO),
            ..AppOptions::default()
        };
        App::from_arrangement(arrangement.to_vec(), options).unwrap()
    }

    #[test]
    fn test_digit_keys_swap() {
        let mut app = app(&[2, 1, 3]);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.puzzle.phase(), Phase::AwaitingSecond);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.puzzle.arrangement(), &[1, 2, 3]);
        assert_eq!(app.board.boxes()[0].value, 1);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_cursor_and_space() {
        let mut app = app(&[1, 3, 2]);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char('l')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.puzzle.arrangement(), &[1, 2, 3]);

        // Clamped at both ends
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor, 2);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('h')));
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_mouse_click_selects_box() {
        let mut app = app(&[2, 1, 3]);
        app.resize(80, 24);
        let layout = Layout::compute(80, 24, 3, 0);
        let y = layout.boxes_y + 1;
        app.handle_mouse(click(layout.slot_x(0.0) + 1, y));
        app.handle_mouse(click(layout.slot_x(1.0) + 1, y));
        assert_eq!(app.puzzle.arrangement(), &[1, 2, 3]);

        // Right clicks and misses do nothing
        let before = app.puzzle.swaps_made();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(layout.slot_x(0.0), y)
        });
        app.handle_mouse(click(0, 0));
        assert_eq!(app.puzzle.swaps_made(), before);
    }

    #[test]
    fn test_long_row_follows_cursor() {
        let reversed: Vec<u32> = (1..=40).rev().collect();
        let mut app = app(&reversed);
        app.resize(80, 24);
        assert_eq!(app.layout().visible_slots(), 0..19);

        app.handle_key(key(KeyCode::End));
        assert_eq!(app.cursor, 39);
        let layout = app.layout();
        assert_eq!(layout.visible_slots(), 21..40);

        // Clicks land on the boxes actually drawn
        let y = layout.boxes_y + 1;
        app.handle_mouse(click(layout.slot_x(38.0) + 1, y));
        assert_eq!(app.puzzle.selection(), Some(38));
        assert_eq!(app.cursor, 38);
    }

    #[test]
    fn test_solve_starts_celebration() {
        let mut app = app(&[2, 1]);
        app.select(0);
        app.select(1);
        assert!(app.puzzle.is_solved());
        assert!(!app.confetti.is_active());

        app.tick();
        assert!(app.puzzle.solved_notified());
        assert!(app.board.is_solved());
        assert!(app.confetti.is_active());
    }

    #[test]
    fn test_hint_message() {
        let mut app = app(&[3, 1, 2]);
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.message.as_deref(), Some("Next swap: boxes 1 and 2"));
    }

    #[test]
    fn test_sorted_start_is_marked() {
        let app = app(&[1, 2, 3]);
        assert!(app.board.is_solved());
        assert!(app.message.is_some());
    }

    #[test]
    fn test_new_game_and_quit() {
        let options = AppOptions {
            config: PuzzleConfig::with_size(6),
            seed: Some(3),
            theme: ThemeName::Light,
        };
        let mut app = App::new(options).unwrap();
        assert_eq!(app.puzzle.len(), 6);
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.puzzle.len(), 6);
        assert_eq!(app.board.len(), 6);

        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme.name, ThemeName::HighContrast);

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(app.handle_key(ctrl_c), AppAction::Quit);
    }
}
