use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use game_core::{Config, Frame, Presenter, SimError};

const COLS: usize = 60;
const ROWS: usize = 20;

/// ASCII view of the arena, redrawn in place every tick.
///
/// Pressing Enter requests a stop. The cursor is restored on drop.
pub struct TerminalPresenter {
    config: Config,
    stop: Arc<AtomicBool>,
    out: io::Stdout,
}

impl TerminalPresenter {
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let out = io::stdout();
        if !out.is_terminal() {
            return Err(SimError::PresentationUnavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        std::thread::Builder::new()
            .name("stop-listener".to_string())
            .spawn(move || {
                if enter_pressed(io::stdin().lock()) {
                    flag.store(true, Ordering::Relaxed);
                }
            })
            .map_err(|e| SimError::PresentationUnavailable(e.to_string()))?;

        // Clear screen, hide cursor
        write!(out.lock(), "\x1b[2J\x1b[?25l")
            .map_err(|e| SimError::PresentationUnavailable(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            stop,
            out,
        })
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, frame: &Frame) -> Result<(), SimError> {
        let screen = render(&self.config, frame);
        let mut out = self.out.lock();
        out.write_all(screen.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| SimError::PresentationUnavailable(e.to_string()))
    }

    fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = write!(self.out.lock(), "\x1b[?25h");
        let _ = self.out.flush();
    }
}

/// Blocks for one line of input. Closed or unreadable input is not a stop.
fn enter_pressed(mut input: impl BufRead) -> bool {
    let mut line = String::new();
    matches!(input.read_line(&mut line), Ok(n) if n > 0)
}

fn cell(config: &Config, x: f32, y: f32) -> (usize, usize) {
    let col = (x / config.arena_width * COLS as f32).floor();
    let row = (y / config.arena_height * ROWS as f32).floor();
    (
        col.clamp(0.0, (COLS - 1) as f32) as usize,
        row.clamp(0.0, (ROWS - 1) as f32) as usize,
    )
}

/// Full screen for one frame, starting with a cursor-home escape
fn render(config: &Config, frame: &Frame) -> String {
    let mut grid = vec![[' '; COLS]; ROWS];

    for (agent, y) in [(0u8, frame.paddle_left_y), (1u8, frame.paddle_right_y)] {
        let x = config.paddle_x(agent);
        let (col, top) = cell(config, x, y);
        let (_, bottom) = cell(config, x, y + config.paddle_height - 1.0);
        for row in grid.iter_mut().take(bottom + 1).skip(top) {
            row[col] = '|';
        }
    }

    let (col, row) = cell(config, frame.ball_x, frame.ball_y);
    grid[row][col] = 'o';

    let border = "-".repeat(COLS + 2);
    let mut screen = format!(
        "\x1b[HAgent 1: {:<6} Agent 2: {:<6} tick {}\n{border}\n",
        frame.score_left, frame.score_right, frame.tick
    );
    for row in &grid {
        screen.push('|');
        screen.extend(row.iter());
        screen.push_str("|\n");
    }
    screen.push_str(&border);
    screen.push_str("\nPress Enter to stop\n");
    screen
}
