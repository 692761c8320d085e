use anyhow::{Context, Result};
use crossterm::{
    event::{
        Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::engine::KeyboardState;
use crate::game::{GameConfig, SnakeGame};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Framebuffer, Renderer};

/// Interactive play in the terminal
pub struct HumanMode {
    game: SnakeGame,
    canvas: Framebuffer,
    keyboard: KeyboardState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// Whether the terminal reports key releases. Without them, held keys
    /// are released after every frame.
    release_events: bool,
    game_over_recorded: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let game = SnakeGame::new(config);
        let canvas = Framebuffer::new(game.bounds());

        Self {
            game,
            canvas,
            keyboard: KeyboardState::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            release_events: false,
            game_over_recorded: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        self.release_events = supports_keyboard_enhancement().unwrap_or(false);
        if self.release_events {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
        } else {
            warn!("terminal does not report key releases, keys release after each frame");
        }

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.game.bounds().width,
            height = self.game.bounds().height,
            fps = self.game.config().fps,
            "starting human mode"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // one engine frame per tick; a late tick is delayed rather than doubled up
        let mut frame_timer = interval(self.game.frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = frame_timer.tick() => {
                    self.advance_frame();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.canvas, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games_played = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "leaving human mode"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Press(key) => self.keyboard.press(key),
                KeyAction::Release(key) => self.keyboard.release(key),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Run one engine frame against the canvas and record its outcome
    fn advance_frame(&mut self) {
        self.game.frame(&self.keyboard, &mut self.canvas);
        self.metrics.on_frame();

        if !self.release_events {
            self.keyboard.release_all();
        }

        if self.game.is_game_over() && !self.game_over_recorded {
            self.game_over_recorded = true;
            let score = self.game.score();
            let high_score = self.metrics.on_game_over(score);
            info!(score, high_score, time = %self.metrics.format_time(), "game over");
        }
    }

    fn reset_game(&mut self) {
        debug!(score = self.game.score(), "restarting");
        self.game.reset();
        self.keyboard.release_all();
        self.metrics.on_game_start();
        self.game_over_recorded = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        if self.release_events {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{InputSource, Key, Position, Surface};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(mode: &mut HumanMode, code: KeyCode) {
        mode.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default().with_seed(4));
        assert!(!mode.game.is_game_over());
        assert_eq!(mode.game.score(), 0);
        assert_eq!(mode.canvas.bounds(), mode.game.bounds());
    }

    #[test]
    fn test_keys_reach_keyboard_state() {
        let mut mode = HumanMode::new(GameConfig::default().with_seed(4));
        press(&mut mode, KeyCode::Down);
        assert!(mode.keyboard.is_key_pressed(Key::ArrowDown));

        press(&mut mode, KeyCode::Char('q'));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_keys_release_after_frame_without_release_events() {
        let mut mode = HumanMode::new(GameConfig::default().with_seed(4));
        press(&mut mode, KeyCode::Down);

        mode.advance_frame();
        assert!(!mode.keyboard.is_key_pressed(Key::ArrowDown));

        mode.release_events = true;
        press(&mut mode, KeyCode::Down);
        mode.advance_frame();
        assert!(mode.keyboard.is_key_pressed(Key::ArrowDown));
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut mode = HumanMode::new(GameConfig::default().with_seed(4));
        mode.release_events = true;
        press(&mut mode, KeyCode::Up);

        for _ in 0..120 {
            mode.advance_frame();
        }

        assert!(mode.game.is_game_over());
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::default().with_seed(4));
        mode.release_events = true;
        press(&mut mode, KeyCode::Up);
        for _ in 0..120 {
            mode.advance_frame();
        }
        assert!(mode.game.is_game_over());

        press(&mut mode, KeyCode::Char('r'));

        assert!(!mode.game.is_game_over());
        assert_eq!(mode.game.score(), 0);
        assert_eq!(mode.game.head_position(), Some(Position::new(0, 0)));
        assert!(!mode.keyboard.is_key_pressed(Key::ArrowUp));
        assert!(!mode.game_over_recorded);
    }
}
