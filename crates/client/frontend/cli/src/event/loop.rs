//! Event loop orchestrating user input and rendering.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::time::{self, Duration};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

pub struct EventLoop {
    input: InputHandler,
    app_state: AppState,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(app_state: AppState, cli_config: CliConfig) -> Self {
        Self {
            input: InputHandler::new(),
            app_state,
            cli_config,
        }
    }

    /// Runs until the user quits and hands back the final state.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<AppState> {
        self.render(terminal)?;

        let mut ticker = time::interval(self.cli_config.frame_interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(self.app_state)
    }

    /// Drains pending terminal events. Returns true when the user quits.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut redraw = false;

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match self.handle_key_press(key) {
                        Some(changed) => redraw |= changed,
                        None => return Ok(true),
                    }
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        if redraw {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Returns `None` on quit, otherwise whether a redraw is needed.
    fn handle_key_press(&mut self, key: KeyEvent) -> Option<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                None
            }
            KeyAction::Menu(input) => Some(self.app_state.apply(input)),
            KeyAction::None => Some(false),
        }
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.app_state, self.cli_config.origin)
    }
}
