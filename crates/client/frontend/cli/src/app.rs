//! Glue code tying the engine, level catalog, and terminal UI together.
use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use game_core::{
    Env, FixedLevel, GameSession, LevelChooser, LevelOracle, PcgRng, TurnError, TurnReport,
};

use crate::canvas::Canvas;
use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::message::MessageLog;
use crate::presentation::{
    terminal::{self, Tui},
    ui::{self, RenderContext},
};
use crate::start_screen::LevelSelect;

pub struct CliApp<L> {
    config: CliConfig,
    levels: L,
}

impl<L: LevelOracle> CliApp<L> {
    pub fn new(config: CliConfig, levels: L) -> Self {
        Self { config, levels }
    }

    /// Takes over the terminal until the player quits.
    pub fn run(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = self.execute(&mut terminal);

        terminal::restore()?;
        tracing::info!("CLI client exiting");
        result
    }

    fn execute(self, terminal: &mut Tui) -> Result<()> {
        let CliApp { config, levels } = self;
        let rng = PcgRng;
        let input = InputHandler::new();
        let mut canvas = Canvas::new();
        let mut messages = MessageLog::new(config.ui.message_capacity);

        let first_level = match &config.level {
            Some(level) => level.clone(),
            None => match LevelSelect::new(terminal).prompt(&levels)? {
                Some(level) => level,
                None => {
                    tracing::info!("no level chosen");
                    return Ok(());
                }
            },
        };

        let mut session = {
            let mut chooser = Chooser::new(config.level.as_deref(), terminal, &first_level);
            let mut env = Env::new(&levels, &mut chooser, &mut canvas, &rng);
            GameSession::start(config.game.clone(), &first_level, &mut env)
                .with_context(|| format!("starting level `{first_level}`"))?
        };
        messages.push_text(format!(
            "Welcome to `{}`. Goal: {}.",
            session.level_name(),
            session.grid().win_condition()
        ));

        loop {
            ui::render(
                terminal,
                &RenderContext {
                    session: &session,
                    canvas: &canvas,
                    messages: &messages,
                    message_panel_height: config.ui.message_panel_height,
                },
            )?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            let action = input.handle_key(key);
            if action == KeyAction::Quit {
                tracing::info!(turn = session.turn(), "player quit");
                break;
            }

            let result = {
                let mut chooser =
                    Chooser::new(config.level.as_deref(), terminal, session.level_name());
                let mut env = Env::new(&levels, &mut chooser, &mut canvas, &rng);
                dispatch(&mut session, action, &mut env)
            };

            match result {
                Some(Ok(report)) => messages.record_turn(session.turn(), &report),
                Some(Err(err)) => {
                    tracing::error!(%err, "turn failed");
                    messages.record_error(&err);
                }
                None => {}
            }
        }

        Ok(())
    }
}

fn dispatch(
    session: &mut GameSession,
    action: KeyAction,
    env: &mut Env<'_>,
) -> Option<Result<TurnReport, TurnError>> {
    match action {
        KeyAction::Move(direction) => Some(session.resolve_turn(direction, env)),
        KeyAction::Restart => Some(session.restart(env)),
        KeyAction::Quit | KeyAction::None => None,
    }
}

/// A configured level bypasses the prompt on every reset.
enum Chooser<'t> {
    Fixed(FixedLevel),
    Prompt(LevelSelect<'t>),
}

impl<'t> Chooser<'t> {
    fn new(bypass: Option<&str>, terminal: &'t mut Tui, current: &str) -> Self {
        match bypass {
            Some(level) => Self::Fixed(FixedLevel::new(level)),
            None => Self::Prompt(LevelSelect::new(terminal).preselect(current)),
        }
    }
}

impl LevelChooser for Chooser<'_> {
    fn choose_level(&mut self, levels: &dyn LevelOracle) -> Option<String> {
        match self {
            Self::Fixed(fixed) => fixed.choose_level(levels),
            Self::Prompt(prompt) => prompt.choose_level(levels),
        }
    }
}
