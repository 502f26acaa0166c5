use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::Duration,
};

use tstris_classic::cli::Args;
use tstris_classic::constants::INPUT_POLL_MS;
use tstris_classic::game::Game;
use tstris_classic::input::handle_input;
use tstris_classic::ui::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    let mut game = Game::new(args.options());

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run(&mut terminal, &mut game);

    // Cleanup runs even when the loop failed
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result
}

fn run(terminal: &mut Tui, game: &mut Game) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, game)).context("failed to draw frame")?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            return Ok(());
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            game.reset();
                        }
                    }
                    _ => {
                        handle_input(game, code, kind);
                    }
                }
            }
        }

        // Gravity timer; stops on its own once the game is over
        game.update();
    }
}
