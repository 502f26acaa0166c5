use crossterm::event::{KeyCode, KeyEventKind};
use rand::Rng;

use crate::game::Game;

/// The only gameplay inputs; everything else is lifecycle or ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Drop,
    Rotate,
}

pub fn action_for(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Down => Some(Action::Drop),
        KeyCode::Up => Some(Action::Rotate),
        _ => None,
    }
}

/// Down is a one-row soft drop unless hard drop is switched on.
pub fn apply<R: Rng>(game: &mut Game<R>, action: Action) -> bool {
    match action {
        Action::MoveLeft => game.move_piece(-1, 0),
        Action::MoveRight => game.move_piece(1, 0),
        Action::Drop => {
            if game.options.hard_drop_enabled {
                game.hard_drop()
            } else {
                game.soft_drop()
            }
        }
        Action::Rotate => game.rotate_piece(),
    }
}

pub fn handle_input<R: Rng>(game: &mut Game<R>, key_code: KeyCode, kind: KeyEventKind) -> bool {
    // Release events show up on some platforms; only presses and repeats act
    if kind == KeyEventKind::Release {
        return false;
    }
    match action_for(key_code) {
        Some(action) => apply(game, action),
        None => false,
    }
}
