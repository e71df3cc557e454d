//! Key mapping from terminal events to player commands.

use crate::types::{GameAction, TileId};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    /// Flip the tile (or open the topic) under the cursor.
    Select,
    NewGame,
    ChangeTopic,
}

impl InputCommand {
    /// The game action this command triggers with the cursor on `tile`.
    ///
    /// Cursor movement is not a game action.
    pub fn game_action(self, tile: TileId) -> Option<GameAction> {
        match self {
            InputCommand::Move(_) => None,
            InputCommand::Select => Some(GameAction::Select(tile)),
            InputCommand::NewGame => Some(GameAction::NewGame),
            InputCommand::ChangeTopic => Some(GameAction::ChangeTopic),
        }
    }
}

/// Map keyboard input to commands. Release events map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::Move(Direction::Down))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::Move(Direction::Up))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputCommand::Select),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputCommand::NewGame),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputCommand::ChangeTopic),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
