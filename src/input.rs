use ggez::input::keyboard::KeyCode;

use crate::grid::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

pub fn key_action(keycode: Option<KeyCode>) -> KeyAction {
    let Some(keycode) = keycode else {
        return KeyAction::None;
    };

    match keycode {
        KeyCode::Up | KeyCode::W => KeyAction::Steer(Direction::Up),
        KeyCode::Down | KeyCode::S => KeyAction::Steer(Direction::Down),
        KeyCode::Left | KeyCode::A => KeyAction::Steer(Direction::Left),
        KeyCode::Right | KeyCode::D => KeyAction::Steer(Direction::Right),
        KeyCode::Escape => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
