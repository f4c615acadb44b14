//! Event mapping from terminal events to game actions.

use crate::types::{GameAction, TileVariant, PIXELS_PER_ROW};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to a game action.
///
/// Key releases and repeats are ignored so terminals that report them do not
/// fire actions twice.
pub fn handle_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(GameAction::Quit)
            } else {
                handle_key_event(*key)
            }
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Brush
        KeyCode::Char('1') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(GameAction::SetBrush(TileVariant::Field))
        }
        KeyCode::Char('2') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::SetBrush(TileVariant::Water))
        }
        KeyCode::Char('3') | KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(GameAction::SetBrush(TileVariant::Mountain))
        }
        KeyCode::Char('4') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(GameAction::SetBrush(TileVariant::Forest))
        }

        // New map
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        KeyCode::Esc => Some(GameAction::Quit),

        _ => None,
    }
}

/// Map mouse presses to selection (left) and painting (right).
///
/// Dragging with the right button keeps painting.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    let (x, y) = cell_to_pixel(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameAction::Select { x, y }),
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(GameAction::Paint { x, y })
        }
        _ => None,
    }
}

/// Top pixel of a terminal cell in window coordinates.
pub fn cell_to_pixel(column: u16, row: u16) -> (i32, i32) {
    (column as i32, row as i32 * PIXELS_PER_ROW as i32)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
