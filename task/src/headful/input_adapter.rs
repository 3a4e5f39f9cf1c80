use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

use crate::events::{Key, ScreenEvent};

/// Maps a typed character. Control characters (backspace, enter, escape) arrive through
/// `map_key` instead.
pub fn map_char(c: char) -> Option<ScreenEvent> {
    (!c.is_control()).then(|| ScreenEvent::typed(c))
}

/// Maps a pressed non-printing key to a screen event. Printable keys come from `map_char`, so
/// that Shift+1 arrives as `!` rather than `1`.
pub fn map_key(code: VirtualKeyCode) -> Option<ScreenEvent> {
    use VirtualKeyCode as K;

    let key = match code {
        K::Back => Key::Backspace,
        K::Return | K::NumpadEnter => Key::Enter,
        K::Escape => Key::Escape,
        K::Tab => Key::Tab,
        K::Up => Key::Up,
        K::Down => Key::Down,
        K::Left => Key::Left,
        K::Right => Key::Right,
        _ => return None,
    };
    Some(ScreenEvent::key(key))
}

pub fn map_mouse_button(
    state: ElementState,
    button: MouseButton,
    pos: (u32, u32),
) -> Option<ScreenEvent> {
    if button != MouseButton::Left {
        return None;
    }
    let (x, y) = pos;
    Some(match state {
        ElementState::Pressed => ScreenEvent::PointerDown { x, y },
        ElementState::Released => ScreenEvent::PointerUp { x, y },
    })
}

/// Tracks the cursor so button presses (which carry no position in winit) can be placed.
#[derive(Debug, Default)]
pub struct InputAdapter {
    cursor: (u32, u32),
}

impl InputAdapter {
    pub fn cursor(&self) -> (u32, u32) {
        self.cursor
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> ScreenEvent {
        self.cursor = (x.max(0.0) as u32, y.max(0.0) as u32);
        ScreenEvent::PointerMoved {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    pub fn translate(&mut self, event: &WindowEvent<'_>) -> Option<ScreenEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                map_mouse_button(*state, *button, self.cursor)
            }
            WindowEvent::ReceivedCharacter(c) => map_char(*c),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(code),
                        ..
                    },
                ..
            } => map_key(*code),
            _ => None,
        }
    }
}
