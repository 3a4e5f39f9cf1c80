use serde::{Deserialize, Serialize};

/// Host-agnostic input delivered to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    PointerMoved { x: u32, y: u32 },
    PointerDown { x: u32, y: u32 },
    PointerUp { x: u32, y: u32 },
    Key(KeyPress),
}

impl ScreenEvent {
    pub fn key(key: Key) -> Self {
        ScreenEvent::Key(KeyPress { key, text: None })
    }

    /// A printable character as typed, after the keyboard layout and modifiers are applied.
    pub fn typed(c: char) -> Self {
        ScreenEvent::Key(KeyPress {
            key: Key::Character,
            text: Some(c),
        })
    }

    pub fn digit(d: char) -> Self {
        Self::typed(d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// A printable key; the character is in `KeyPress::text`.
    Character,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub text: Option<char>,
}

impl KeyPress {
    /// The typed ASCII digit, if any.
    pub fn digit(&self) -> Option<char> {
        self.text.filter(|c| c.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomCursor {
    Point,
    Arrow,
}

/// Top-level screens the host can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Play,
    PlayerTask,
}

/// Requests a screen posts back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    SetCursor(CustomCursor),
    SwitchScreen(GameState),
}
