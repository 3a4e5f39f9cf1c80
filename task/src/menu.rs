//! Shared menu behaviour: a title, a row of buttons, pointer hover and keyboard focus.
//!
//! Screens own a `MenuBase` and call `handle_event` before their own input handling. Anything
//! the menu consumes never reaches the screen.

use engine::graphics::Renderer2d;
use engine::surface::SurfaceSize;
use engine::ui::Rect;
use engine::ui_tree::{UiAction, UiEvent, UiId, UiInput, UiTree};

use crate::events::{Key, ScreenEvent};
use crate::fonts::Font;
use crate::ui_ids::UI_CANVAS;
use crate::widgets::draw_button;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub id: UiId,
    pub action: UiAction,
    pub label: String,
    pub rect: Rect,
}

impl MenuButton {
    pub fn new(id: UiId, action: UiAction, label: impl Into<String>) -> Self {
        Self {
            id,
            action,
            label: label.into(),
            rect: Rect::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The event is for the screen.
    Ignored,
    Consumed,
    Activated(UiAction),
}

#[derive(Debug, Clone)]
pub struct MenuBase {
    title: String,
    size: SurfaceSize,
    ui_tree: UiTree,
    container: UiId,
    buttons: Vec<MenuButton>,
    focused: Option<usize>,
}

impl MenuBase {
    pub fn new(title: impl Into<String>, size: SurfaceSize, container: UiId) -> Self {
        Self {
            title: title.into(),
            size,
            ui_tree: UiTree::new(),
            container,
            buttons: Vec::new(),
            focused: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    pub fn add_button(&mut self, button: MenuButton) {
        self.buttons.push(button);
    }

    /// Moves a button; takes effect on the next `rebuild`.
    pub fn move_button(&mut self, id: UiId, rect: Rect) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.id == id) {
            button.rect = rect;
        }
    }

    /// Re-registers hit areas after a layout change.
    ///
    /// `widgets` are extra interactive areas owned by the screen; they get hover tracking but no
    /// click action.
    pub fn rebuild(&mut self, size: SurfaceSize, container: Rect, widgets: &[(UiId, Rect)]) {
        self.size = size;
        let tree = &mut self.ui_tree;
        tree.begin_frame();
        tree.ensure_canvas(UI_CANVAS, Rect::from_size(size.width, size.height));
        tree.add_root(UI_CANVAS);
        tree.ensure_container(self.container, container);
        tree.add_child(UI_CANVAS, self.container);
        for button in &self.buttons {
            tree.ensure_button(button.id, button.rect, Some(button.action));
            tree.add_child(self.container, button.id);
        }
        for &(id, rect) in widgets {
            tree.ensure_button(id, rect, None);
            tree.add_child(self.container, id);
        }
    }

    pub fn hit(&self, pos: (u32, u32)) -> Option<UiId> {
        self.ui_tree.hit(pos)
    }

    pub fn hovered(&self) -> Option<UiId> {
        self.ui_tree.hovered()
    }

    pub fn is_hovered(&self, id: UiId) -> bool {
        self.ui_tree.is_hovered(id)
    }

    pub fn is_button(&self, id: UiId) -> bool {
        self.buttons.iter().any(|b| b.id == id)
    }

    pub fn focused(&self) -> Option<UiId> {
        self.focused.and_then(|i| self.buttons.get(i)).map(|b| b.id)
    }

    pub fn is_focused(&self, id: UiId) -> bool {
        self.focused() == Some(id)
    }

    pub fn handle_event(&mut self, event: &ScreenEvent) -> MenuOutcome {
        match *event {
            ScreenEvent::PointerMoved { x, y } => {
                self.pointer(UiInput {
                    mouse_pos: Some((x, y)),
                    ..UiInput::default()
                });
                MenuOutcome::Ignored
            }
            ScreenEvent::PointerDown { x, y } => {
                self.pointer(UiInput {
                    mouse_pos: Some((x, y)),
                    mouse_down: true,
                    mouse_up: false,
                });
                match self.ui_tree.state().pressed {
                    Some(id) if self.is_button(id) => MenuOutcome::Consumed,
                    _ => MenuOutcome::Ignored,
                }
            }
            ScreenEvent::PointerUp { x, y } => self.pointer(UiInput {
                mouse_pos: Some((x, y)),
                mouse_down: false,
                mouse_up: true,
            }),
            ScreenEvent::Key(press) => match press.key {
                Key::Down | Key::Tab => self.step_focus(true),
                Key::Up => self.step_focus(false),
                Key::Enter => match self.focused.and_then(|i| self.buttons.get(i)) {
                    Some(button) => MenuOutcome::Activated(button.action),
                    None => MenuOutcome::Ignored,
                },
                _ => MenuOutcome::Ignored,
            },
        }
    }

    fn pointer(&mut self, input: UiInput) -> MenuOutcome {
        let mut outcome = MenuOutcome::Ignored;
        for event in self.ui_tree.process_input(input) {
            if let UiEvent::Click {
                action: Some(action),
                ..
            } = event
            {
                outcome = MenuOutcome::Activated(action);
            }
        }
        outcome
    }

    fn step_focus(&mut self, forward: bool) -> MenuOutcome {
        let count = self.buttons.len();
        if count == 0 {
            return MenuOutcome::Ignored;
        }
        let next = match (self.focused, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.focused = Some(next);
        tracing::debug!(button = %self.buttons[next].label, "menu focus moved");
        MenuOutcome::Consumed
    }

    pub fn draw_buttons(&self, gfx: &mut dyn Renderer2d, font: Font) {
        for button in &self.buttons {
            draw_button(
                gfx,
                button.rect,
                &button.label,
                font,
                self.is_hovered(button.id),
                self.is_focused(button.id),
            );
        }
    }
}
