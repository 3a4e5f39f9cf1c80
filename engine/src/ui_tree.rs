use std::collections::HashMap;

use crate::ui::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiAction(pub u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub hovered: Option<UiId>,
    pub pressed: Option<UiId>,
}

impl UiState {
    pub fn is_hovered(&self, id: UiId) -> bool {
        self.hovered == Some(id)
    }

    pub fn is_pressed(&self, id: UiId) -> bool {
        self.pressed == Some(id)
    }
}

/// Pointer input for a single event, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiInput {
    pub mouse_pos: Option<(u32, u32)>,
    pub mouse_down: bool,
    pub mouse_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click { id: UiId, action: Option<UiAction> },
    Hover { id: UiId, entered: bool },
}

/// Retained hit-testing tree.
///
/// Callers re-register nodes whenever their layout changes (`begin_frame` + `ensure_*` +
/// `add_root`/`add_child`); hover/press state survives across rebuilds because it is keyed by
/// `UiId`.
#[derive(Debug, Clone, Default)]
pub struct UiTree {
    nodes: HashMap<UiId, UiNode>,
    roots: Vec<UiId>,
    state: UiState,
}

#[derive(Debug, Clone)]
struct UiNode {
    kind: UiNodeKind,
    rect: Rect,
    children: Vec<UiId>,
    enabled: bool,
}

#[derive(Debug, Clone, Copy)]
enum UiNodeKind {
    Canvas,
    Container,
    /// Any interactive leaf. `action: None` is used for widgets (fields, steppers) that react to
    /// presses but don't produce a click action of their own.
    Button { action: Option<UiAction> },
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.roots.clear();
        for node in self.nodes.values_mut() {
            node.children.clear();
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn hovered(&self) -> Option<UiId> {
        self.state.hovered
    }

    pub fn is_hovered(&self, id: UiId) -> bool {
        self.state.is_hovered(id)
    }

    pub fn is_pressed(&self, id: UiId) -> bool {
        self.state.is_pressed(id)
    }

    pub fn ensure_canvas(&mut self, id: UiId, rect: Rect) {
        self.ensure_node(id, UiNodeKind::Canvas, rect);
    }

    pub fn ensure_container(&mut self, id: UiId, rect: Rect) {
        self.ensure_node(id, UiNodeKind::Container, rect);
    }

    pub fn ensure_button(&mut self, id: UiId, rect: Rect, action: Option<UiAction>) {
        self.ensure_node(id, UiNodeKind::Button { action }, rect);
    }

    pub fn add_root(&mut self, id: UiId) {
        self.roots.push(id);
    }

    pub fn add_child(&mut self, parent: UiId, child: UiId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    pub fn set_enabled(&mut self, id: UiId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.enabled = enabled;
        }
    }

    pub fn process_input(&mut self, input: UiInput) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(pos) = input.mouse_pos {
            let hovered = self.hit(pos);
            if hovered != self.state.hovered {
                if let Some(prev) = self.state.hovered {
                    events.push(UiEvent::Hover {
                        id: prev,
                        entered: false,
                    });
                }
                if let Some(next) = hovered {
                    events.push(UiEvent::Hover {
                        id: next,
                        entered: true,
                    });
                }
                self.state.hovered = hovered;
            }
        }

        if input.mouse_down {
            self.state.pressed = self.state.hovered;
        }

        if input.mouse_up {
            if let Some(id) = self.state.pressed.take() {
                if self.state.hovered == Some(id) {
                    if let Some(UiNode {
                        kind: UiNodeKind::Button { action },
                        enabled: true,
                        ..
                    }) = self.nodes.get(&id)
                    {
                        events.push(UiEvent::Click {
                            id,
                            action: *action,
                        });
                    }
                }
            }
        }

        events
    }

    /// Topmost enabled interactive node under `pos`.
    pub fn hit(&self, pos: (u32, u32)) -> Option<UiId> {
        self.roots
            .iter()
            .rev()
            .find_map(|root| self.hit_node(*root, pos))
    }

    fn ensure_node(&mut self, id: UiId, kind: UiNodeKind, rect: Rect) {
        let node = self.nodes.entry(id).or_insert_with(|| UiNode {
            kind,
            rect,
            children: Vec::new(),
            enabled: true,
        });
        node.kind = kind;
        node.rect = rect;
    }

    fn hit_node(&self, id: UiId, pos: (u32, u32)) -> Option<UiId> {
        let node = self.nodes.get(&id)?;
        if !node.rect.contains(pos.0, pos.1) {
            return None;
        }
        match node.kind {
            UiNodeKind::Button { .. } => node.enabled.then_some(id),
            UiNodeKind::Canvas | UiNodeKind::Container => node
                .children
                .iter()
                .rev()
                .find_map(|child| self.hit_node(*child, pos)),
        }
    }
}
