//! The resource-allocation screen.

use std::sync::mpsc::Sender;

use engine::graphics::Renderer2d;
use engine::surface::SurfaceSize;
use engine::ui::Anchor;
use engine::ui_tree::{UiAction, UiId};

use crate::allocation::{AllocationState, Recipient, TaskOutcome};
use crate::catalog::AllocationCatalog;
use crate::events::{CustomCursor, GameState, HostEvent, Key, ScreenEvent};
use crate::fonts::TaskFonts;
use crate::layout::{self, CONFIRM_LABEL, TaskLayout};
use crate::menu::{MenuBase, MenuButton, MenuOutcome};
use crate::ui_ids::{
    ACTION_TASK_CONFIRM, UI_TASK_CONFIRM, UI_TASK_CONTAINER, down_id, field_id, up_id,
};
use crate::widgets::{
    ArrowButton, ArrowDirection, COLOR_TEXT, InputField, dim_screen, draw_box,
};

pub const TITLE: &str = "Task";

pub type SwitchScreen = Box<dyn FnMut(GameState)>;

pub struct PlayerTask {
    menu: MenuBase,
    state: AllocationState,
    fonts: TaskFonts,
    layout: TaskLayout,
    switch_screen: SwitchScreen,
    events: Sender<HostEvent>,
}

impl PlayerTask {
    pub fn new(
        switch_screen: SwitchScreen,
        current_round: u32,
        fonts: TaskFonts,
        catalog: &AllocationCatalog,
        events: Sender<HostEvent>,
        screen: SurfaceSize,
    ) -> Self {
        let item = catalog.item_for_round(current_round).clone();
        tracing::debug!(
            round = current_round,
            item = %item.name,
            total = item.total_quantity,
            "task opened"
        );

        let mut menu = MenuBase::new(TITLE, screen, UI_TASK_CONTAINER);
        menu.add_button(MenuButton::new(
            UI_TASK_CONFIRM,
            ACTION_TASK_CONFIRM,
            CONFIRM_LABEL,
        ));

        let mut task = Self {
            menu,
            state: AllocationState::new(current_round, item),
            fonts,
            layout: TaskLayout::default(),
            switch_screen,
            events,
        };
        task.relayout(screen);
        task
    }

    pub fn state(&self) -> &AllocationState {
        &self.state
    }

    pub fn layout(&self) -> &TaskLayout {
        &self.layout
    }

    pub fn outcome(&self) -> TaskOutcome {
        self.state.outcome()
    }

    fn relayout(&mut self, screen: SurfaceSize) {
        let layout =
            layout::compute_layout(screen, &self.fonts, self.menu.title(), self.state.item());
        self.menu.move_button(UI_TASK_CONFIRM, layout.confirm);

        let mut widgets = Vec::with_capacity(6);
        for r in Recipient::ALL {
            widgets.push((field_id(r), layout.field(r)));
            widgets.push((up_id(r), layout.up(r)));
            widgets.push((down_id(r), layout.down(r)));
        }
        self.menu.rebuild(screen, layout.task_box, &widgets);
        self.layout = layout;
    }

    pub fn draw(&mut self, gfx: &mut dyn Renderer2d) {
        let screen = gfx.size();
        if screen != self.layout.screen {
            self.relayout(screen);
        }
        let fonts = self.fonts;

        dim_screen(gfx);

        draw_box(gfx, self.layout.title_box);
        layout::title_text(&fonts, self.menu.title()).draw(
            gfx,
            self.layout.title_origin,
            COLOR_TEXT,
        );

        draw_box(gfx, self.layout.task_box);
        layout::task_text(&fonts, self.state.item()).draw(
            gfx,
            self.layout.task_origin,
            COLOR_TEXT,
        );

        for r in Recipient::ALL {
            InputField {
                rect: self.layout.field(r),
                text: self.state.allocation(r).to_string(),
                active: self.state.active() == Some(r),
                hovered: self.menu.is_hovered(field_id(r)),
            }
            .draw(gfx, fonts.input);
            for (id, rect, direction) in [
                (up_id(r), self.layout.up(r), ArrowDirection::Up),
                (down_id(r), self.layout.down(r), ArrowDirection::Down),
            ] {
                ArrowButton {
                    rect,
                    direction,
                    hovered: self.menu.is_hovered(id),
                }
                .draw(gfx);
            }
        }

        self.menu.draw_buttons(gfx, fonts.text);

        if let Some(info) = layout::info_text(&fonts, self.state.balance()) {
            let size = info.size();
            let info_box = self.layout.info_box(size);
            draw_box(gfx, info_box);
            let at = info_box.place(size, Anchor::Center);
            info.draw(gfx, (at.x, at.y), COLOR_TEXT);
        }
    }

    /// Returns `true` when the event was used up: menu activations and focus moves, or a digit /
    /// backspace typed into the active field. Clicks on fields and arrows change state but are
    /// left for the host.
    pub fn handle_event(&mut self, event: &ScreenEvent) -> bool {
        match self.menu.handle_event(event) {
            MenuOutcome::Consumed => return true,
            MenuOutcome::Activated(action) => {
                self.button_action(action);
                return true;
            }
            MenuOutcome::Ignored => {}
        }

        match *event {
            ScreenEvent::PointerDown { x, y } => {
                if let Some(id) = self.menu.hit((x, y)) {
                    self.press_widget(id);
                }
                false
            }
            ScreenEvent::Key(press) => {
                let Some(r) = self.state.active() else {
                    return false;
                };
                if press.key == Key::Backspace {
                    self.state.backspace(r);
                    true
                } else if let Some(d) = press.digit() {
                    self.state.append_digit(r, d)
                } else {
                    false
                }
            }
            ScreenEvent::PointerMoved { .. } | ScreenEvent::PointerUp { .. } => false,
        }
    }

    fn press_widget(&mut self, id: UiId) {
        for r in Recipient::ALL {
            if id == field_id(r) {
                self.state.set_active(Some(r));
            } else if id == up_id(r) {
                self.state.increment(r);
            } else if id == down_id(r) {
                self.state.decrement(r);
            }
        }
    }

    pub fn button_action(&mut self, action: UiAction) {
        if action != ACTION_TASK_CONFIRM {
            return;
        }
        if self.state.is_balanced() {
            let outcome = self.state.outcome();
            tracing::info!(
                round = outcome.round,
                item = %outcome.item,
                own_group = outcome.own_group,
                other_group = outcome.other_group,
                "allocation confirmed"
            );
            (self.switch_screen)(GameState::Play);
        } else {
            tracing::debug!(balance = ?self.state.balance(), "confirm blocked");
        }
    }

    /// Posts a cursor hint: a pointer over buttons and input fields, an arrow elsewhere.
    pub fn mouse_hover(&self) {
        let over_target = self.menu.hovered().is_some_and(|id| {
            self.menu.is_button(id) || Recipient::ALL.iter().any(|&r| field_id(r) == id)
        });
        let cursor = if over_target {
            CustomCursor::Point
        } else {
            CustomCursor::Arrow
        };
        if self.events.send(HostEvent::SetCursor(cursor)).is_err() {
            tracing::debug!("cursor hint dropped, host channel closed");
        }
    }
}
