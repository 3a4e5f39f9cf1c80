//! Between-rounds screen shown after an allocation is confirmed.

use engine::graphics::Renderer2d;
use engine::surface::SurfaceSize;
use engine::ui::{Anchor, Insets, Rect, Size};

use crate::allocation::TaskOutcome;
use crate::events::{Key, ScreenEvent};
use crate::fonts::TaskFonts;
use crate::menu::{MenuBase, MenuButton, MenuOutcome};
use crate::text::TextBlock;
use crate::ui_ids::{
    ACTION_PLAY_NEXT_ROUND, ACTION_PLAY_QUIT, UI_PLAY_CONTAINER, UI_PLAY_NEXT_ROUND, UI_PLAY_QUIT,
};
use crate::widgets::{COLOR_TEXT, draw_box};

const PANEL_PAD: u32 = 24;
const BUTTON_GAP: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    NextRound,
    Quit,
}

#[derive(Debug, Clone)]
pub struct PlayScreen {
    menu: MenuBase,
    fonts: TaskFonts,
    round: u32,
    last: Option<TaskOutcome>,
    panel: Rect,
    text_origin: (u32, u32),
}

impl PlayScreen {
    pub fn new(fonts: TaskFonts, screen: SurfaceSize) -> Self {
        let mut menu = MenuBase::new("Play", screen, UI_PLAY_CONTAINER);
        menu.add_button(MenuButton::new(
            UI_PLAY_NEXT_ROUND,
            ACTION_PLAY_NEXT_ROUND,
            "Next round",
        ));
        menu.add_button(MenuButton::new(UI_PLAY_QUIT, ACTION_PLAY_QUIT, "Quit"));
        let mut play = Self {
            menu,
            fonts,
            round: 1,
            last: None,
            panel: Rect::default(),
            text_origin: (0, 0),
        };
        play.relayout(screen);
        play
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_outcome(&self) -> Option<&TaskOutcome> {
        self.last.as_ref()
    }

    pub fn panel(&self) -> Rect {
        self.panel
    }

    pub fn menu(&self) -> &MenuBase {
        &self.menu
    }

    pub fn show_round(&mut self, round: u32, outcome: Option<TaskOutcome>) {
        self.round = round;
        self.last = outcome;
        let screen = self.menu.size();
        self.relayout(screen);
    }

    fn text(&self) -> TextBlock {
        let mut text = TextBlock::new().line(format!("Round {}", self.round), self.fonts.title);
        if let Some(outcome) = &self.last {
            text = text
                .gap(16)
                .line("Your allocation was sent.", self.fonts.text)
                .gap(8)
                .line(
                    format!("Your group: {} {}s", outcome.own_group, outcome.item),
                    self.fonts.text,
                )
                .line(
                    format!("Other group: {} {}s", outcome.other_group, outcome.item),
                    self.fonts.text,
                );
        }
        text.gap(16)
            .line("N or Enter: next round. Esc: quit.", self.fonts.text)
    }

    fn relayout(&mut self, screen: SurfaceSize) {
        let text_size = self.text().size();
        let button = Size::new(
            self.fonts.text.measure("Next round").w + PANEL_PAD * 2,
            self.fonts.text.line_height() + 20,
        );
        let panel_size = Size::new(
            text_size.w.max(button.w),
            text_size.h + BUTTON_GAP + button.h * 2 + BUTTON_GAP,
        )
        .grow(PANEL_PAD * 2, PANEL_PAD * 2);
        let bounds = Rect::from_size(screen.width, screen.height);
        let panel = bounds.place(panel_size, Anchor::Center);
        let content = panel.inset(Insets::all(PANEL_PAD));

        let quit = content.place(button, Anchor::BottomCenter);
        let next = Rect::new(
            quit.x,
            quit.y.saturating_sub(button.h + BUTTON_GAP),
            quit.w,
            quit.h,
        );
        self.menu.move_button(UI_PLAY_NEXT_ROUND, next);
        self.menu.move_button(UI_PLAY_QUIT, quit);
        self.menu.rebuild(screen, panel, &[]);
        self.panel = panel;
        self.text_origin = (content.x, content.y);
    }

    pub fn handle_event(&mut self, event: &ScreenEvent) -> Option<PlayCommand> {
        match self.menu.handle_event(event) {
            MenuOutcome::Activated(ACTION_PLAY_NEXT_ROUND) => return Some(PlayCommand::NextRound),
            MenuOutcome::Activated(ACTION_PLAY_QUIT) => return Some(PlayCommand::Quit),
            MenuOutcome::Activated(_) | MenuOutcome::Consumed => return None,
            MenuOutcome::Ignored => {}
        }
        let ScreenEvent::Key(press) = *event else {
            return None;
        };
        match (press.key, press.text) {
            (Key::Enter, _) | (Key::Character, Some('n' | 'N')) => Some(PlayCommand::NextRound),
            (Key::Escape, _) | (Key::Character, Some('q' | 'Q')) => Some(PlayCommand::Quit),
            _ => None,
        }
    }

    pub fn draw(&mut self, gfx: &mut dyn Renderer2d) {
        let screen = gfx.size();
        if screen != self.menu.size() {
            self.relayout(screen);
        }
        draw_box(gfx, self.panel);
        self.text().draw(gfx, self.text_origin, COLOR_TEXT);
        self.menu.draw_buttons(gfx, self.fonts.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> PlayScreen {
        PlayScreen::new(TaskFonts::default(), SurfaceSize::new(1280, 720))
    }

    #[test]
    fn keys_choose_next_round_or_quit() {
        let mut play = screen();
        assert_eq!(
            play.handle_event(&ScreenEvent::key(Key::Enter)),
            Some(PlayCommand::NextRound)
        );
        assert_eq!(
            play.handle_event(&ScreenEvent::Key(crate::events::KeyPress {
                key: Key::Character,
                text: Some('n'),
            })),
            Some(PlayCommand::NextRound)
        );
        assert_eq!(
            play.handle_event(&ScreenEvent::key(Key::Escape)),
            Some(PlayCommand::Quit)
        );
        assert_eq!(
            play.handle_event(&ScreenEvent::typed('Q')),
            Some(PlayCommand::Quit)
        );
        assert_eq!(play.handle_event(&ScreenEvent::digit('4')), None);
    }

    #[test]
    fn clicking_quit_quits() {
        let mut play = screen();
        let quit = play.menu().buttons()[1].rect;
        let (x, y) = quit.center();
        assert_eq!(play.handle_event(&ScreenEvent::PointerDown { x, y }), None);
        assert_eq!(
            play.handle_event(&ScreenEvent::PointerUp { x, y }),
            Some(PlayCommand::Quit)
        );
    }

    #[test]
    fn buttons_stay_inside_the_panel() {
        let mut play = screen();
        play.show_round(
            4,
            Some(TaskOutcome {
                round: 4,
                item: "boot".to_string(),
                total: 8,
                own_group: 5,
                other_group: 3,
            }),
        );
        let panel = play.panel();
        for button in play.menu().buttons() {
            assert!(button.rect.x >= panel.x && button.rect.right() <= panel.right());
            assert!(button.rect.y >= panel.y && button.rect.bottom() <= panel.bottom());
        }
        assert_eq!(play.round(), 4);
    }
}
