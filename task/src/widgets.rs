//! Drawing helpers for boxes, buttons, numeric fields and stepper arrows.

use engine::graphics::{Color, Renderer2d};
use engine::ui::{Insets, Rect};

use crate::fonts::Font;

pub const COLOR_DIM: Color = [0, 0, 0, 255];
pub const DIM_ALPHA: u8 = 64;

pub const COLOR_BACKGROUND: Color = [10, 10, 14, 255];
pub const COLOR_PANEL_BG: Color = [16, 16, 22, 255];
pub const COLOR_PANEL_BORDER: Color = [40, 40, 55, 255];
pub const COLOR_TEXT: Color = [235, 235, 245, 255];
pub const COLOR_ACCENT: Color = [255, 215, 0, 255];

const COLOR_BUTTON_BG: Color = [28, 28, 38, 255];
const COLOR_FIELD_BG: Color = [6, 6, 10, 255];
const HOVER_LIFT: u8 = 24;

pub fn brighten(color: Color, amount: u8) -> Color {
    let [r, g, b, a] = color;
    [
        r.saturating_add(amount),
        g.saturating_add(amount),
        b.saturating_add(amount),
        a,
    ]
}

/// Fill and border for a button, lifted when the pointer is over it.
pub fn button_colors(hovered: bool) -> (Color, Color) {
    if hovered {
        (
            brighten(COLOR_BUTTON_BG, HOVER_LIFT),
            brighten(COLOR_PANEL_BORDER, HOVER_LIFT * 2),
        )
    } else {
        (COLOR_BUTTON_BG, COLOR_PANEL_BORDER)
    }
}

pub fn dim_screen(gfx: &mut dyn Renderer2d) {
    let size = gfx.size();
    gfx.blend_rect(
        Rect::from_size(size.width, size.height),
        COLOR_DIM,
        DIM_ALPHA,
    );
}

pub fn draw_box(gfx: &mut dyn Renderer2d, rect: Rect) {
    gfx.fill_rect(rect, COLOR_PANEL_BG);
    gfx.rect_outline(rect, COLOR_PANEL_BORDER);
}

fn draw_centered_text(gfx: &mut dyn Renderer2d, rect: Rect, text: &str, font: Font, color: Color) {
    let m = font.measure(text);
    let (cx, cy) = rect.center();
    font.draw(
        gfx,
        cx.saturating_sub(m.w / 2),
        cy.saturating_sub(m.h / 2),
        text,
        color,
    );
}

pub fn draw_button(
    gfx: &mut dyn Renderer2d,
    rect: Rect,
    label: &str,
    font: Font,
    hovered: bool,
    focused: bool,
) {
    let (fill, border) = button_colors(hovered);
    gfx.fill_rect(rect, fill);
    gfx.rect_outline(rect, if focused { COLOR_ACCENT } else { border });
    draw_centered_text(gfx, rect, label, font, COLOR_TEXT);
}

/// Single-line numeric entry box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub rect: Rect,
    pub text: String,
    pub active: bool,
    pub hovered: bool,
}

impl InputField {
    pub fn draw(&self, gfx: &mut dyn Renderer2d, font: Font) {
        let fill = if self.hovered {
            brighten(COLOR_FIELD_BG, HOVER_LIFT)
        } else {
            COLOR_FIELD_BG
        };
        gfx.fill_rect(self.rect, fill);
        if self.active {
            gfx.rect_outline(self.rect, COLOR_ACCENT);
            gfx.rect_outline(self.rect.inset(Insets::all(1)), COLOR_ACCENT);
        } else {
            gfx.rect_outline(self.rect, COLOR_PANEL_BORDER);
        }
        draw_centered_text(gfx, self.rect, &self.text, font, COLOR_TEXT);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowButton {
    pub rect: Rect,
    pub direction: ArrowDirection,
    pub hovered: bool,
}

impl ArrowButton {
    pub fn draw(&self, gfx: &mut dyn Renderer2d) {
        if self.rect.is_empty() {
            return;
        }
        let (fill, border) = button_colors(self.hovered);
        gfx.fill_rect(self.rect, fill);
        gfx.rect_outline(self.rect, border);

        // Triangle, one row at a time, widest row at the base.
        let rows = (self.rect.h / 2).max(1);
        let top = self.rect.y + (self.rect.h - rows) / 2;
        let (cx, _) = self.rect.center();
        for i in 0..rows {
            let half = i + 1;
            let y = match self.direction {
                ArrowDirection::Up => top + i,
                ArrowDirection::Down => top + rows - 1 - i,
            };
            gfx.fill_rect(
                Rect::new(cx.saturating_sub(half), y, half * 2, 1),
                COLOR_TEXT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_buttons_are_brighter() {
        let (idle_fill, idle_border) = button_colors(false);
        let (hot_fill, hot_border) = button_colors(true);
        assert!(hot_fill[0] > idle_fill[0]);
        assert!(hot_border[0] > idle_border[0]);
        assert_eq!(hot_fill[3], 255);
    }

    #[test]
    fn brighten_saturates() {
        assert_eq!(brighten([250, 10, 0, 7], 10), [255, 20, 10, 7]);
    }
}
