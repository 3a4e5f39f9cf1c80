use engine::graphics::{Color, Renderer2d, measure_text};
use engine::ui::Size;

/// A block-font size. All text on a screen goes through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub scale: u32,
}

impl Font {
    pub const fn new(scale: u32) -> Self {
        Self { scale }
    }

    pub fn measure(&self, text: &str) -> Size {
        measure_text(text, self.scale)
    }

    pub fn line_height(&self) -> u32 {
        self.measure("0").h
    }

    pub fn draw(&self, gfx: &mut dyn Renderer2d, x: u32, y: u32, text: &str, color: Color) {
        gfx.draw_text_scaled(x, y, text, color, self.scale);
    }
}

/// Fonts handed to a screen by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFonts {
    pub title: Font,
    pub text: Font,
    pub input: Font,
}

impl Default for TaskFonts {
    fn default() -> Self {
        Self {
            title: Font::new(6),
            text: Font::new(4),
            input: Font::new(5),
        }
    }
}
