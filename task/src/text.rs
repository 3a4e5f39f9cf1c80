use engine::graphics::{Color, Renderer2d};
use engine::ui::{Rect, Size};

use crate::fonts::Font;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Gap(u32),
    Line { text: String, font: Font },
}

/// Vertical stack of text lines separated by fixed pixel gaps.
///
/// Lines follow each other directly unless a `gap` is pushed between them. The block is as wide
/// as its widest line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pieces: Vec<Piece>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, px: u32) -> Self {
        self.pieces.push(Piece::Gap(px));
        self
    }

    pub fn line(mut self, text: impl Into<String>, font: Font) -> Self {
        self.pieces.push(Piece::Line {
            text: text.into(),
            font,
        });
        self
    }

    pub fn size(&self) -> Size {
        self.pieces.iter().fold(Size::default(), |acc, piece| match piece {
            Piece::Gap(px) => Size::new(acc.w, acc.h + px),
            Piece::Line { text, font } => {
                let m = font.measure(text);
                Size::new(acc.w.max(m.w), acc.h + m.h)
            }
        })
    }

    /// Where each line lands when the block's top-left corner is at `origin`.
    pub fn line_rects(&self, origin: (u32, u32)) -> Vec<Rect> {
        let (x, mut y) = origin;
        let mut rects = Vec::new();
        for piece in &self.pieces {
            match piece {
                Piece::Gap(px) => y += px,
                Piece::Line { text, font } => {
                    let m = font.measure(text);
                    rects.push(Rect::new(x, y, m.w, m.h));
                    y += m.h;
                }
            }
        }
        rects
    }

    pub fn draw(&self, gfx: &mut dyn Renderer2d, origin: (u32, u32), color: Color) {
        let lines = self.pieces.iter().filter_map(|piece| match piece {
            Piece::Line { text, font } => Some((text, font)),
            Piece::Gap(_) => None,
        });
        for ((text, font), rect) in lines.zip(self.line_rects(origin)) {
            font.draw(gfx, rect.x, rect.y, text, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_adds_gaps_and_line_heights() {
        let font = Font::new(1);
        let block = TextBlock::new()
            .gap(8)
            .line("AB", font)
            .line("ABCD", font)
            .gap(8);
        // "ABCD" is 4 * 4 - 1 wide; each line is 5 tall.
        assert_eq!(block.size(), Size::new(15, 26));
    }

    #[test]
    fn line_rects_skip_gaps() {
        let font = Font::new(2);
        let block = TextBlock::new().gap(12).line("A", font).gap(18).line("B", font);
        let rects = block.line_rects((100, 50));
        assert_eq!(rects, vec![Rect::new(100, 62, 6, 10), Rect::new(100, 90, 6, 10)]);
    }

    #[test]
    fn empty_block_has_no_extent() {
        assert_eq!(TextBlock::new().size(), Size::new(0, 0));
    }
}
