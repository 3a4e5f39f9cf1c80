//! Screen geometry for the allocation task.
//!
//! Pure functions of screen size, fonts and the round's item, so layout can be tested without a
//! renderer.

use engine::surface::SurfaceSize;
use engine::ui::{Anchor, Rect, Size};

use crate::allocation::{Balance, Recipient};
use crate::catalog::AllocationItem;
use crate::fonts::TaskFonts;
use crate::text::TextBlock;

pub const BOX_MIN_WIDTH: u32 = 400;
const BOX_PAD: u32 = 16;
const TITLE_EXTRA_H: u32 = 24;
const WIDGET_GAP: u32 = 16;
const FIELD_MIN_W: u32 = 50;
const FIELD_PAD: u32 = 8;
const FIELD_PAD_Y: u32 = 6;
const ARROW_W: u32 = 30;
const ARROW_GAP: u32 = 4;
const CONFIRM_PAD_X: u32 = 24;
const CONFIRM_PAD_Y: u32 = 10;

/// Index of the first row label in `task_text`.
const FIRST_ROW_LINE: usize = 2;

pub const CONFIRM_LABEL: &str = "Confirm";

pub fn title_text(fonts: &TaskFonts, title: &str) -> TextBlock {
    TextBlock::new().gap(2).line(title, fonts.title)
}

pub fn task_text(fonts: &TaskFonts, item: &AllocationItem) -> TextBlock {
    TextBlock::new()
        .gap(12)
        .line(
            format!(
                "You have received {} {}s!",
                item.total_quantity, item.name
            ),
            fonts.text,
        )
        .line("Distribute them:", fonts.text)
        .gap(18)
        .line(Recipient::OwnGroup.label(), fonts.text)
        .gap(18)
        .line(Recipient::OtherGroup.label(), fonts.text)
        .gap(12)
}

/// Feedback shown while the allocation doesn't add up; `None` when balanced.
pub fn info_text(fonts: &TaskFonts, balance: Balance) -> Option<TextBlock> {
    let (headline, detail) = match balance {
        Balance::Balanced => return None,
        Balance::Missing(n) => (
            "You have not allocated all of the items yet!",
            format!("Items missing: {n}"),
        ),
        Balance::Overstock(n) => (
            "You don't have that many items to distribute.",
            format!("Take out: {n}"),
        ),
    };
    Some(
        TextBlock::new()
            .gap(8)
            .line(headline, fonts.text)
            .line(detail, fonts.text)
            .gap(8),
    )
}

/// Placed widgets for one screen size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskLayout {
    pub screen: SurfaceSize,
    pub title_box: Rect,
    pub title_origin: (u32, u32),
    pub task_box: Rect,
    pub task_origin: (u32, u32),
    pub fields: [Rect; 2],
    pub up: [Rect; 2],
    pub down: [Rect; 2],
    pub confirm: Rect,
}

impl TaskLayout {
    pub fn field(&self, recipient: Recipient) -> Rect {
        self.fields[recipient.index()]
    }

    pub fn up(&self, recipient: Recipient) -> Rect {
        self.up[recipient.index()]
    }

    pub fn down(&self, recipient: Recipient) -> Rect {
        self.down[recipient.index()]
    }

    /// Feedback box for text of `text_size`, centred at three quarters of the screen height.
    pub fn info_box(&self, text_size: Size) -> Rect {
        let size = text_size.grow(BOX_PAD * 2, 0);
        Rect::centered_at(
            self.screen.width / 2,
            self.screen.height / 4 * 3,
            size,
        )
        .clamp_into(screen_rect(self.screen))
    }
}

fn screen_rect(screen: SurfaceSize) -> Rect {
    Rect::from_size(screen.width, screen.height)
}

pub fn compute_layout(
    screen: SurfaceSize,
    fonts: &TaskFonts,
    title: &str,
    item: &AllocationItem,
) -> TaskLayout {
    let bounds = screen_rect(screen);

    let title_size = title_text(fonts, title).size();
    let title_box = Rect::centered_at(
        screen.width / 2,
        0,
        title_size.grow(BOX_PAD * 2, TITLE_EXTRA_H),
    )
    .clamp_into(bounds);
    let title_at = title_box.place(title_size, Anchor::Center);

    let text = task_text(fonts, item);
    let text_size = text.size();
    let label_w = Recipient::ALL
        .iter()
        .map(|r| fonts.text.measure(r.label()).w)
        .max()
        .unwrap_or(0);
    let field_size = Size::new(
        FIELD_MIN_W.max(fonts.input.measure("00").w + FIELD_PAD * 2),
        fonts.input.line_height() + FIELD_PAD_Y * 2,
    );
    let row_w = label_w + WIDGET_GAP + field_size.w + ARROW_GAP + ARROW_W;
    let content_w = text_size.w.max(row_w);

    let label = fonts.text.measure(CONFIRM_LABEL);
    let confirm_size = label.grow(CONFIRM_PAD_X * 2, CONFIRM_PAD_Y * 2);

    let box_size = Size::new(
        BOX_MIN_WIDTH.max(content_w + BOX_PAD * 2),
        text_size.h + confirm_size.h + BOX_PAD,
    );
    let task_box =
        Rect::centered_at(screen.width / 2, screen.height / 3, box_size).clamp_into(bounds);
    let task_origin = (task_box.x + BOX_PAD, task_box.y);

    let lines = text.line_rects(task_origin);
    let mut fields = [Rect::default(); 2];
    let mut up = [Rect::default(); 2];
    let mut down = [Rect::default(); 2];
    for r in Recipient::ALL {
        let i = r.index();
        let row = lines.get(FIRST_ROW_LINE + i).copied().unwrap_or_default();
        let (_, row_cy) = row.center();
        let field = Rect::new(
            task_origin.0 + label_w + WIDGET_GAP,
            row_cy.saturating_sub(field_size.h / 2),
            field_size.w,
            field_size.h,
        );
        let arrow_x = field.right() + ARROW_GAP;
        let half = field.h / 2;
        fields[i] = field;
        up[i] = Rect::new(arrow_x, field.y, ARROW_W, half);
        down[i] = Rect::new(arrow_x, field.y + half, ARROW_W, field.h - half);
    }

    let (box_cx, _) = task_box.center();
    let confirm = Rect::new(
        box_cx.saturating_sub(confirm_size.w / 2),
        task_box.y + text_size.h,
        confirm_size.w,
        confirm_size.h,
    );

    TaskLayout {
        screen,
        title_box,
        title_origin: (title_at.x, title_at.y),
        task_box,
        task_origin,
        fields,
        up,
        down,
        confirm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: u32, h: u32, item: AllocationItem) -> TaskLayout {
        compute_layout(SurfaceSize::new(w, h), &TaskFonts::default(), "Task", &item)
    }

    #[test]
    fn default_layout_has_no_screen_and_is_replaced_on_first_layout() {
        let empty = TaskLayout::default();
        assert!(empty.screen.is_empty());
        assert_eq!(empty.confirm, Rect::default());

        let l = layout(1280, 720, AllocationItem::new("candy bar", 20));
        assert_ne!(l, empty);
        assert_eq!(l.screen, SurfaceSize::new(1280, 720));
    }

    #[test]
    fn task_box_is_centred_at_a_third_of_the_height() {
        let l = layout(1280, 720, AllocationItem::new("candy bar", 20));
        assert_eq!(l.task_box.center().0, 640);
        let (_, cy) = l.task_box.center();
        assert!(cy.abs_diff(240) <= 1);
        assert!(l.task_box.w >= BOX_MIN_WIDTH);
    }

    #[test]
    fn title_box_hugs_the_top_edge() {
        let l = layout(1280, 720, AllocationItem::new("candy bar", 20));
        assert_eq!(l.title_box.y, 0);
        assert!(l.title_box.contains(l.title_origin.0, l.title_origin.1));
    }

    #[test]
    fn widgets_sit_inside_the_task_box_without_overlapping() {
        let l = layout(1280, 720, AllocationItem::new("water bottle", 24));
        for r in Recipient::ALL {
            for rect in [l.field(r), l.up(r), l.down(r)] {
                assert!(rect.x >= l.task_box.x && rect.right() <= l.task_box.right());
                assert!(rect.y >= l.task_box.y && rect.bottom() <= l.task_box.bottom());
            }
            assert_eq!(l.up(r).bottom(), l.down(r).y);
            assert!(l.field(r).right() <= l.up(r).x);
        }
        assert!(l.field(Recipient::OwnGroup).bottom() <= l.field(Recipient::OtherGroup).y);
        assert!(l.field(Recipient::OtherGroup).bottom() <= l.confirm.y);
        assert!(l.confirm.bottom() <= l.task_box.bottom());
    }

    #[test]
    fn long_item_names_widen_the_box() {
        let short = layout(1600, 900, AllocationItem::new("boot", 8));
        let long = layout(1600, 900, AllocationItem::new("extra long sleeping bag", 8));
        assert!(long.task_box.w > short.task_box.w);
    }

    #[test]
    fn info_text_matches_balance() {
        let fonts = TaskFonts::default();
        assert!(info_text(&fonts, Balance::Balanced).is_none());
        let missing = info_text(&fonts, Balance::Missing(3)).unwrap();
        let over = info_text(&fonts, Balance::Overstock(4)).unwrap();
        assert_eq!(
            missing.size().h,
            8 + 2 * fonts.text.line_height() + 8
        );
        assert_ne!(missing.size().w, over.size().w);
    }

    #[test]
    fn info_box_is_centred_at_three_quarters() {
        let l = layout(1280, 720, AllocationItem::new("mask", 26));
        let b = l.info_box(Size::new(300, 50));
        assert_eq!(b.center(), (640, 540));
        assert_eq!(b.w, 300 + 32);
    }
}
