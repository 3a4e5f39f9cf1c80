//! Layout primitives for screen-space UI.
//!
//! Everything is expressed in unsigned pixel coordinates. Helpers saturate instead of going
//! negative, so a box anchored partly off-screen is pushed back to the edge.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// A rect of `size` whose center sits on `(cx, cy)`.
    ///
    /// Origins that would land left of / above zero are clamped to zero.
    pub fn centered_at(cx: u32, cy: u32, size: Size) -> Self {
        Self {
            x: cx.saturating_sub(size.w / 2),
            y: cy.saturating_sub(size.h / 2),
            w: size.w,
            h: size.h,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn center(&self) -> (u32, u32) {
        (self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the rectangle inset by `insets` (i.e. the inner content area).
    ///
    /// If insets exceed the rect size, the resulting width/height will saturate to 0.
    pub fn inset(&self, insets: Insets) -> Self {
        let w = self
            .w
            .saturating_sub(insets.left.saturating_add(insets.right));
        let h = self
            .h
            .saturating_sub(insets.top.saturating_add(insets.bottom));
        Self {
            x: self.x.saturating_add(insets.left),
            y: self.y.saturating_add(insets.top),
            w,
            h,
        }
    }

    /// Places a child of `size` inside this rect using the requested `anchor`.
    ///
    /// If `size` exceeds this rect, it is clamped to fit.
    pub fn place(&self, size: Size, anchor: Anchor) -> Self {
        let size = size.clamp_max(self.size());
        let free_w = self.w - size.w;
        let free_h = self.h - size.h;

        let dx = match anchor {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => 0,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => free_w / 2,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => free_w,
        };
        let dy = match anchor {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 0,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => free_h / 2,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => free_h,
        };

        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            w: size.w,
            h: size.h,
        }
    }

    /// Moves this rect so that it lies fully inside `bounds` where possible.
    pub fn clamp_into(&self, bounds: Rect) -> Self {
        let w = self.w.min(bounds.w);
        let h = self.h.min(bounds.h);
        let x = self.x.clamp(bounds.x, bounds.right().saturating_sub(w));
        let y = self.y.clamp(bounds.y, bounds.bottom().saturating_sub(h));
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    pub fn clamp_max(self, max: Size) -> Self {
        Self {
            w: self.w.min(max.w),
            h: self.h.min(max.h),
        }
    }

    pub fn grow(self, dw: u32, dh: u32) -> Self {
        Self {
            w: self.w.saturating_add(dw),
            h: self.h.saturating_add(dh),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub fn all(v: u32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_rect_and_moves_origin() {
        let r = Rect::from_size(100, 80);
        let inner = r.inset(Insets::all(10));
        assert_eq!(inner, Rect::new(10, 10, 80, 60));
    }

    #[test]
    fn place_center_positions_child_in_parent() {
        let parent = Rect::from_size(100, 100);
        let child = parent.place(Size::new(20, 10), Anchor::Center);
        assert_eq!(child, Rect::new(40, 45, 20, 10));
    }

    #[test]
    fn place_bottom_center_positions_child_at_bottom() {
        let parent = Rect::new(10, 10, 100, 100);
        let child = parent.place(Size::new(20, 10), Anchor::BottomCenter);
        assert_eq!(child, Rect::new(50, 100, 20, 10));
    }

    #[test]
    fn place_clamps_size_to_parent() {
        let parent = Rect::from_size(50, 40);
        let child = parent.place(Size::new(999, 999), Anchor::TopLeft);
        assert_eq!(child, Rect::new(0, 0, 50, 40));
    }

    #[test]
    fn centered_at_saturates_at_the_top_edge() {
        let r = Rect::centered_at(640, 0, Size::new(100, 40));
        assert_eq!(r, Rect::new(590, 0, 100, 40));

        let r = Rect::centered_at(640, 240, Size::new(400, 200));
        assert_eq!(r, Rect::new(440, 140, 400, 200));
        assert_eq!(r.center(), (640, 240));
    }

    #[test]
    fn clamp_into_pulls_overflowing_rect_back_inside() {
        let bounds = Rect::from_size(200, 100);
        let r = Rect::new(180, 90, 50, 30).clamp_into(bounds);
        assert_eq!(r, Rect::new(150, 70, 50, 30));

        let huge = Rect::new(0, 0, 500, 500).clamp_into(bounds);
        assert_eq!(huge, bounds);
    }

    #[test]
    fn contains_excludes_far_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 14));
        assert!(!r.contains(9, 12));
    }
}
