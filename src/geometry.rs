// Screen geometry for connector endpoints.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned box in viewport coordinates (as `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    pub fn origin(&self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    /// Collapsed boxes belong to elements that are laid out but not shown.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }
}

impl From<web_sys::DomRect> for Rect {
    fn from(r: web_sys::DomRect) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Center of `anchor` expressed relative to the surface's own origin.
pub fn anchor_point(anchor: &Rect, surface: &Rect) -> Point {
    let c = anchor.center();
    let o = surface.origin();
    Point {
        x: c.x - o.x,
        y: c.y - o.y,
    }
}

pub fn connector(word: &Rect, image: &Rect, surface: &Rect) -> Segment {
    Segment {
        from: anchor_point(word, surface),
        to: anchor_point(image, surface),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_center_minus_surface_origin() {
        let anchor = Rect::new(110.0, 220.0, 20.0, 10.0);
        let surface = Rect::new(10.0, 20.0, 800.0, 600.0);
        assert_eq!(anchor_point(&anchor, &surface), Point { x: 110.0, y: 205.0 });
    }

    #[test]
    fn connector_joins_both_centers() {
        let surface = Rect::new(0.0, -50.0, 1024.0, 768.0);
        let word = Rect::new(100.0, 100.0, 16.0, 16.0);
        let image = Rect::new(600.0, 300.0, 16.0, 16.0);
        let seg = connector(&word, &image, &surface);
        assert_eq!(seg.from, Point { x: 108.0, y: 158.0 });
        assert_eq!(seg.to, Point { x: 608.0, y: 358.0 });
    }

    #[test]
    fn zero_sized_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 0.0).is_empty());
    }
}
