//! Connector rendering: one straight line per confirmed match, drawn on a
//! full-viewport overlay.
//!
//! The drawing pass is generic over [`ConnectorSurface`] and [`MarkerLookup`]
//! so the browser canvas and the marker registry can be swapped for fakes.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::StrokeStyle;
use crate::geometry::{connector, Rect, Segment};
use crate::model::Match;
use crate::state::MarkerKey;

pub trait ConnectorSurface {
    /// The surface's own box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;
    /// Resizing discards whatever was drawn.
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn stroke_segment(&mut self, segment: &Segment, style: &StrokeStyle);
}

pub trait MarkerLookup {
    /// Live box of a marker, or `None` while it is not on screen.
    fn marker_rect(&self, key: MarkerKey) -> Option<Rect>;
}

/// Clears the surface and strokes every match whose two markers resolve.
/// Returns how many segments were drawn.
pub fn draw_connectors<S, L>(surface: &mut S, markers: &L, matches: &[Match], style: &StrokeStyle) -> usize
where
    S: ConnectorSurface + ?Sized,
    L: MarkerLookup + ?Sized,
{
    surface.clear();
    let origin = surface.bounding_rect();
    let mut drawn = 0;
    for m in matches {
        let word = markers.marker_rect(MarkerKey::Word(m.word_id));
        let image = markers.marker_rect(MarkerKey::Image(m.image_id));
        let (Some(word), Some(image)) = (word, image) else {
            continue;
        };
        surface.stroke_segment(&connector(&word, &image, &origin), style);
        drawn += 1;
    }
    drawn
}

/// Fits the surface to the viewport, then redraws since resizing wiped it.
pub fn resize_and_redraw<S, L>(
    surface: &mut S,
    viewport: (u32, u32),
    markers: &L,
    matches: &[Match],
    style: &StrokeStyle,
) -> usize
where
    S: ConnectorSurface + ?Sized,
    L: MarkerLookup + ?Sized,
{
    surface.resize(viewport.0, viewport.1);
    draw_connectors(surface, markers, matches, style)
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl ConnectorSurface for CanvasSurface {
    fn bounding_rect(&self) -> Rect {
        self.canvas.get_bounding_client_rect().into()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_segment(&mut self, segment: &Segment, style: &StrokeStyle) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(segment.from.x, segment.from.y);
        ctx.line_to(segment.to.x, segment.to.y);
        ctx.set_stroke_style_str(style.color);
        ctx.set_line_width(style.width);
        ctx.set_shadow_blur(style.shadow_blur);
        ctx.set_shadow_color(style.shadow_color);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::ItemId;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq)]
    enum Op {
        Resize(u32, u32),
        Clear,
        Stroke(Segment),
    }

    struct Recorder {
        rect: Rect,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new(rect: Rect) -> Self {
            Self {
                rect,
                ops: Vec::new(),
            }
        }

        fn segments(&self) -> Vec<Segment> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Stroke(s) => Some(*s),
                    _ => None,
                })
                .collect()
        }
    }

    impl ConnectorSurface for Recorder {
        fn bounding_rect(&self) -> Rect {
            self.rect
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.rect.width = width as f64;
            self.rect.height = height as f64;
            self.ops.push(Op::Resize(width, height));
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn stroke_segment(&mut self, segment: &Segment, _style: &StrokeStyle) {
            self.ops.push(Op::Stroke(*segment));
        }
    }

    impl MarkerLookup for HashMap<MarkerKey, Rect> {
        fn marker_rect(&self, key: MarkerKey) -> Option<Rect> {
            self.get(&key).copied()
        }
    }

    fn pair(id: u32) -> Match {
        Match {
            word_id: ItemId(id),
            image_id: ItemId(id),
        }
    }

    fn markers() -> HashMap<MarkerKey, Rect> {
        let mut m = HashMap::new();
        m.insert(MarkerKey::Word(ItemId(1)), Rect::new(90.0, 40.0, 20.0, 20.0));
        m.insert(MarkerKey::Image(ItemId(1)), Rect::new(490.0, 140.0, 20.0, 20.0));
        m.insert(MarkerKey::Word(ItemId(2)), Rect::new(90.0, 240.0, 20.0, 20.0));
        m
    }

    #[test]
    fn clears_then_draws_surface_relative_segments() {
        let mut surface = Recorder::new(Rect::new(0.0, 10.0, 800.0, 600.0));
        let drawn = draw_connectors(&mut surface, &markers(), &[pair(1)], &StrokeStyle::default());
        assert_eq!(drawn, 1);
        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(
            surface.segments(),
            vec![Segment {
                from: Point { x: 100.0, y: 40.0 },
                to: Point { x: 500.0, y: 140.0 },
            }]
        );
    }

    #[test]
    fn unresolved_markers_are_skipped() {
        let mut surface = Recorder::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let drawn = draw_connectors(
            &mut surface,
            &markers(),
            &[pair(2), pair(1), pair(3)],
            &StrokeStyle::default(),
        );
        assert_eq!(drawn, 1);
        assert_eq!(surface.segments().len(), 1);
    }

    #[test]
    fn no_matches_only_clears() {
        let mut surface = Recorder::new(Rect::default());
        let drawn = draw_connectors(&mut surface, &markers(), &[], &StrokeStyle::default());
        assert_eq!(drawn, 0);
        assert_eq!(surface.ops, vec![Op::Clear]);
    }

    #[test]
    fn redraw_after_same_size_resize_is_identical() {
        let style = StrokeStyle::default();
        let mut surface = Recorder::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        resize_and_redraw(&mut surface, (800, 600), &markers(), &[pair(1)], &style);
        let first = surface.segments();
        surface.ops.clear();
        resize_and_redraw(&mut surface, (800, 600), &markers(), &[pair(1)], &style);
        assert_eq!(surface.ops[0], Op::Resize(800, 600));
        assert_eq!(surface.ops[1], Op::Clear);
        assert_eq!(surface.segments(), first);
    }
}
