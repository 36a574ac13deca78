use std::cell::RefCell;
use std::rc::Rc;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::confetti::ConfettiField;
use crate::config::GameConfig;
use crate::util::{session_seed, viewport_size};

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiOverlayProps {
    pub width: u32,
    pub height: u32,
}

struct ConfettiLoop {
    field: ConfettiField,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    last_ts: Option<f64>,
    frame: Option<AnimationFrame>,
}

fn paint(state: &ConfettiLoop) {
    let (w, h) = state.field.size();
    let ctx = &state.ctx;
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in state.field.particles() {
        ctx.save();
        ctx.translate(p.x, p.y).ok();
        ctx.rotate(p.angle).ok();
        ctx.set_fill_style_str(p.color);
        ctx.fill_rect(-p.width / 2.0, -p.height / 2.0, p.width, p.height);
        ctx.restore();
    }
}

fn schedule(state: Rc<RefCell<ConfettiLoop>>) {
    let next = state.clone();
    let handle = request_animation_frame(move |ts| {
        {
            let mut s = next.borrow_mut();
            s.frame.take();
            let dt = s.last_ts.map(|prev| (ts - prev) / 1000.0).unwrap_or(0.0);
            s.last_ts = Some(ts);
            s.field.step(dt);
            paint(&s);
        }
        schedule(next);
    });
    state.borrow_mut().frame = Some(handle);
}

/// Full-screen confetti shown while the win celebration runs. Unmounting
/// drops the pending animation frame, which stops the loop.
#[function_component]
pub fn ConfettiOverlay(props: &ConfettiOverlayProps) -> Html {
    let config = use_context::<GameConfig>().unwrap_or_default();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let size = (props.width, props.height);
        let count = config.confetti_particles;
        use_effect_with((), move |_| {
            let mut running: Option<(Rc<RefCell<ConfettiLoop>>, EventListener)> = None;
            let ctx = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()?
                    .dyn_into::<CanvasRenderingContext2d>()
                    .ok()?;
                Some((canvas, ctx))
            });
            if let (Some((canvas, ctx)), Some(window)) = (ctx, web_sys::window()) {
                canvas.set_width(size.0);
                canvas.set_height(size.1);
                let field = ConfettiField::new(size.0 as f64, size.1 as f64, count, session_seed());
                let state = Rc::new(RefCell::new(ConfettiLoop {
                    field,
                    canvas,
                    ctx,
                    last_ts: None,
                    frame: None,
                }));
                schedule(state.clone());
                let resize = {
                    let state = state.clone();
                    EventListener::new(&window, "resize", move |_event| {
                        let (w, h) = viewport_size();
                        let mut s = state.borrow_mut();
                        s.canvas.set_width(w);
                        s.canvas.set_height(h);
                        s.field.resize(w as f64, h as f64);
                    })
                };
                running = Some((state, resize));
            }
            move || {
                if let Some((state, resize)) = running {
                    drop(resize);
                    state.borrow_mut().frame.take();
                }
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="confetti"
            style="position:fixed; top:0; left:0; width:100vw; height:100vh; pointer-events:none; z-index:10;"
        />
    }
}
