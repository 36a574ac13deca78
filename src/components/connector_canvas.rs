use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config::GameConfig;
use crate::model::Match;
use crate::render::{draw_connectors, resize_and_redraw, CanvasSurface};
use crate::state::{Debouncer, MarkerRegistryHandle};
use crate::util::{clog, viewport_size};

#[derive(Properties, PartialEq, Clone)]
pub struct ConnectorCanvasProps {
    pub matches: Vec<Match>,
}

/// Full-viewport overlay that joins every matched pair with a line.
#[function_component(ConnectorCanvas)]
pub fn connector_canvas(props: &ConnectorCanvasProps) -> Html {
    let config = use_context::<GameConfig>().unwrap_or_default();
    let markers = use_context::<MarkerRegistryHandle>().unwrap_or_default();
    let canvas_ref = use_node_ref();
    let surface = use_mut_ref(|| None::<CanvasSurface>);
    let matches_ref = use_mut_ref(|| props.matches.clone());
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Effect: keep the latest matches and redraw when they change
    {
        let matches_ref = matches_ref.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.matches.clone(), move |matches| {
            *matches_ref.borrow_mut() = matches.clone();
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // Main mount effect (surface, listeners)
    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        let matches_ref = matches_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let created = canvas.and_then(CanvasSurface::new);
            if created.is_none() {
                gloo::console::warn!("connector canvas has no 2d context");
            }
            *surface.borrow_mut() = created;

            let style = config.connector.clone();
            let draw_closure: Rc<dyn Fn()> = {
                let surface = surface.clone();
                let markers = markers.clone();
                let matches_ref = matches_ref.clone();
                let style = style.clone();
                Rc::new(move || {
                    let mut surface = surface.borrow_mut();
                    let Some(surface) = surface.as_mut() else { return };
                    if !surface.canvas().is_connected() {
                        return;
                    }
                    let matches = matches_ref.borrow();
                    draw_connectors(surface, &*markers.0.borrow(), &matches, &style);
                })
            };
            let resize_closure: Rc<dyn Fn()> = {
                let surface = surface.clone();
                let markers = markers.clone();
                let matches_ref = matches_ref.clone();
                Rc::new(move || {
                    let mut surface = surface.borrow_mut();
                    let Some(surface) = surface.as_mut() else { return };
                    let matches = matches_ref.borrow();
                    let drawn = resize_and_redraw(
                        surface,
                        viewport_size(),
                        &*markers.0.borrow(),
                        &matches,
                        &style,
                    );
                    clog(&format!("connectors redrawn after resize: {}", drawn));
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());

            // Initial fit + draw
            resize_closure();

            let debouncer = Rc::new(RefCell::new(Debouncer::new(config.redraw_debounce_ms)));
            let resize_cb = {
                let resize_closure = resize_closure.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    resize_closure();
                }) as Box<dyn FnMut(_)>)
            };
            let settle_cb = {
                let debouncer = debouncer.clone();
                let draw_closure = draw_closure.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let draw_closure = draw_closure.clone();
                    debouncer.borrow_mut().call(move || draw_closure());
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(window) = &window {
                let _ = window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = window
                    .add_event_listener_with_callback("wheel", settle_cb.as_ref().unchecked_ref());
                // capture so scrolling inside any container is seen too
                let _ = window.add_event_listener_with_callback_and_bool(
                    "scroll",
                    settle_cb.as_ref().unchecked_ref(),
                    true,
                );
            }

            // Cleanup
            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "wheel",
                        settle_cb.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback_and_bool(
                        "scroll",
                        settle_cb.as_ref().unchecked_ref(),
                        true,
                    );
                }
                debouncer.borrow_mut().cancel();
                draw_ref_setup.borrow_mut().take();
                surface.borrow_mut().take();
                let _keep_alive = (&resize_cb, &settle_cb);
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="canvas"
            style="position:fixed; top:0; left:0; width:100vw; height:100vh; pointer-events:none; z-index:5;"
        />
    }
}
