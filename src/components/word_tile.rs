use crate::model::Word;
use crate::state::{MarkerKey, MarkerRegistryHandle};
use web_sys::DragEvent;
use yew::prelude::*;

/// Drag payload format; the word id travels as decimal text.
pub const DRAG_FORMAT: &str = "text/plain";

/// Key for a tile's animated element. It changes with every shake trigger,
/// so the element is rebuilt and the CSS animation starts over.
pub fn shake_key(shake: Option<u64>) -> String {
    match shake {
        Some(generation) => format!("shake-{generation}"),
        None => "still".to_string(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WordTileProps {
    pub word: Word,
    pub matched: bool,
    /// Generation of the shake this tile is part of, if any.
    pub shake: Option<u64>,
}

#[function_component(WordTile)]
pub fn word_tile(props: &WordTileProps) -> Html {
    let markers = use_context::<MarkerRegistryHandle>().unwrap_or_default();
    let marker = use_node_ref();
    let dragging = use_state(|| false);

    // Register the anchor circle for connector drawing while mounted
    {
        let marker = marker.clone();
        let key = MarkerKey::Word(props.word.id);
        use_effect_with(key, move |key| {
            let key = *key;
            markers.0.borrow_mut().register(key, marker.clone());
            move || markers.0.borrow_mut().unregister(key, &marker)
        });
    }

    let ondragstart = {
        let id = props.word.id;
        let matched = props.matched;
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            if matched {
                e.prevent_default();
                return;
            }
            if let Some(dt) = e.data_transfer() {
                let _ = dt.set_data(DRAG_FORMAT, &id.to_string());
                dt.set_effect_allowed("move");
            }
            dragging.set(true);
        })
    };
    let ondragend = {
        let dragging = dragging.clone();
        Callback::from(move |_e: DragEvent| dragging.set(false))
    };

    let opacity = if *dragging || props.matched { 0.5 } else { 1.0 };
    let cursor = if props.matched { "default" } else { "grab" };
    let circle_fill = if props.matched { "#2ea043" } else { "#fff" };
    html! {
        <div class="word-container" style="display:flex; align-items:center; justify-content:flex-end; gap:12px; margin:10px 0;">
            <div
                key={shake_key(props.shake)}
                class={classes!("word", props.matched.then_some("matched"), props.shake.map(|_| "shake-box"))}
                draggable={if props.matched { "false" } else { "true" }}
                {ondragstart}
                {ondragend}
                style={format!("opacity:{opacity}; cursor:{cursor}; padding:12px 20px; min-width:140px; text-align:center; font-size:22px; background:#fff8e1; border:2px solid #d4a017; border-radius:10px; user-select:none;")}
            >
                { props.word.text.clone() }
            </div>
            <div
                ref={marker}
                class={classes!("wordCircle", props.matched.then_some("matched-circle"))}
                style={format!("width:16px; height:16px; border-radius:50%; border:3px solid #333; background:{circle_fill}; flex-shrink:0;")}
            />
        </div>
    }
}
