use super::word_tile::{shake_key, DRAG_FORMAT};
use crate::model::{ItemId, Picture};
use crate::state::{MarkerKey, MarkerRegistryHandle};
use web_sys::DragEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PictureTileProps {
    pub picture: Picture,
    pub matched: bool,
    pub shake: Option<u64>,
    /// Emits the id of the word dropped here.
    pub on_drop: Callback<ItemId>,
}

/// Word id carried by a drag payload, if it is one of ours.
pub fn parse_drag_payload(raw: &str) -> Option<ItemId> {
    raw.trim().parse::<u32>().ok().map(ItemId)
}

#[function_component(PictureTile)]
pub fn picture_tile(props: &PictureTileProps) -> Html {
    let markers = use_context::<MarkerRegistryHandle>().unwrap_or_default();
    let marker = use_node_ref();

    {
        let marker = marker.clone();
        let key = MarkerKey::Image(props.picture.id);
        use_effect_with(key, move |key| {
            let key = *key;
            markers.0.borrow_mut().register(key, marker.clone());
            move || markers.0.borrow_mut().unregister(key, &marker)
        });
    }

    // Accepting dragover is what makes the element a drop target
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = {
        let on_drop = props.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let Some(dt) = e.data_transfer() else { return };
            let Ok(raw) = dt.get_data(DRAG_FORMAT) else { return };
            if let Some(word_id) = parse_drag_payload(&raw) {
                on_drop.emit(word_id);
            }
        })
    };

    let opacity = if props.matched { 0.5 } else { 1.0 };
    let circle_fill = if props.matched { "#2ea043" } else { "#fff" };
    let src = &props.picture.src;
    html! {
        <div class="image-container" {ondragover} {ondrop} style="display:flex; align-items:center; gap:12px; margin:10px 0;">
            <div
                ref={marker}
                class={classes!("imageCircle", props.matched.then_some("matched-circle"))}
                style={format!("width:16px; height:16px; border-radius:50%; border:3px solid #333; background:{circle_fill}; flex-shrink:0;")}
            />
            <div
                key={shake_key(props.shake)}
                class={classes!("image", props.matched.then_some("matched"), props.shake.map(|_| "shake-box"))}
                style={format!("opacity:{opacity}; width:120px; height:90px; border:2px solid #d4a017; border-radius:10px; overflow:hidden; background:#fff;")}
            >
                <picture>
                    <source srcset={format!("{src}.webp")} type="image/webp" />
                    <img src={format!("{src}.png")} alt={props.picture.alt.clone()} draggable="false" style="width:100%; height:100%; object-fit:cover;" />
                </picture>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_payload_parsing() {
        assert_eq!(parse_drag_payload("3"), Some(ItemId(3)));
        assert_eq!(parse_drag_payload(" 12\n"), Some(ItemId(12)));
        assert_eq!(parse_drag_payload("monkey"), None);
        assert_eq!(parse_drag_payload(""), None);
        assert_eq!(parse_drag_payload("-1"), None);
    }
}
